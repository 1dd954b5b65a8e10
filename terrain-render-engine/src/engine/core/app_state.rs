use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Application lifecycle: scene assembly happens in `Loading`, the
/// camera and shadow systems run in `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Marker for the map name overlay text.
#[derive(Component)]
pub struct MapNameText;

/// Move to `Running` once the scene has been assembled.
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.scene_built {
        info!("Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
