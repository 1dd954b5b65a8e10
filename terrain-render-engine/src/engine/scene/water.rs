//! Optional translucent water plane from per-map configuration.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::engine::assets::map_config::MapConfig;
use constants::render_settings::{WATER_ALPHA, WATER_COLOR_FALLBACK};

/// Marker for the water plane entity.
#[derive(Component)]
pub struct WaterPlane;

/// Spawn a still water plane at the configured height, sized to the
/// map footprint. Maps without a configured water height get none.
pub fn spawn_water_plane(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    extent: Vec2,
    center: Vec2,
    config: &MapConfig,
) {
    let Some(water_height) = config.water_height else {
        return;
    };
    let [r, g, b] = config.water_color.unwrap_or(WATER_COLOR_FALLBACK);

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(extent.x, extent.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, WATER_ALPHA),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.1,
            reflectance: 0.6,
            ..default()
        })),
        Transform::from_xyz(center.x, water_height, center.y),
        WaterPlane,
        NotShadowCaster,
    ));
    info!("Water plane spawned at height {water_height}");
}
