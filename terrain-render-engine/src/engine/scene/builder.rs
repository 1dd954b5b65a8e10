//! Scene assembly once every descriptor and template has loaded.

use bevy::prelude::*;

use crate::engine::assets::map_assets::MapAssets;
use crate::engine::assets::map_config::MapConfig;
use crate::engine::assets::placement::PlacementManifest;
use crate::engine::assets::surface_descriptor::SurfaceDescriptor;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::placement::spawn_placements;
use crate::engine::scene::surface::spawn_surface;
use crate::engine::scene::water::spawn_water_plane;

/// Assemble the map scene: ground mesh, water plane, placed objects,
/// camera framing. Runs once, after the loading pipeline has resolved
/// the descriptors and every template asset.
///
/// A malformed surface is fatal to the ground only; placement still
/// runs so the rest of the map appears. Skipped placement records are
/// logged individually and the scene is built without them.
pub fn build_scene_when_ready(
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut orbit: ResMut<OrbitCamera>,
    map_assets: Res<MapAssets>,
    asset_server: Res<AssetServer>,
    surfaces: Res<Assets<SurfaceDescriptor>>,
    placements: Res<Assets<PlacementManifest>>,
    configs: Res<Assets<MapConfig>>,
) {
    if progress.scene_built || !progress.templates_loaded {
        return;
    }

    let Some(descriptor) = surfaces.get(&map_assets.surface) else {
        return;
    };
    let Some(manifest) = placements.get(&map_assets.placement) else {
        return;
    };

    // surface.png is optional: wait for it to settle either way.
    let texture = match asset_server.get_load_state(&map_assets.surface_texture) {
        Some(bevy::asset::LoadState::Loaded) => Some(map_assets.surface_texture.clone()),
        Some(bevy::asset::LoadState::Failed(_)) => None,
        _ => return,
    };
    // config.json is optional as well.
    let config = match asset_server.get_load_state(&map_assets.config) {
        Some(bevy::asset::LoadState::Loaded) => {
            configs.get(&map_assets.config).cloned().unwrap_or_default()
        }
        Some(bevy::asset::LoadState::Failed(_)) => MapConfig::default(),
        _ => return,
    };

    if let Err(error) = spawn_surface(
        &mut commands,
        &mut meshes,
        &mut materials,
        descriptor,
        texture,
    ) {
        error!("Surface build failed, map has no ground: {error}");
    }

    let extent = descriptor.extent();
    spawn_water_plane(
        &mut commands,
        &mut meshes,
        &mut materials,
        extent,
        descriptor.center(),
        &config,
    );

    let mut rng = rand::rng();
    match spawn_placements(
        &mut commands,
        &manifest.records,
        &map_assets.templates,
        &mut rng,
    ) {
        Ok(skipped) if skipped.is_empty() => {
            info!("Placed {} objects", manifest.records.len());
        }
        Ok(skipped) => {
            warn!(
                "Placed {} objects, skipped {} bad records",
                manifest.records.len() - skipped.len(),
                skipped.len()
            );
        }
        Err(error) => error!("Placement batch aborted: {error}"),
    }

    orbit.frame_extent(extent);
    progress.scene_built = true;
}
