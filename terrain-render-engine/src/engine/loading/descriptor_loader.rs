use bevy::prelude::*;

use crate::engine::assets::map_assets::{MapAssets, MapSelection};
use crate::engine::loading::progress::LoadingProgress;
use constants::maps::{
    CATALOG_PATH, CONFIG_FILENAME, PLACEMENT_FILENAME, SURFACE_FILENAME, SURFACE_TEXTURE_FILENAME,
};

/// Kick off every descriptor fetch for the selected map.
pub fn start_loading(
    map: Res<MapSelection>,
    mut assets: ResMut<MapAssets>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading map '{}'", map.name);
    assets.surface = asset_server.load(map.asset_path(SURFACE_FILENAME));
    assets.placement = asset_server.load(map.asset_path(PLACEMENT_FILENAME));
    assets.config = asset_server.load(map.asset_path(CONFIG_FILENAME));
    assets.surface_texture = asset_server.load(map.asset_path(SURFACE_TEXTURE_FILENAME));
    assets.catalog = asset_server.load(CATALOG_PATH);
}

/// Flip the descriptor flag once the surface, placement and catalog
/// JSON are all in. `config.json` and `surface.png` are optional and
/// only need to have settled by scene build time.
pub fn check_descriptor_loading(
    mut progress: ResMut<LoadingProgress>,
    assets: Res<MapAssets>,
    asset_server: Res<AssetServer>,
) {
    if progress.descriptors_loaded {
        return;
    }

    let required: [(&str, bevy::asset::UntypedAssetId); 3] = [
        ("surface descriptor", assets.surface.id().untyped()),
        ("placement list", assets.placement.id().untyped()),
        ("asset catalog", assets.catalog.id().untyped()),
    ];

    let mut all_loaded = true;
    for (label, id) in required {
        match asset_server.get_load_state(id) {
            Some(bevy::asset::LoadState::Loaded) => {}
            Some(bevy::asset::LoadState::Failed(error)) => {
                if !progress.load_failed {
                    progress.load_failed = true;
                    error!("Failed to load {label}: {error}");
                }
                all_loaded = false;
            }
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        info!("Map descriptors loaded");
        progress.descriptors_loaded = true;
    }
}
