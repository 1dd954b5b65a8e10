use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::asset_catalog::AssetCatalog;
use crate::engine::assets::map_assets::MapAssets;
use crate::engine::loading::progress::LoadingProgress;

/// Resolve the asset catalog into glTF scene handles, then wait for
/// every template and its dependencies to finish loading. Handle
/// order follows catalog order so 1-based placement ids stay valid.
pub fn load_templates(
    mut progress: ResMut<LoadingProgress>,
    mut assets: ResMut<MapAssets>,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<AssetCatalog>>,
) {
    if !progress.descriptors_loaded || progress.templates_loaded {
        return;
    }

    if !progress.templates_requested {
        let Some(catalog) = catalogs.get(&assets.catalog) else {
            return;
        };
        for entry in &catalog.entries {
            info!("Loading template '{}' from {}", entry.name, entry.filepath);
            let handle =
                asset_server.load(GltfAssetLabel::Scene(0).from_asset(entry.filepath.clone()));
            assets.templates.push(handle);
        }
        progress.templates_requested = true;
        return;
    }

    let all_loaded = assets
        .templates
        .iter()
        .all(|template| asset_server.is_loaded_with_dependencies(template));
    if all_loaded {
        info!("{} template assets loaded", assets.templates.len());
        progress.templates_loaded = true;
    }
}
