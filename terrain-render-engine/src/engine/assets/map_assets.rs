use bevy::prelude::*;

use crate::engine::assets::asset_catalog::AssetCatalog;
use crate::engine::assets::map_config::MapConfig;
use crate::engine::assets::placement::PlacementManifest;
use crate::engine::assets::surface_descriptor::SurfaceDescriptor;
use constants::maps::MAPS_DIR;

/// Handles for everything the current map needs, filled in by the
/// loading pipeline. Template scene handles are kept in catalog order
/// so 1-based placement ids resolve by position.
#[derive(Resource, Default)]
pub struct MapAssets {
    pub surface: Handle<SurfaceDescriptor>,
    pub placement: Handle<PlacementManifest>,
    pub catalog: Handle<AssetCatalog>,
    pub config: Handle<MapConfig>,
    pub surface_texture: Handle<Image>,
    pub templates: Vec<Handle<Scene>>,
}

/// Name of the map being viewed, taken from the command line on
/// native builds and defaulting otherwise.
#[derive(Resource, Debug, Clone)]
pub struct MapSelection {
    pub name: String,
}

impl MapSelection {
    /// Asset path of a per-map file, e.g. `maps/jerusalem/surface.json`.
    pub fn asset_path(&self, filename: &str) -> String {
        format!("{}/{}/{}", MAPS_DIR, self.name, filename)
    }
}
