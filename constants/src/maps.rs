/// Root directory for per-map assets, relative to the asset root.
pub const MAPS_DIR: &str = "maps";

/// Map opened when no map name is given on the command line.
pub const DEFAULT_MAP: &str = "test";

/// Heightmap surface descriptor inside a map directory.
pub const SURFACE_FILENAME: &str = "surface.json";

/// Object placement list inside a map directory.
pub const PLACEMENT_FILENAME: &str = "placement.json";

/// Optional per-map atmosphere configuration.
pub const CONFIG_FILENAME: &str = "config.json";

/// Optional pre-baked ground texture inside a map directory.
pub const SURFACE_TEXTURE_FILENAME: &str = "surface.png";

/// Template asset catalog shared by every map.
pub const CATALOG_PATH: &str = "assets.json";
