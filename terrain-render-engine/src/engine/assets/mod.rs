//! Data model for the JSON contracts a map is described by.
//!
//! Mirrors the external file formats exactly: the heightmap surface
//! descriptor, the placement record list, the glTF template catalog,
//! and optional per-map atmosphere configuration.

/// Template asset catalog mapping names to glTF files.
pub mod asset_catalog;

/// Descriptor and template handles for the currently selected map.
pub mod map_assets;

/// Optional per-map atmosphere configuration (water plane).
pub mod map_config;

/// Placement records addressing catalog templates by 1-based id.
pub mod placement;

/// Heightmap surface descriptor with structural validation.
pub mod surface_descriptor;
