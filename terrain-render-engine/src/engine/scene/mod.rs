//! Scene construction for a loaded map.
//!
//! Turns the JSON data model into renderable entities: the terrain
//! surface mesh, the placed template clones, the lighting rig and the
//! optional water plane.

/// Scene assembly once every descriptor and template has loaded.
pub mod builder;

/// Directional sun, ambient fill and shadow map configuration.
pub mod lighting;

/// Placement of template asset clones from placement records.
pub mod placement;

/// Heightmap-to-triangle-mesh surface generation.
pub mod surface;

/// Optional translucent water plane from per-map configuration.
pub mod water;
