/// Map directory layout and per-map descriptor filenames.
pub mod maps;

/// Lighting, camera and water settings shared across the engine.
pub mod render_settings;

/// Height sample range for the 8-bit elevation grids.
pub mod sample;
