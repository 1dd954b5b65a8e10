use bevy::prelude::Color;

/// Shadow map resolution for the directional sun light.
pub const SHADOW_MAP_SIZE: usize = 8192;

/// Sun placement relative to the map centre.
pub const SUN_POSITION: [f32; 3] = [30.0, 100.0, -15.0];

/// Warm ambient fill (0x78756d).
pub const AMBIENT_COLOR: Color = Color::srgb(0.47, 0.46, 0.43);
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Sky-blue clear colour standing in for an atmosphere simulation.
pub const CLEAR_COLOR: Color = Color::srgb(0.54, 0.78, 0.92);

/// Ground colour for maps that ship no surface texture.
pub const GROUND_COLOR: Color = Color::srgb(0.45, 0.42, 0.32);

/// Water plane colour (0x34cfeb) when `config.json` names none.
pub const WATER_COLOR_FALLBACK: [f32; 3] = [0.20, 0.81, 0.92];
pub const WATER_ALPHA: f32 = 0.6;

/// Vertical world-units visible in the orthographic viewport.
pub const ORTHO_VIEWPORT_HEIGHT: f32 = 150.0;

/// Orbit camera input tuning.
pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;
pub const ZOOM_SENSITIVITY: f32 = 0.1;
