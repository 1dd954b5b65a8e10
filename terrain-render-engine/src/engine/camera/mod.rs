//! Orbit camera for looking around a fixed map.

/// Orbit camera resource, spawn helper and controller system.
pub mod orbit_camera;
