//! Application setup and lifecycle.
//!
//! Handles plugin configuration, the loading/running state machine,
//! and platform-specific window setup for native and WASM targets.

/// App construction, plugin registration and system scheduling.
pub mod app_setup;

/// Application state machine and the loading-to-running transition.
pub mod app_state;

/// Platform-specific window configuration.
pub mod window_config;
