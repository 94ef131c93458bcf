//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene plugin, asset loaders, loading systems,
/// and platform-specific host controls.
pub mod app_setup;

/// Application state machine and loading progress transitions.
pub mod app_state;

/// Scene resources, events and the ordered per-frame system sets.
///
/// Everything here runs without a window backend, so tests can drive it headless.
pub mod scene_plugin;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
