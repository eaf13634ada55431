//! Core application setup and lifecycle state.
//!
//! Handles application assembly, window configuration and the viewport state
//! machine for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Viewport lifecycle state machine.
///
/// `Uninitialized → SceneBuilt → Animating → Destroyed`, with teardown
/// reachable from either live state.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
