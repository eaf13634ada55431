//! Shared configuration for the mesh viewport.
//!
//! Compile-time defaults for the camera, lights, orbit limits, asset paths and
//! render settings. Run-time overrides are applied on top of these by the
//! viewer settings asset.

/// Asset locations relative to the asset root.
pub mod path;

/// Surface, logging and light settings.
pub mod render_settings;

/// Camera projection, starting pose and orbit limits.
pub mod viewport;

pub use render_settings::LOG_FILTER;
