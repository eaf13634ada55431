//! Orbit camera for viewport navigation.
//!
//! Rotates and zooms the viewport camera around a fixed target, clamped to a
//! distance band, and reports every change through `CameraChanged`.

/// Orbit camera resource and controller systems.
pub mod orbit_camera;

use bevy::prelude::*;

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::core::app_state::viewport_is_live;
use crate::engine::viewport::ViewportSet;
use orbit_camera::{CameraChanged, apply_viewer_settings, orbit_camera_controller};

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CameraChanged>().add_systems(
            Update,
            (
                apply_viewer_settings.run_if(resource_changed::<ViewerSettings>),
                orbit_camera_controller,
            )
                .chain()
                .in_set(ViewportSet::Camera)
                .run_if(viewport_is_live),
        );
    }
}
