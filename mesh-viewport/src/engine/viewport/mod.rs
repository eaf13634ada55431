//! Viewport lifecycle: frame loop, resize, pointer mapping and teardown.
//!
//! Input handlers only run while the viewport is live, so leaving the live
//! states on teardown also uninstalls them.

/// Frame scheduling, the per-frame draw and teardown.
pub mod frame_loop;

/// Pointer-move to NDC and ray mapping, plus the view-moved flag.
pub mod pointer;

/// Window resize handling for the camera projection.
pub mod resize;

use bevy::prelude::*;

use crate::engine::core::app_state::{ViewportState, viewport_is_live};
use frame_loop::{FrameLoop, TeardownRequest, begin_animation, handle_teardown, render_frame};
use pointer::{PointerState, track_view_movement, update_pointer_ray};
use resize::{ViewportSize, handle_window_resize};

/// Per-frame ordering shared by the viewport plugins.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewportSet {
    Input,
    Camera,
    Tracking,
    Frame,
    Teardown,
}

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewportState>()
            .add_event::<TeardownRequest>()
            .init_resource::<FrameLoop>()
            .init_resource::<ViewportSize>()
            .init_resource::<PointerState>()
            .configure_sets(
                Update,
                (
                    ViewportSet::Input,
                    ViewportSet::Camera,
                    ViewportSet::Tracking,
                    ViewportSet::Frame,
                    ViewportSet::Teardown,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    update_pointer_ray.in_set(ViewportSet::Input),
                    track_view_movement.in_set(ViewportSet::Tracking),
                )
                    .run_if(viewport_is_live),
            )
            .add_systems(
                Update,
                (
                    handle_window_resize.run_if(viewport_is_live),
                    begin_animation.run_if(in_state(ViewportState::SceneBuilt)),
                    render_frame.run_if(in_state(ViewportState::Animating)),
                )
                    .chain()
                    .in_set(ViewportSet::Frame),
            )
            .add_systems(
                Update,
                handle_teardown
                    .in_set(ViewportSet::Teardown)
                    .run_if(viewport_is_live),
            );
    }
}
