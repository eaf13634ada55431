//! Scene construction: camera, lights, scene root and placeholder cube.

/// Startup system building the viewport's scene graph.
pub mod setup;

use bevy::prelude::*;

use crate::engine::core::app_state::ViewportState;
use setup::create_scene;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            create_scene.run_if(in_state(ViewportState::Uninitialized)),
        );
    }
}
