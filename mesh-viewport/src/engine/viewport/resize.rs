#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::engine::scene::setup::{ViewportCamera, aspect_ratio};

/// Last window size applied to the camera.
#[derive(Resource, Default, Debug)]
pub struct ViewportSize {
    last: Option<Vec2>,
}

impl ViewportSize {
    /// Record a new size; returns the aspect ratio to apply, or `None` when
    /// the size is unchanged.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<f32> {
        let size = Vec2::new(width, height);
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(aspect_ratio(width, height))
    }

    pub fn last(&self) -> Option<Vec2> {
        self.last
    }
}

// The surface itself is resized by the window backend; only the projection
// needs to follow.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut size: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<ViewportCamera>>,
) {
    let Ok(primary) = primary.single() else {
        resized.clear();
        return;
    };

    for event in resized.read().filter(|event| event.window == primary) {
        let Some(aspect_ratio) = size.resize(event.width, event.height) else {
            continue;
        };
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect_ratio;
            }
        }
        debug!(
            "Viewport resized to {}x{} (aspect {aspect_ratio:.3})",
            event.width, event.height
        );
    }
}
