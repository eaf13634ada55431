#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::orbit_camera::CameraChanged;
use crate::engine::scene::setup::ViewportCamera;

#[derive(Resource, Default, Debug)]
pub struct PointerState {
    /// Last pointer position in normalized device coordinates.
    pub ndc: Vec2,
    /// Ray through the pointer. Kept current on every move but not yet
    /// intersected with scene content.
    pub ray: Option<Ray3d>,
    moved: bool,
}

impl PointerState {
    /// Whether the view was moved since the last pointer-down.
    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn on_pointer_down(&mut self) {
        self.moved = false;
    }

    pub fn on_camera_changed(&mut self) {
        self.moved = true;
    }

    pub fn on_pointer_move(&mut self, position: Vec2, viewport: Vec2) -> Vec2 {
        self.ndc = normalized_device_coords(position, viewport);
        self.ndc
    }
}

/// Map a position in logical pixels (origin top-left, y down) to NDC
/// (origin centre, y up). A zero-sized viewport maps everything to the centre.
pub fn normalized_device_coords(position: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (position.x / viewport.x) * 2.0 - 1.0,
        -(position.y / viewport.y) * 2.0 + 1.0,
    )
}

// Primary window cursor only; secondary windows and stale events are ignored.
pub fn update_pointer_ray(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ViewportCamera>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok((primary, window)) = windows.single() else {
        cursor_moved.clear();
        return;
    };
    let Some(cursor) = cursor_moved
        .read()
        .filter(|event| event.window == primary)
        .last()
    else {
        return;
    };

    pointer.on_pointer_move(cursor.position, window.size());
    pointer.ray = cameras
        .single()
        .ok()
        .and_then(|(camera, transform)| camera.viewport_to_world(transform, cursor.position).ok());
}

pub fn track_view_movement(
    mouse_button: Res<ButtonInput<MouseButton>>,
    touches: Option<Res<Touches>>,
    mut camera_changed: EventReader<CameraChanged>,
    mut pointer: ResMut<PointerState>,
) {
    let pressed = mouse_button.get_just_pressed().next().is_some()
        || touches.is_some_and(|touches| touches.any_just_pressed());
    if pressed {
        pointer.on_pointer_down();
    }
    if camera_changed.read().count() > 0 {
        pointer.on_camera_changed();
    }
}
