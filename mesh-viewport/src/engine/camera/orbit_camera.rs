#[cfg(test)]
#[path = "orbit_camera_test.rs"]
mod orbit_camera_test;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use constants::viewport::{
    ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SENSITIVITY, ORBIT_ZOOM_STEP, PIXELS_PER_SCROLL_LINE,
};

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::scene::setup::ViewportCamera;

/// Sent whenever the orbit controller moves the camera.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraChanged {
    pub transform: Transform,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Position the orbit was built from, before any user input.
    pub start_position: Vec3,
}

impl OrbitCamera {
    /// Orbit that reproduces a camera at `position` looking at `target`.
    pub fn from_position(position: Vec3, target: Vec3, min_distance: f32, max_distance: f32) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (yaw, pitch) = if radius > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).asin(),
            )
        } else {
            (0.0, 0.0)
        };

        let mut orbit = Self {
            target,
            radius,
            yaw,
            pitch: pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT),
            min_distance,
            max_distance,
            start_position: position,
        };
        orbit.radius = orbit.clamp_distance(radius);
        orbit
    }

    pub fn from_settings(settings: &ViewerSettings) -> Self {
        Self::from_position(
            settings.camera_position(),
            Vec3::ZERO,
            settings.orbit_min_distance,
            settings.orbit_max_distance,
        )
    }

    pub fn clamp_distance(&self, radius: f32) -> f32 {
        radius.clamp(self.min_distance, self.max_distance)
    }

    pub fn set_limits(&mut self, min_distance: f32, max_distance: f32) {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.radius = self.clamp_distance(self.radius);
    }

    /// Drag delta in pixels. Dragging right swings the camera left around the target.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_ROTATE_SENSITIVITY)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Positive `lines` zoom in.
    pub fn zoom(&mut self, lines: f32) {
        self.radius = self.clamp_distance(self.radius * ORBIT_ZOOM_STEP.powf(lines));
    }

    pub fn position(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.target + rotation * Vec3::new(0.0, 0.0, self.radius)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

/// Normalise a scroll delta to lines.
pub fn scroll_lines(delta_y: f32, unit: MouseScrollUnit) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta_y,
        MouseScrollUnit::Pixel => delta_y / PIXELS_PER_SCROLL_LINE,
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<ViewportCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut changed: EventWriter<CameraChanged>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        orbit.rotate(mouse_motion.delta);
    }

    let lines = scroll_lines(mouse_scroll.delta.y, mouse_scroll.unit);
    if lines.abs() > f32::EPSILON {
        orbit.zoom(lines);
    }

    let target = orbit.transform();
    if !transform_approx_eq(&target, &camera_transform) {
        *camera_transform = target;
        changed.write(CameraChanged { transform: target });
    }
}

fn transform_approx_eq(a: &Transform, b: &Transform) -> bool {
    a.translation.abs_diff_eq(b.translation, 1e-3) && a.rotation.abs_diff_eq(b.rotation, 1e-5)
}

// Settings resolve after the scene exists; re-apply pose, projection and limits.
pub fn apply_viewer_settings(
    settings: Res<ViewerSettings>,
    mut orbit: ResMut<OrbitCamera>,
    mut projections: Query<&mut Projection, With<ViewportCamera>>,
) {
    let fresh = OrbitCamera::from_settings(&settings);
    if !orbit.start_position.abs_diff_eq(fresh.start_position, 1e-3) {
        *orbit = fresh;
    } else if orbit.min_distance != fresh.min_distance || orbit.max_distance != fresh.max_distance
    {
        orbit.set_limits(fresh.min_distance, fresh.max_distance);
    }

    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            let aspect_ratio = perspective.aspect_ratio;
            *perspective = settings.perspective(aspect_ratio);
        }
    }
}
