use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;

/// Near and far clip planes.
pub const NEAR_CLIP: f32 = 1.0;
pub const FAR_CLIP: f32 = 1000.0;

/// Camera position on creation. The camera always looks at the origin.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(100.0, 300.0, 250.0);

/// Orbit distance limits from the origin.
pub const ORBIT_MIN_DISTANCE: f32 = 200.0;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;

/// Radians of rotation per pixel of drag.
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;

/// Zoom factor per scroll line.
pub const ORBIT_ZOOM_STEP: f32 = 0.95;

/// Pixel scroll is scaled to lines with this factor.
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Pitch stays this far short of the poles so `looking_at` stays stable.
pub const ORBIT_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
