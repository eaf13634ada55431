/// Default `LogPlugin` filter. wgpu and naga are noisy at info level.
pub const LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Canvas selector used on wasm builds.
pub const CANVAS_SELECTOR: &str = "#viewer";

/// Native window title.
pub const WINDOW_TITLE: &str = "Mesh Viewport";

/// MSAA sample count for the viewport camera (edge smoothing).
pub const MSAA_SAMPLES: u32 = 4;

/// Ambient light, sRGB `0xcccccc`.
pub const AMBIENT_LIGHT_COLOUR: [f32; 3] = [0.8, 0.8, 0.8];

/// Ambient intensity 0.8, scaled into bevy's brightness units.
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 0.8 * 500.0;

/// Camera-attached point light, white.
pub const POINT_LIGHT_COLOUR: [f32; 3] = [1.0, 1.0, 1.0];

/// Point light intensity 0.2, scaled into lumens.
pub const POINT_LIGHT_INTENSITY: f32 = 0.2 * 1_000_000.0;

/// Point light range, enough to reach the orbit's far limit.
pub const POINT_LIGHT_RANGE: f32 = 1_000.0;

/// Placeholder cube edge length and colour (unlit green).
pub const PLACEHOLDER_CUBE_SIZE: f32 = 1.0;
pub const PLACEHOLDER_CUBE_COLOUR: [f32; 3] = [0.0, 1.0, 0.0];
