/// Directory holding the viewport's model, relative to the asset root.
pub const RELATIVE_MODEL_DIRECTORY: &str = "cube";

/// Material library loaded before the geometry.
pub const MATERIAL_FILE: &str = "cube.mtl";

/// Geometry file referencing the material library.
pub const GEOMETRY_FILE: &str = "cube.obj";

/// Optional run-time settings, loaded through the JSON asset plugin.
pub const SETTINGS_FILE: &str = "viewer.settings.json";

/// Extension registered with the JSON asset plugin for settings files.
pub const SETTINGS_EXTENSION: &str = "settings.json";
