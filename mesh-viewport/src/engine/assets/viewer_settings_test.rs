use super::*;

#[test]
fn defaults_match_viewport_constants() {
    let settings = ViewerSettings::default();
    assert_eq!(settings.field_of_view_degrees, 45.0);
    assert_eq!(settings.near_clip, 1.0);
    assert_eq!(settings.far_clip, 1000.0);
    assert_eq!(settings.camera_position(), Vec3::new(100.0, 300.0, 250.0));
    assert_eq!(settings.orbit_min_distance, 200.0);
    assert_eq!(settings.orbit_max_distance, 500.0);
    assert!(settings.validate().is_ok());
}

#[test]
fn default_paths_point_at_cube() {
    let settings = ViewerSettings::default();
    assert_eq!(settings.material_path(), "cube/cube.mtl");
    assert_eq!(settings.geometry_path(), "cube/cube.obj");
}

#[test]
fn partial_json_fills_defaults() {
    let settings: ViewerSettings =
        serde_json::from_str(r#"{ "orbit_max_distance": 800.0, "model_directory": "ship/" }"#)
            .expect("valid settings");

    assert_eq!(settings.orbit_max_distance, 800.0);
    assert_eq!(settings.orbit_min_distance, 200.0);
    assert_eq!(settings.geometry_path(), "ship/cube.obj");
}

#[test]
fn empty_directory_yields_bare_file_names() {
    let settings = ViewerSettings {
        model_directory: String::new(),
        ..Default::default()
    };
    assert_eq!(settings.material_path(), "cube.mtl");
}

#[test]
fn rejects_inverted_orbit_range() {
    let settings = ViewerSettings {
        orbit_min_distance: 600.0,
        ..Default::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::OrbitRange {
            min: 600.0,
            max: 500.0
        })
    );
}

#[test]
fn rejects_bad_clip_planes() {
    let settings = ViewerSettings {
        near_clip: 1000.0,
        ..Default::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ClipPlanes { .. })
    ));
}

#[test]
fn rejects_degenerate_field_of_view() {
    for fov in [0.0, 180.0, -10.0, f32::NAN] {
        let settings = ViewerSettings {
            field_of_view_degrees: fov,
            ..Default::default()
        };
        assert!(settings.validate().is_err(), "fov {fov} accepted");
    }
}

#[test]
fn rejects_blank_file_names() {
    let settings = ViewerSettings {
        geometry_file: "  ".to_string(),
        ..Default::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::EmptyFileName("geometry_file"))
    );
}

#[test]
fn perspective_uses_radians() {
    let projection = ViewerSettings::default().perspective(2.0);
    assert!((projection.fov - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    assert_eq!(projection.aspect_ratio, 2.0);
    assert_eq!(projection.near, 1.0);
    assert_eq!(projection.far, 1000.0);
}
