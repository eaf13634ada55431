use bevy::window::WindowResolution;

use super::*;

const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

#[test]
fn centre_maps_to_origin() {
    let ndc = normalized_device_coords(Vec2::new(960.0, 540.0), VIEWPORT);
    assert_eq!(ndc, Vec2::ZERO);
}

#[test]
fn corners_map_to_unit_square() {
    assert_eq!(normalized_device_coords(Vec2::ZERO, VIEWPORT), Vec2::new(-1.0, 1.0));
    assert_eq!(normalized_device_coords(VIEWPORT, VIEWPORT), Vec2::new(1.0, -1.0));
    assert_eq!(
        normalized_device_coords(Vec2::new(1920.0, 0.0), VIEWPORT),
        Vec2::new(1.0, 1.0)
    );
}

#[test]
fn in_bounds_positions_stay_in_range() {
    for x in (0..=1920).step_by(97) {
        for y in (0..=1080).step_by(61) {
            let ndc = normalized_device_coords(Vec2::new(x as f32, y as f32), VIEWPORT);
            assert!((-1.0..=1.0).contains(&ndc.x), "x={x} → {}", ndc.x);
            assert!((-1.0..=1.0).contains(&ndc.y), "y={y} → {}", ndc.y);
        }
    }
}

#[test]
fn y_axis_points_up() {
    let top = normalized_device_coords(Vec2::new(0.0, 100.0), VIEWPORT);
    let bottom = normalized_device_coords(Vec2::new(0.0, 900.0), VIEWPORT);
    assert!(top.y > bottom.y);
}

#[test]
fn zero_sized_viewport_maps_to_centre() {
    assert_eq!(normalized_device_coords(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn moved_flag_follows_pointer_down_then_camera_change() {
    let mut pointer = PointerState::default();
    pointer.on_camera_changed();
    assert!(pointer.moved());

    pointer.on_pointer_down();
    assert!(!pointer.moved());

    pointer.on_pointer_move(Vec2::new(10.0, 10.0), VIEWPORT);
    assert!(!pointer.moved());

    pointer.on_camera_changed();
    assert!(pointer.moved());
}

fn pointer_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<CursorMoved>()
        .add_event::<CameraChanged>()
        .init_resource::<PointerState>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_systems(Update, (update_pointer_ray, track_view_movement).chain());
    let primary = app
        .world_mut()
        .spawn((
            Window {
                resolution: WindowResolution::new(1920.0, 1080.0),
                ..default()
            },
            PrimaryWindow,
        ))
        .id();
    (app, primary)
}

fn cursor(window: Entity, position: Vec2) -> CursorMoved {
    CursorMoved {
        window,
        position,
        delta: None,
    }
}

#[test]
fn primary_window_cursor_updates_ndc() {
    let (mut app, primary) = pointer_app();
    app.world_mut().send_event(cursor(primary, Vec2::new(1440.0, 270.0)));
    app.update();

    let pointer = app.world().resource::<PointerState>();
    assert_eq!(pointer.ndc, Vec2::new(0.5, 0.5));
    // No camera in this app, so no ray.
    assert!(pointer.ray.is_none());
}

#[test]
fn other_windows_are_ignored() {
    let (mut app, _) = pointer_app();
    let secondary = app.world_mut().spawn(Window::default()).id();
    app.world_mut().send_event(cursor(secondary, Vec2::new(10.0, 10.0)));
    app.update();

    assert_eq!(app.world().resource::<PointerState>().ndc, Vec2::ZERO);
}

#[test]
fn pointer_down_clears_moved_until_camera_changes() {
    let (mut app, _) = pointer_app();
    app.world_mut().resource_mut::<PointerState>().on_camera_changed();

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    assert!(!app.world().resource::<PointerState>().moved());

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
    app.update();
    assert!(!app.world().resource::<PointerState>().moved());

    app.world_mut().send_event(CameraChanged {
        transform: Transform::default(),
    });
    app.update();
    assert!(app.world().resource::<PointerState>().moved());
}
