#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOUR, MSAA_SAMPLES, PLACEHOLDER_CUBE_COLOUR,
    PLACEHOLDER_CUBE_SIZE, POINT_LIGHT_COLOUR, POINT_LIGHT_INTENSITY, POINT_LIGHT_RANGE,
};

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::{ViewportState, request_transition};

/// Scene graph root; loaded content is parented here and the camera aims at it.
#[derive(Component)]
pub struct ViewportRoot;

#[derive(Component)]
pub struct ViewportCamera;

#[derive(Component)]
pub struct PlaceholderCube;

/// Build the scene once. Runs while `Uninitialized` and leaves that state on
/// its first run, so the scene is never built twice.
pub fn create_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    state: Res<State<ViewportState>>,
    mut next_state: ResMut<NextState<ViewportState>>,
) {
    let aspect_ratio = windows
        .single()
        .ok()
        .map(|window| aspect_ratio(window.width(), window.height()))
        .unwrap_or(1.0);

    // Transparent background.
    commands.insert_resource(ClearColor(Color::NONE));
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &settings, aspect_ratio);
    spawn_scene_root(&mut commands, &mut meshes, &mut materials);

    commands.insert_resource(OrbitCamera::from_settings(&settings));

    request_transition(&state, &mut next_state, ViewportState::SceneBuilt);
}

/// `width / height`, or 1.0 for a degenerate (minimised) window.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

fn spawn_lighting(commands: &mut Commands) {
    let [r, g, b] = AMBIENT_LIGHT_COLOUR;
    commands.insert_resource(AmbientLight {
        color: Color::srgb(r, g, b),
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });
}

fn spawn_camera(commands: &mut Commands, settings: &ViewerSettings, aspect_ratio: f32) {
    let [r, g, b] = POINT_LIGHT_COLOUR;
    commands
        .spawn((
            Name::new("ViewportCamera"),
            Camera3d::default(),
            Projection::from(settings.perspective(aspect_ratio)),
            msaa(),
            Transform::from_translation(settings.camera_position()).looking_at(Vec3::ZERO, Vec3::Y),
            ViewportCamera,
        ))
        .with_children(|parent| {
            // Follows the camera so the model is always lit from the viewer.
            parent.spawn((
                PointLight {
                    color: Color::srgb(r, g, b),
                    intensity: POINT_LIGHT_INTENSITY,
                    range: POINT_LIGHT_RANGE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
            ));
        });
}

fn spawn_scene_root(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let [r, g, b] = PLACEHOLDER_CUBE_COLOUR;
    let size = PLACEHOLDER_CUBE_SIZE;

    commands
        .spawn((
            Name::new("ViewportRoot"),
            ViewportRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("PlaceholderCube"),
                PlaceholderCube,
                Mesh3d(meshes.add(Cuboid::new(size, size, size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, b),
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
            ));
        });
}

fn msaa() -> Msaa {
    match MSAA_SAMPLES {
        2 => Msaa::Sample2,
        4 => Msaa::Sample4,
        8 => Msaa::Sample8,
        _ => Msaa::Off,
    }
}
