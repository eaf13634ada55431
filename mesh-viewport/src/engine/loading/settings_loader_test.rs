use std::time::Duration;

use bevy_common_assets::json::JsonAssetPlugin;
use constants::path::SETTINGS_EXTENSION;

use super::*;

fn settings_app(loader: SettingsLoader) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&[SETTINGS_EXTENSION]))
        .init_resource::<ViewerSettings>()
        .insert_resource(loader)
        .add_systems(Startup, start_settings_load)
        .add_systems(Update, resolve_settings);
    app
}

fn run_until_resolved(app: &mut App) {
    for _ in 0..1000 {
        app.update();
        if app.world().resource::<SettingsLoader>().is_resolved() {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
}

#[test]
fn valid_file_replaces_defaults() {
    let mut app = settings_app(SettingsLoader::from_file("fixtures/custom.settings.json"));
    run_until_resolved(&mut app);

    assert!(app.world().resource::<SettingsLoader>().is_resolved());
    let settings = app.world().resource::<ViewerSettings>();
    assert_eq!(settings.field_of_view_degrees, 60.0);
    assert_eq!(settings.camera_position, [0.0, 0.0, 300.0]);
    // Omitted fields keep their defaults.
    assert_eq!(settings.far_clip, ViewerSettings::default().far_clip);
}

#[test]
fn invalid_file_resolves_with_defaults() {
    let mut app = settings_app(SettingsLoader::from_file("fixtures/invalid.settings.json"));
    run_until_resolved(&mut app);

    assert!(app.world().resource::<SettingsLoader>().is_resolved());
    assert_eq!(
        *app.world().resource::<ViewerSettings>(),
        ViewerSettings::default()
    );
}

#[test]
fn missing_file_resolves_with_defaults() {
    let mut app = settings_app(SettingsLoader::from_file("fixtures/absent.settings.json"));
    run_until_resolved(&mut app);

    assert!(app.world().resource::<SettingsLoader>().is_resolved());
    assert_eq!(
        *app.world().resource::<ViewerSettings>(),
        ViewerSettings::default()
    );
}

#[test]
fn pre_resolved_loader_requests_nothing() {
    let mut app = settings_app(SettingsLoader::resolved());
    app.update();

    let loader = app.world().resource::<SettingsLoader>();
    assert!(loader.is_resolved());
    assert!(loader.handle.is_none());
}
