use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use constants::LOG_FILTER;

use crate::engine::camera::OrbitCameraPlugin;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::ModelLoadingPlugin;
use crate::engine::scene::ScenePlugin;
use crate::engine::viewport::ViewportPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(ViewportPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(OrbitCameraPlugin)
        .add_plugins(ModelLoadingPlugin);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
