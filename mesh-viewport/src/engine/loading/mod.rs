//! Asset loading for the viewport.
//!
//! Settings resolve first, then the material library, then the geometry that
//! references it. Progress and failures go to the log.

/// Two-stage model load (materials, then geometry) and model spawning.
pub mod model_loader;

/// Stage tracking, progress percentages and recorded failures.
pub mod progress;

/// Optional JSON settings resolution.
pub mod settings_loader;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::path::SETTINGS_EXTENSION;

use crate::engine::assets::ModelAssetsPlugin;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::scene::setup::create_scene;
use model_loader::{poll_model_load, start_model_load};
use progress::ModelLoadPipeline;
use settings_loader::{SettingsLoader, resolve_settings, start_settings_load};

pub struct ModelLoadingPlugin;

impl Plugin for ModelLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ModelAssetsPlugin)
            .add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&[SETTINGS_EXTENSION]))
            .init_resource::<ViewerSettings>()
            .init_resource::<SettingsLoader>()
            .init_resource::<ModelLoadPipeline>()
            .add_systems(Startup, start_settings_load)
            .add_systems(
                Update,
                (resolve_settings, start_model_load, poll_model_load)
                    .chain()
                    .after(create_scene),
            );
    }
}
