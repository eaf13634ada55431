#[cfg(test)]
#[path = "settings_loader_test.rs"]
mod settings_loader_test;

use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::SETTINGS_FILE;

use crate::engine::assets::viewer_settings::ViewerSettings;

#[derive(Resource)]
pub struct SettingsLoader {
    path: String,
    handle: Option<Handle<ViewerSettings>>,
    resolved: bool,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::from_file(SETTINGS_FILE)
    }
}

impl SettingsLoader {
    /// Loader reading settings from `path`, relative to the asset root.
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handle: None,
            resolved: false,
        }
    }

    /// Loader that needs no file; compiled-in defaults are final.
    pub fn resolved() -> Self {
        Self {
            resolved: true,
            ..Self::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

pub fn start_settings_load(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    if loader.resolved || loader.handle.is_some() {
        return;
    }
    loader.handle = Some(asset_server.load(loader.path.clone()));
}

// Settings are resolved once, whether the file loads, is invalid, or is absent.
pub fn resolve_settings(
    mut loader: ResMut<SettingsLoader>,
    mut settings: ResMut<ViewerSettings>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ViewerSettings>>,
) {
    if loader.resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => {
            let Some(loaded) = settings_assets.get(&handle) else {
                return;
            };
            match loaded.validate() {
                Ok(()) => {
                    info!("✓ Viewer settings loaded from {}", loader.path);
                    *settings = loaded.clone();
                }
                Err(err) => warn!("Ignoring {}: {err}; using defaults", loader.path),
            }
            loader.resolved = true;
        }
        Some(LoadState::Failed(err)) => {
            warn!("No usable {} ({err}); using defaults", loader.path);
            loader.resolved = true;
        }
        _ => {}
    }
}
