//! Asset types and loaders for the viewport's model and settings.
//!
//! Material libraries and geometry are parsed with `tobj` inside Bevy asset
//! loaders so both stages run on the IO task pool.

/// Error type shared by the model asset loaders.
pub mod error;

/// MTL material library asset and loader.
pub mod material_library;

/// OBJ geometry asset and loader.
pub mod obj_model;

/// Run-time viewer settings loaded from JSON.
pub mod viewer_settings;

use bevy::prelude::*;

use material_library::{MaterialLibrary, MtlLoader};
use obj_model::{ObjLoader, ObjModel};

/// Registers the model asset types and their loaders.
pub struct ModelAssetsPlugin;

impl Plugin for ModelAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<MaterialLibrary>()
            .init_asset::<ObjModel>()
            .register_asset_loader(MtlLoader)
            .register_asset_loader(ObjLoader);
    }
}
