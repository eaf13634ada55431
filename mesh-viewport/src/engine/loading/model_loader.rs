#[cfg(test)]
#[path = "model_loader_test.rs"]
mod model_loader_test;

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::engine::assets::material_library::MaterialLibrary;
use crate::engine::assets::obj_model::ObjModel;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::loading::progress::{LoadEvent, ModelLoadPipeline, StageStatus};
use crate::engine::loading::settings_loader::SettingsLoader;
use crate::engine::scene::setup::ViewportRoot;

/// Parent entity of the spawned model parts.
#[derive(Component)]
pub struct LoadedModel;

// Kick off the material library once settings are final.
pub fn start_model_load(
    mut pipeline: ResMut<ModelLoadPipeline>,
    settings_loader: Res<SettingsLoader>,
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
) {
    if !settings_loader.is_resolved() || pipeline.materials.is_some() {
        return;
    }
    let path = settings.material_path();
    info!("Loading material library from: {path}");
    pipeline.begin_materials(asset_server.load(path));
}

pub fn poll_model_load(
    mut pipeline: ResMut<ModelLoadPipeline>,
    mut commands: Commands,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    models: Res<Assets<ObjModel>>,
    libraries: Res<Assets<MaterialLibrary>>,
    roots: Query<Entity, With<ViewportRoot>>,
) {
    if !pipeline.awaiting() {
        return;
    }

    let id: Option<UntypedAssetId> = if pipeline.geometry.is_some() {
        pipeline.geometry.as_ref().map(|h| h.id().untyped())
    } else {
        pipeline.materials.as_ref().map(|h| h.id().untyped())
    };
    let Some(id) = id else {
        return;
    };

    let event = pipeline.observe(stage_status(&asset_server, id));

    match event {
        Some(LoadEvent::MaterialsReady) => {
            let path = settings.geometry_path();
            info!("✓ Material library loaded, loading geometry from: {path}");
            pipeline.begin_geometry(asset_server.load(path));
        }
        Some(LoadEvent::GeometryReady) => {
            let model = pipeline.geometry.as_ref().and_then(|h| models.get(h));
            let library = pipeline.materials.as_ref().and_then(|h| libraries.get(h));
            match (roots.single(), model) {
                (Ok(root), Some(model)) => {
                    let fallback = standard_materials.add(StandardMaterial::default());
                    spawn_model(&mut commands, root, model, library, fallback);
                    info!("✓ Model added to scene ({} part(s))", model.parts.len());
                }
                (Err(_), _) => debug!("Viewport gone before model finished loading; ignoring"),
                (_, None) => warn!("Geometry reported loaded but is not in asset storage"),
            }
        }
        Some(LoadEvent::Failed { stage, message }) => {
            error!("Model load failed during {stage:?} stage: {message}");
        }
        None => {}
    }

    if let Some(percent) = pipeline.take_progress_report() {
        info!("{percent}% loaded");
    }
}

pub fn stage_status(asset_server: &AssetServer, id: UntypedAssetId) -> StageStatus {
    match asset_server.get_load_state(id) {
        Some(LoadState::Loaded) => StageStatus::Loaded,
        Some(LoadState::Failed(err)) => StageStatus::Failed(err.to_string()),
        _ => StageStatus::Loading,
    }
}

/// Spawn every part under a `LoadedModel` parented to the scene root. Parts
/// whose material is missing from the library use `fallback`.
pub fn spawn_model(
    commands: &mut Commands,
    root: Entity,
    model: &ObjModel,
    library: Option<&MaterialLibrary>,
    fallback: Handle<StandardMaterial>,
) -> Entity {
    let parent = commands
        .spawn((
            Name::new("LoadedModel"),
            LoadedModel,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    commands.entity(root).add_child(parent);

    commands.entity(parent).with_children(|children| {
        for part in &model.parts {
            let material = part
                .material
                .as_deref()
                .and_then(|name| library.and_then(|l| l.get(name)))
                .cloned()
                .unwrap_or_else(|| fallback.clone());

            children.spawn((
                Name::new(part.name.clone()),
                Mesh3d(part.mesh.clone()),
                MeshMaterial3d(material),
                Transform::default(),
            ));
        }
    });

    parent
}
