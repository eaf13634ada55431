#[cfg(test)]
#[path = "obj_model_test.rs"]
mod obj_model_test;

use std::collections::HashMap;
use std::path::Path;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext, RenderAssetUsages};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::assets::error::ViewerAssetError;

/// One drawable piece of an OBJ file.
#[derive(Debug, Clone)]
pub struct ObjPart {
    pub name: String,
    pub mesh: Handle<Mesh>,
    /// Material name as declared by `usemtl`, resolved later against the
    /// material library loaded in the first stage.
    pub material: Option<String>,
}

#[derive(Asset, TypePath, Debug, Default)]
pub struct ObjModel {
    pub parts: Vec<ObjPart>,
}

#[derive(Default)]
pub struct ObjLoader;

impl AssetLoader for ObjLoader {
    type Asset = ObjModel;
    type Settings = ();
    type Error = ViewerAssetError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        // tobj resolves `mtllib` through a synchronous callback, so the
        // referenced libraries are read up front.
        let base_dir = load_context
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut libraries = HashMap::new();
        for reference in mtllib_references(&String::from_utf8_lossy(&bytes)) {
            match load_context.read_asset_bytes(base_dir.join(&reference)).await {
                Ok(source) => {
                    libraries.insert(reference, source);
                }
                // Left out of `libraries`, so tobj reports it below.
                Err(err) => warn!(
                    "{}: skipping mtllib {reference}: {err}",
                    load_context.path().display()
                ),
            }
        }

        let (models, materials) =
            tobj::load_obj_buf(&mut bytes.as_slice(), &tobj::GPU_LOAD_OPTIONS, |path| {
                let key = path.to_string_lossy();
                match libraries.get(key.as_ref()) {
                    Some(source) => tobj::load_mtl_buf(&mut source.as_slice()),
                    None => Err(tobj::LoadError::OpenFileFailed),
                }
            })?;

        if models.is_empty() {
            return Err(ViewerAssetError::EmptyGeometry);
        }

        let material_names: Vec<String> = match materials {
            Ok(materials) => materials.into_iter().map(|m| m.name).collect(),
            Err(err) => {
                warn!(
                    "{}: material library unavailable ({err}), parts will use the fallback material",
                    load_context.path().display()
                );
                Vec::new()
            }
        };

        let mut parts = Vec::with_capacity(models.len());
        for (index, model) in models.iter().enumerate() {
            let mesh = mesh_from_obj(&model.mesh);
            let handle = load_context.add_labeled_asset(format!("Mesh{index}"), mesh);
            let material = model
                .mesh
                .material_id
                .and_then(|id| material_names.get(id).cloned());

            parts.push(ObjPart {
                name: model.name.clone(),
                mesh: handle,
                material,
            });
        }

        debug!(
            "Parsed {} part(s) from {}",
            parts.len(),
            load_context.path().display()
        );

        Ok(ObjModel { parts })
    }

    fn extensions(&self) -> &[&str] {
        &["obj"]
    }
}

/// File names named by `mtllib` statements, in declaration order.
pub fn mtllib_references(source: &str) -> Vec<String> {
    let mut references = Vec::new();
    for line in source.lines() {
        let mut words = line.split_whitespace();
        if words.next() != Some("mtllib") {
            continue;
        }
        let name = words.collect::<Vec<_>>().join(" ");
        if !name.is_empty() && !references.contains(&name) {
            references.push(name);
        }
    }
    references
}

/// Build a triangle-list mesh from single-indexed tobj output.
pub fn mesh_from_obj(obj: &tobj::Mesh) -> Mesh {
    let positions: Vec<[f32; 3]> = obj
        .positions
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();
    let vertex_count = positions.len();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    if obj.texcoords.len() / 2 == vertex_count && vertex_count > 0 {
        // OBJ puts V=0 at the bottom of the image.
        let uvs: Vec<[f32; 2]> = obj
            .texcoords
            .chunks_exact(2)
            .map(|t| [t[0], 1.0 - t[1]])
            .collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    }

    mesh.insert_indices(Indices::U32(obj.indices.clone()));

    if obj.normals.len() / 3 == vertex_count && vertex_count > 0 {
        let normals: Vec<[f32; 3]> = obj
            .normals
            .chunks_exact(3)
            .map(|n| [n[0], n[1], n[2]])
            .collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    } else if vertex_count > 0 {
        mesh.compute_normals();
    }

    mesh
}
