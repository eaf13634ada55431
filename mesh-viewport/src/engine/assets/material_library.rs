#[cfg(test)]
#[path = "material_library_test.rs"]
mod material_library_test;

use std::collections::HashMap;
use std::path::Path;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;

use crate::engine::assets::error::ViewerAssetError;

/// Named materials parsed from an MTL file.
#[derive(Asset, TypePath, Debug, Default)]
pub struct MaterialLibrary {
    pub materials: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialLibrary {
    pub fn get(&self, name: &str) -> Option<&Handle<StandardMaterial>> {
        self.materials.get(name)
    }
}

#[derive(Default)]
pub struct MtlLoader;

impl AssetLoader for MtlLoader {
    type Asset = MaterialLibrary;
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

        let (parsed, _) = tobj::load_mtl_buf(&mut bytes.as_slice())?;
        let base_dir = load_context
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut materials = HashMap::with_capacity(parsed.len());
        for material in &parsed {
            let mut standard = standard_material_from_mtl(material);

            // Texture paths in MTL files are relative to the library itself.
            if let Some(texture) = non_empty(&material.diffuse_texture) {
                standard.base_color_texture = Some(load_context.load(base_dir.join(texture)));
            }
            if let Some(texture) = non_empty(&material.normal_texture) {
                standard.normal_map_texture = Some(load_context.load(base_dir.join(texture)));
            }

            let handle =
                load_context.add_labeled_asset(format!("Material/{}", material.name), standard);
            materials.insert(material.name.clone(), handle);
        }

        debug!(
            "Parsed {} material(s) from {}",
            materials.len(),
            load_context.path().display()
        );

        Ok(MaterialLibrary { materials })
    }

    fn extensions(&self) -> &[&str] {
        &["mtl"]
    }
}

/// Map the scalar MTL properties onto a `StandardMaterial`. Textures are
/// attached separately since they need the load context.
pub fn standard_material_from_mtl(material: &tobj::Material) -> StandardMaterial {
    let [r, g, b] = material.diffuse.unwrap_or([1.0, 1.0, 1.0]);
    let alpha = material.dissolve.unwrap_or(1.0).clamp(0.0, 1.0);

    let mut standard = StandardMaterial {
        base_color: Color::srgba(r, g, b, alpha),
        alpha_mode: if alpha < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    };

    if let Some(shininess) = material.shininess {
        standard.perceptual_roughness = roughness_from_shininess(shininess);
    }
    if let Some([sr, sg, sb]) = material.specular {
        standard.reflectance = ((sr + sg + sb) / 3.0).clamp(0.0, 1.0);
    }

    standard
}

/// Phong exponent (0..=1000) to perceptual roughness.
pub fn roughness_from_shininess(shininess: f32) -> f32 {
    (1.0 - (shininess.max(0.0) / 1000.0).sqrt()).clamp(0.089, 1.0)
}

fn non_empty(texture: &Option<String>) -> Option<&str> {
    texture.as_deref().map(str::trim).filter(|t| !t.is_empty())
}
