#[cfg(test)]
#[path = "viewer_settings_test.rs"]
mod viewer_settings_test;

use bevy::prelude::*;
use constants::path::{GEOMETRY_FILE, MATERIAL_FILE, RELATIVE_MODEL_DIRECTORY};
use constants::viewport::{
    CAMERA_START_POSITION, FAR_CLIP, FIELD_OF_VIEW_DEGREES, NEAR_CLIP, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run-time viewer configuration. Mirrors the JSON file; every field may be
/// omitted and falls back to the compiled-in defaults.
#[derive(Asset, Resource, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub model_directory: String,
    pub material_file: String,
    pub geometry_file: String,
    pub field_of_view_degrees: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub camera_position: [f32; 3],
    pub orbit_min_distance: f32,
    pub orbit_max_distance: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("orbit distance range {min}..{max} is empty or non-positive")]
    OrbitRange { min: f32, max: f32 },
    #[error("clip planes near={near} far={far} are invalid")]
    ClipPlanes { near: f32, far: f32 },
    #[error("field of view {0}° must lie strictly between 0° and 180°")]
    FieldOfView(f32),
    #[error("{0} must not be empty")]
    EmptyFileName(&'static str),
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            model_directory: RELATIVE_MODEL_DIRECTORY.to_string(),
            material_file: MATERIAL_FILE.to_string(),
            geometry_file: GEOMETRY_FILE.to_string(),
            field_of_view_degrees: FIELD_OF_VIEW_DEGREES,
            near_clip: NEAR_CLIP,
            far_clip: FAR_CLIP,
            camera_position: CAMERA_START_POSITION.to_array(),
            orbit_min_distance: ORBIT_MIN_DISTANCE,
            orbit_max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

impl ViewerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.orbit_min_distance <= 0.0 || self.orbit_min_distance > self.orbit_max_distance {
            return Err(SettingsError::OrbitRange {
                min: self.orbit_min_distance,
                max: self.orbit_max_distance,
            });
        }
        if self.near_clip <= 0.0 || self.near_clip >= self.far_clip {
            return Err(SettingsError::ClipPlanes {
                near: self.near_clip,
                far: self.far_clip,
            });
        }
        if !(self.field_of_view_degrees > 0.0 && self.field_of_view_degrees < 180.0) {
            return Err(SettingsError::FieldOfView(self.field_of_view_degrees));
        }
        if self.material_file.trim().is_empty() {
            return Err(SettingsError::EmptyFileName("material_file"));
        }
        if self.geometry_file.trim().is_empty() {
            return Err(SettingsError::EmptyFileName("geometry_file"));
        }
        Ok(())
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }

    pub fn material_path(&self) -> String {
        asset_path(&self.model_directory, &self.material_file)
    }

    pub fn geometry_path(&self) -> String {
        asset_path(&self.model_directory, &self.geometry_file)
    }

    pub fn perspective(&self, aspect_ratio: f32) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.field_of_view_degrees.to_radians(),
            aspect_ratio,
            near: self.near_clip,
            far: self.far_clip,
            ..default()
        }
    }
}

fn asset_path(directory: &str, file: &str) -> String {
    let directory = directory.trim_end_matches('/');
    if directory.is_empty() {
        file.to_string()
    } else {
        format!("{directory}/{file}")
    }
}
