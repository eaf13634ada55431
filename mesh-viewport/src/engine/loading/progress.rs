#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use bevy::prelude::*;

use crate::engine::assets::material_library::MaterialLibrary;
use crate::engine::assets::obj_model::ObjModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStage {
    #[default]
    Pending,
    Materials,
    Geometry,
    Complete,
    Failed,
}

/// Load state of the asset for the current stage, as seen by a poll.
#[derive(Debug, Clone, PartialEq)]
pub enum StageStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    MaterialsReady,
    GeometryReady,
    Failed { stage: LoadStage, message: String },
}

#[derive(Resource, Default)]
pub struct ModelLoadPipeline {
    stage: LoadStage,
    pub materials: Option<Handle<MaterialLibrary>>,
    pub geometry: Option<Handle<ObjModel>>,
    errors: Vec<String>,
    reported_percent: Option<u32>,
}

impl ModelLoadPipeline {
    pub fn stage(&self) -> LoadStage {
        self.stage
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, LoadStage::Complete | LoadStage::Failed)
    }

    pub fn begin_materials(&mut self, handle: Handle<MaterialLibrary>) {
        if self.stage == LoadStage::Pending {
            self.materials = Some(handle);
            self.stage = LoadStage::Materials;
        }
    }

    pub fn begin_geometry(&mut self, handle: Handle<ObjModel>) {
        if self.stage == LoadStage::Geometry && self.geometry.is_none() {
            self.geometry = Some(handle);
        }
    }

    /// Whether the current stage has a handle in flight that should be polled.
    pub fn awaiting(&self) -> bool {
        match self.stage {
            LoadStage::Materials => self.materials.is_some(),
            LoadStage::Geometry => self.geometry.is_some(),
            _ => false,
        }
    }

    /// Feed the status of the current stage's asset. Each stage produces at
    /// most one event; failures are recorded once and end the pipeline.
    pub fn observe(&mut self, status: StageStatus) -> Option<LoadEvent> {
        if !self.awaiting() {
            return None;
        }

        match status {
            StageStatus::Loading => None,
            StageStatus::Loaded => match self.stage {
                LoadStage::Materials => {
                    self.stage = LoadStage::Geometry;
                    Some(LoadEvent::MaterialsReady)
                }
                LoadStage::Geometry => {
                    self.stage = LoadStage::Complete;
                    Some(LoadEvent::GeometryReady)
                }
                _ => None,
            },
            StageStatus::Failed(message) => {
                let stage = self.stage;
                self.stage = LoadStage::Failed;
                self.errors.push(message.clone());
                Some(LoadEvent::Failed { stage, message })
            }
        }
    }

    /// Whole-number progress by stage.
    pub fn percent_complete(&self) -> u32 {
        match self.stage {
            LoadStage::Pending | LoadStage::Materials => 0,
            LoadStage::Geometry => 50,
            LoadStage::Complete => 100,
            LoadStage::Failed => self.reported_percent.unwrap_or(0),
        }
    }

    /// Returns the progress percentage when it changed since the last report.
    /// Nothing is reported before loading starts or after a failure.
    pub fn take_progress_report(&mut self) -> Option<u32> {
        if matches!(self.stage, LoadStage::Pending | LoadStage::Failed) {
            return None;
        }
        let percent = self.percent_complete();
        if self.reported_percent == Some(percent) {
            return None;
        }
        self.reported_percent = Some(percent);
        Some(percent)
    }
}
