use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use constants::camera::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};
use constants::path::DEFAULT_DATASET_PATH;
use constants::render_settings::{FEATURE_INTERVAL, FEATURE_TICKS_PER_INTERVAL, ORBIT_STEP};

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("settings file failed to load: {0}")]
    Load(String),
    #[error("camera distance range {min}..{max} is empty or negative")]
    DistanceRange { min: f32, max: f32 },
    #[error("feature interval must be positive, got {0}")]
    FeatureInterval(f32),
    #[error("dataset path is empty")]
    EmptyDatasetPath,
}

/// Runtime tuning read from `config/scene.json`. Every field is optional.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub dataset_path: String,
    pub feature_interval: f32,
    pub orbit_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            feature_interval: FEATURE_INTERVAL,
            orbit_step: ORBIT_STEP,
            min_distance: MIN_CAMERA_DISTANCE,
            max_distance: MAX_CAMERA_DISTANCE,
        }
    }
}

impl SceneSettings {
    /// Fixed ticks between featured record changes. Never zero.
    pub fn feature_period_ticks(&self) -> u32 {
        (self.feature_interval * FEATURE_TICKS_PER_INTERVAL)
            .round()
            .max(1.0) as u32
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dataset_path.trim().is_empty() {
            return Err(SettingsError::EmptyDatasetPath);
        }
        if !(self.feature_interval > 0.0) {
            return Err(SettingsError::FeatureInterval(self.feature_interval));
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(SettingsError::DistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }
}
