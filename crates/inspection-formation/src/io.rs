//! JSON configuration for inspection planners.

use std::{fs, path::Path};

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{
    FollowerMission, FollowerParams, InspectionParams, InspectionParamsError, InspectionPlanner,
};

#[derive(thiserror::Error, Debug)]
pub enum InspectionIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Params(#[from] InspectionParamsError),
}

/// On-disk planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionConfig {
    #[serde(default)]
    pub params: InspectionParams,
    #[serde(default)]
    pub inspection_point: [f64; 3],
    /// Overrides `params.default_standoff_distance` for this session.
    #[serde(default)]
    pub standoff_distance: Option<f64>,
    /// Overrides `params.default_relative_angle` for this session.
    #[serde(default)]
    pub relative_angle: Option<f64>,
    #[serde(default)]
    pub follower: Option<FollowerParams>,
}

impl InspectionConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, InspectionIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), InspectionIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build a planner with the config's parameters and overrides applied.
    pub fn build_planner(&self) -> Result<InspectionPlanner, InspectionIoError> {
        let mut params = self.params;
        if let Some(distance) = self.standoff_distance {
            params.default_standoff_distance = distance;
        }
        if let Some(angle) = self.relative_angle {
            params.default_relative_angle = angle;
        }
        let mut planner = InspectionPlanner::new(params)?;
        let [x, y, z] = self.inspection_point;
        planner.set_inspection_point(Point3::new(x, y, z));
        Ok(planner)
    }

    /// Follower mission, if the config describes one.
    pub fn build_follower(&self) -> Option<FollowerMission> {
        self.follower.clone().map(FollowerMission::new)
    }
}
