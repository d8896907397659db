use serde::{Deserialize, Serialize};

/// Construction-time inspection parameters.
///
/// Angles are radians, distances metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionParams {
    /// Relative-angle change per increase/decrease command.
    pub angle_step: f64,
    /// Standoff-distance change per increase/decrease command.
    pub distance_step: f64,
    /// Half-width of the band around the inspection circle counted as in zone.
    pub zone_tolerance: f64,
    /// Standoff distance the planner starts with.
    pub default_standoff_distance: f64,
    /// Relative angle the planner starts with.
    pub default_relative_angle: f64,
}

impl Default for InspectionParams {
    fn default() -> Self {
        Self {
            angle_step: 0.1,
            distance_step: 0.5,
            zone_tolerance: 1.0,
            default_standoff_distance: 3.0,
            default_relative_angle: 0.7,
        }
    }
}

/// Parameter validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InspectionParamsError {
    #[error("angle_step must be finite and > 0 (got {0})")]
    InvalidAngleStep(f64),
    #[error("distance_step must be finite and > 0 (got {0})")]
    InvalidDistanceStep(f64),
    #[error("zone_tolerance must be finite and >= 0 (got {0})")]
    InvalidZoneTolerance(f64),
    #[error("default_standoff_distance must be finite and > 0 (got {0})")]
    InvalidStandoffDistance(f64),
    #[error("default_relative_angle must be finite (got {0})")]
    InvalidRelativeAngle(f64),
}

impl InspectionParams {
    pub fn validate(&self) -> Result<(), InspectionParamsError> {
        if !self.angle_step.is_finite() || self.angle_step <= 0.0 {
            return Err(InspectionParamsError::InvalidAngleStep(self.angle_step));
        }
        if !self.distance_step.is_finite() || self.distance_step <= 0.0 {
            return Err(InspectionParamsError::InvalidDistanceStep(
                self.distance_step,
            ));
        }
        if !self.zone_tolerance.is_finite() || self.zone_tolerance < 0.0 {
            return Err(InspectionParamsError::InvalidZoneTolerance(
                self.zone_tolerance,
            ));
        }
        if !self.default_standoff_distance.is_finite() || self.default_standoff_distance <= 0.0 {
            return Err(InspectionParamsError::InvalidStandoffDistance(
                self.default_standoff_distance,
            ));
        }
        if !self.default_relative_angle.is_finite() {
            return Err(InspectionParamsError::InvalidRelativeAngle(
                self.default_relative_angle,
            ));
        }
        Ok(())
    }
}
