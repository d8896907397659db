use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::InspectionCircle;

/// Tolerance band around the inspection circle.
///
/// A position is in zone when its distance to the inspection point lies in
/// `[radius - tolerance, radius + tolerance]` (bounds inclusive), using the
/// circle's effective radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectionZone {
    pub circle: InspectionCircle,
    pub tolerance: f64,
}

impl InspectionZone {
    pub fn new(circle: InspectionCircle, tolerance: f64) -> Self {
        Self { circle, tolerance }
    }

    /// Signed radial error: positive outside the circle, negative inside.
    #[inline]
    pub fn radial_error(&self, pos: &Point3<f64>) -> f64 {
        self.circle.center_distance(pos) - self.circle.effective_radius()
    }

    #[inline]
    pub fn contains(&self, pos: &Point3<f64>) -> bool {
        self.radial_error(pos).abs() <= self.tolerance
    }
}
