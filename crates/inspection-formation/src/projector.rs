//! Projection of arbitrary points onto the inspection circle.
//!
//! The circle lies in the horizontal plane through the inspection point.
//! A point keeps its azimuth around the inspection point and is moved
//! radially onto the circle. When the azimuth is undefined (the point is on
//! the vertical line through the centre) the reference axis is used: world
//! +X rotated by the relative angle.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use inspection_core::horizontal_offset;

/// Horizontal offsets shorter than this have no usable azimuth.
pub const AZIMUTH_EPS: f64 = 1e-9;

/// Inspection circle: centre, radius and angular reference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectionCircle {
    pub center: Point3<f64>,
    pub radius: f64,
    /// Azimuth of this vehicle's slot (radians, from world +X).
    pub reference_angle: f64,
}

impl InspectionCircle {
    pub fn new(center: Point3<f64>, radius: f64, reference_angle: f64) -> Self {
        Self {
            center,
            radius,
            reference_angle,
        }
    }

    /// Radius actually used for placement; negative radii collapse to 0.
    #[inline]
    pub fn effective_radius(&self) -> f64 {
        self.radius.max(0.0)
    }

    /// Point on the circle at azimuth `phi`.
    #[inline]
    pub fn point_at(&self, phi: f64) -> Point3<f64> {
        self.center + Vector3::new(phi.cos(), phi.sin(), 0.0) * self.effective_radius()
    }

    /// The vehicle's own slot on the circle.
    #[inline]
    pub fn slot_point(&self) -> Point3<f64> {
        self.point_at(self.reference_angle)
    }

    /// Azimuth of `p` around the centre, falling back to the reference angle.
    pub fn azimuth_of(&self, p: &Point3<f64>) -> f64 {
        let h = horizontal_offset(p, &self.center);
        if h.norm() > AZIMUTH_EPS {
            h.y.atan2(h.x)
        } else {
            self.reference_angle
        }
    }

    /// Nearest point on the circle that keeps the azimuth of `p`.
    pub fn project(&self, p: &Point3<f64>) -> Point3<f64> {
        self.point_at(self.azimuth_of(p))
    }

    /// Euclidean distance from `p` to the centre.
    #[inline]
    pub fn center_distance(&self, p: &Point3<f64>) -> f64 {
        (p - self.center).norm()
    }
}
