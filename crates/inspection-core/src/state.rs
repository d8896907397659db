use nalgebra::{Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Desired or measured vehicle state as exchanged with the trajectory engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Position in the world frame (m).
    pub pos: Point3<f64>,
    /// Velocity in the world frame (m/s).
    #[serde(default = "Vector3::zeros")]
    pub vel: Vector3<f64>,
    /// Body orientation; identity means heading along world +X.
    #[serde(default = "UnitQuaternion::identity")]
    pub orientation: UnitQuaternion<f64>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            pos: Point3::origin(),
            vel: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl State {
    /// Hover state at `pos` with identity orientation.
    pub fn at(pos: Point3<f64>) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Heading (yaw) of the body orientation, radians in `(-π, π]`.
    #[inline]
    pub fn yaw(&self) -> f64 {
        self.orientation.euler_angles().2
    }
}
