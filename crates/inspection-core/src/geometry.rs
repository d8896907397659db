//! Rotation helpers around the world vertical axis (+Z).

use nalgebra::{Point3, Rotation3, UnitQuaternion, Vector2, Vector3};

/// Quaternion from roll/pitch/yaw (radians), applied in the usual
/// aerospace order (yaw, then pitch, then roll).
#[inline]
pub fn euler_to_quat(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(roll, pitch, yaw)
}

/// Horizontal (XY) offset of `p` from `origin`.
#[inline]
pub fn horizontal_offset(p: &Point3<f64>, origin: &Point3<f64>) -> Vector2<f64> {
    Vector2::new(p.x - origin.x, p.y - origin.y)
}

/// Rotate `p` by `angle` radians about the vertical line through `pivot`.
///
/// Only the XY position of `pivot` matters; `p.z` is preserved.
pub fn rotate_about_vertical(p: &Point3<f64>, pivot: &Point3<f64>, angle: f64) -> Point3<f64> {
    let axis_point = Point3::new(pivot.x, pivot.y, 0.0);
    let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
    axis_point + rot * (p - axis_point)
}

/// Yaw (radians) that points the body X axis from `from` towards `to` in the
/// horizontal plane.
///
/// Returns `None` when `to` lies on the vertical line through `from`.
pub fn yaw_towards(from: &Point3<f64>, to: &Point3<f64>, eps: f64) -> Option<f64> {
    let d = horizontal_offset(to, from);
    if d.norm() <= eps {
        return None;
    }
    Some(d.y.atan2(d.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_offset_pivot() {
        let pivot = Point3::new(1.0, 1.0, 7.0);
        let p = Point3::new(3.0, 1.0, 2.5);
        let q = rotate_about_vertical(&p, &pivot, FRAC_PI_2);
        assert_abs_diff_eq!(q, Point3::new(1.0, 3.0, 2.5), epsilon = 1e-12);
    }

    #[test]
    fn yaw_matches_euler_round_trip() {
        let q = euler_to_quat(0.0, 0.0, 1.2);
        assert_abs_diff_eq!(q.euler_angles().2, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn yaw_towards_is_undefined_on_vertical() {
        let a = Point3::new(0.0, 0.0, 0.0);
        assert!(yaw_towards(&a, &Point3::new(0.0, 0.0, 5.0), 1e-9).is_none());
        let yaw = yaw_towards(&a, &Point3::new(0.0, -2.0, 1.0), 1e-9).expect("defined");
        assert_abs_diff_eq!(yaw, -FRAC_PI_2, epsilon = 1e-12);
    }
}
