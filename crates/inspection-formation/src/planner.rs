//! Stateful inspection-formation goal geometry.

use log::{debug, info, warn};
use nalgebra::Point3;

use inspection_core::{GoalIndexError, GoalSequence, GoalStore};

use crate::{
    refresh_goals, InspectionCircle, InspectionParams, InspectionParamsError, InspectionZone,
};

/// Inspection parameters plus the goals they shape.
///
/// Setters only update state. Goals follow the parameters on the next
/// [`InspectionPlanner::refresh`].
#[derive(Clone, Debug)]
pub struct InspectionPlanner {
    params: InspectionParams,
    inspection_point: Point3<f64>,
    standoff_distance: f64,
    relative_angle: f64,
    /// Relative angle the goals were last refreshed with.
    applied_angle: f64,
    goals: GoalSequence,
}

impl InspectionPlanner {
    /// Validate `params` and seed the state from its defaults.
    ///
    /// The inspection point starts at the origin.
    pub fn new(params: InspectionParams) -> Result<Self, InspectionParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            inspection_point: Point3::origin(),
            standoff_distance: params.default_standoff_distance,
            relative_angle: params.default_relative_angle,
            applied_angle: params.default_relative_angle,
            goals: GoalSequence::new(),
        })
    }

    #[inline]
    pub fn params(&self) -> &InspectionParams {
        &self.params
    }

    #[inline]
    pub fn inspection_point(&self) -> Point3<f64> {
        self.inspection_point
    }

    pub fn set_inspection_point(&mut self, point: Point3<f64>) {
        if !point.iter().all(|v| v.is_finite()) {
            warn!("ignoring non-finite inspection point {point:?}");
            return;
        }
        self.inspection_point = point;
    }

    #[inline]
    pub fn standoff_distance(&self) -> f64 {
        self.standoff_distance
    }

    /// Set the standoff distance. Negative values are clamped to zero.
    pub fn set_standoff_distance(&mut self, distance: f64) {
        if !distance.is_finite() {
            warn!("ignoring non-finite standoff distance {distance}");
            return;
        }
        if distance < 0.0 {
            warn!("standoff distance {distance:.3} clamped to 0");
        } else if distance == 0.0 {
            warn!("standoff distance is 0, goals collapse onto the inspection point");
        }
        self.standoff_distance = distance.max(0.0);
    }

    /// Add (`increase`) or subtract one `distance_step`.
    pub fn increment_standoff_distance(&mut self, increase: bool) {
        let step = self.params.distance_step;
        let next = if increase {
            self.standoff_distance + step
        } else {
            self.standoff_distance - step
        };
        self.set_standoff_distance(next);
        info!("standoff distance -> {:.3}", self.standoff_distance);
    }

    #[inline]
    pub fn relative_angle(&self) -> f64 {
        self.relative_angle
    }

    pub fn set_relative_angle(&mut self, angle: f64) {
        if !angle.is_finite() {
            warn!("ignoring non-finite relative angle {angle}");
            return;
        }
        self.relative_angle = angle;
    }

    /// Add (`increase`) or subtract one `angle_step`.
    pub fn increment_relative_angle(&mut self, increase: bool) {
        let step = self.params.angle_step;
        let next = if increase {
            self.relative_angle + step
        } else {
            self.relative_angle - step
        };
        self.set_relative_angle(next);
        info!("relative angle -> {:.3} rad", self.relative_angle);
    }

    #[inline]
    pub fn zone_tolerance(&self) -> f64 {
        self.params.zone_tolerance
    }

    /// True when the standoff distance cannot describe a real circle.
    #[inline]
    pub fn is_standoff_degenerate(&self) -> bool {
        self.standoff_distance <= 0.0
    }

    /// Circle defined by the current parameters.
    pub fn circle(&self) -> InspectionCircle {
        InspectionCircle::new(
            self.inspection_point,
            self.standoff_distance,
            self.relative_angle,
        )
    }

    pub fn zone(&self) -> InspectionZone {
        InspectionZone::new(self.circle(), self.params.zone_tolerance)
    }

    /// Fit `point` onto the inspection circle.
    pub fn point_on_circle(&self, point: &Point3<f64>) -> Point3<f64> {
        self.circle().project(point)
    }

    /// This vehicle's slot on the inspection circle.
    pub fn slot_point(&self) -> Point3<f64> {
        self.circle().slot_point()
    }

    /// Whether `pose` lies in the tolerance band around the inspection circle.
    pub fn is_inspection_zone(&self, pose: &Point3<f64>) -> bool {
        self.zone().contains(pose)
    }

    #[inline]
    pub fn goals(&self) -> &GoalSequence {
        &self.goals
    }

    /// Hand a new goal sequence to the planner.
    ///
    /// Fresh goals are taken as already placed for the current relative angle.
    pub fn set_goals(&mut self, goals: GoalSequence) {
        self.goals = goals;
        self.applied_angle = self.relative_angle;
    }

    pub fn take_goals(&mut self) -> GoalSequence {
        std::mem::take(&mut self.goals)
    }

    /// Re-fit every goal to the current inspection parameters.
    ///
    /// Goals are first turned about the inspection point by however much the
    /// relative angle changed since the last refresh, then projected.
    pub fn refresh(&mut self) {
        let mut goals = std::mem::take(&mut self.goals);
        if let Err(err) = self.refresh_store(&mut goals) {
            warn!("goal refresh stopped early: {err}");
        }
        self.goals = goals;
    }

    /// [`InspectionPlanner::refresh`] for goals kept outside the planner.
    ///
    /// On error the relative angle stays pending, so the next refresh
    /// applies the rotation again.
    pub fn refresh_store<G: GoalStore + ?Sized>(
        &mut self,
        goals: &mut G,
    ) -> Result<(), GoalIndexError> {
        let circle = self.circle();
        let rotation = self.relative_angle - self.applied_angle;
        refresh_goals(goals, &circle, rotation)?;
        self.applied_angle = self.relative_angle;
        debug!(
            "refreshed {} goals: r={:.3} angle={:.3} rotation={:.3}",
            goals.len(),
            circle.effective_radius(),
            circle.reference_angle,
            rotation
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use inspection_core::State;

    fn planner() -> InspectionPlanner {
        InspectionPlanner::new(InspectionParams::default()).expect("params")
    }

    #[test]
    fn starts_from_defaults() {
        let p = planner();
        assert_eq!(p.standoff_distance(), 3.0);
        assert_eq!(p.relative_angle(), 0.7);
        assert_eq!(p.inspection_point(), Point3::origin());
        assert!(p.goals().is_empty());
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = InspectionParams {
            zone_tolerance: -1.0,
            ..InspectionParams::default()
        };
        assert!(InspectionPlanner::new(params).is_err());
    }

    #[test]
    fn increments_are_symmetric() {
        let mut p = planner();
        p.increment_standoff_distance(true);
        assert_abs_diff_eq!(p.standoff_distance(), 3.5, epsilon = 1e-12);
        p.increment_standoff_distance(false);
        assert_abs_diff_eq!(p.standoff_distance(), 3.0, epsilon = 1e-12);

        p.increment_relative_angle(false);
        p.increment_relative_angle(true);
        assert_abs_diff_eq!(p.relative_angle(), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn setters_do_not_touch_goals() {
        let mut p = planner();
        let goals = GoalSequence::from_states(vec![State::at(Point3::new(10.0, 0.0, 0.0))]);
        p.set_goals(goals.clone());
        p.set_standoff_distance(5.0);
        p.set_relative_angle(1.0);
        p.set_inspection_point(Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p.goals(), &goals);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut p = planner();
        p.set_standoff_distance(f64::INFINITY);
        p.set_relative_angle(f64::NAN);
        p.set_inspection_point(Point3::new(0.0, f64::NAN, 0.0));
        assert_eq!(p.standoff_distance(), 3.0);
        assert_eq!(p.relative_angle(), 0.7);
        assert_eq!(p.inspection_point(), Point3::origin());
    }

    #[test]
    fn negative_standoff_is_clamped_and_flagged() {
        let mut p = planner();
        p.set_standoff_distance(-1.0);
        assert_eq!(p.standoff_distance(), 0.0);
        assert!(p.is_standoff_degenerate());

        p.set_standoff_distance(0.25);
        for _ in 0..3 {
            p.increment_standoff_distance(false);
        }
        assert_eq!(p.standoff_distance(), 0.0);
    }

    /// Store that rejects writes past its first goal.
    struct FirstOnly(Vec<Point3<f64>>);

    impl GoalStore for FirstOnly {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn position(&self, index: usize) -> Option<Point3<f64>> {
            self.0.get(index).copied()
        }

        fn set_position(&mut self, index: usize, pos: Point3<f64>) -> Result<(), GoalIndexError> {
            if index > 0 {
                return Err(GoalIndexError { index, len: 1 });
            }
            self.0[index] = pos;
            Ok(())
        }
    }

    #[test]
    fn failed_refresh_keeps_angle_pending() {
        let mut p = planner();
        p.set_relative_angle(0.7 + std::f64::consts::FRAC_PI_2);

        let mut broken = FirstOnly(vec![Point3::new(4.0, 0.0, 0.0); 2]);
        assert_eq!(
            p.refresh_store(&mut broken),
            Err(GoalIndexError { index: 1, len: 1 })
        );

        let mut goals = GoalSequence::from_states(vec![State::at(Point3::new(4.0, 0.0, 0.0))]);
        p.refresh_store(&mut goals).expect("refresh");
        assert_abs_diff_eq!(
            goals.position(0).expect("goal"),
            Point3::new(0.0, 3.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn repeated_refresh_is_idempotent() {
        let mut p = planner();
        p.set_goals(GoalSequence::from_states(vec![
            State::at(Point3::new(7.0, -1.0, 2.0)),
            State::at(Point3::new(0.0, 0.0, 0.0)),
        ]));
        p.set_relative_angle(2.0);
        p.refresh();
        let first = p.goals().positions();
        p.refresh();
        for (a, b) in first.iter().zip(p.goals().positions()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn goal_at_inspection_point_goes_to_slot() {
        let mut p = planner();
        p.set_goals(GoalSequence::from_states(vec![State::default()]));
        p.refresh();
        assert_abs_diff_eq!(
            p.goals().position(0).expect("goal"),
            p.slot_point(),
            epsilon = 1e-12
        );
    }
}
