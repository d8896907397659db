//! Ordered goal storage shared with the trajectory engine.
//!
//! Geometry code never creates or drops goals. It reads positions and writes
//! them back one index at a time through [`GoalStore`].

use crate::State;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Out-of-range goal access.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("goal index {index} out of range (len={len})")]
pub struct GoalIndexError {
    pub index: usize,
    pub len: usize,
}

/// Bounded mutation interface over an ordered sequence of goals.
///
/// Implementors expose positions only; orientation and velocity belong to
/// whoever owns the goals.
pub trait GoalStore {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, index: usize) -> Option<Point3<f64>>;

    /// Replace the position of the goal at `index`.
    fn set_position(&mut self, index: usize, pos: Point3<f64>) -> Result<(), GoalIndexError>;
}

/// Owned, ordered goal sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalSequence {
    goals: Vec<State>,
}

impl GoalSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_states(goals: Vec<State>) -> Self {
        Self { goals }
    }

    pub fn push(&mut self, goal: State) {
        self.goals.push(goal);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&State> {
        self.goals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.goals.iter()
    }

    /// All goal positions, in order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.goals.iter().map(|g| g.pos).collect()
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.goals
    }

    pub fn into_states(self) -> Vec<State> {
        self.goals
    }
}

impl From<Vec<State>> for GoalSequence {
    fn from(goals: Vec<State>) -> Self {
        Self::from_states(goals)
    }
}

impl GoalStore for GoalSequence {
    #[inline]
    fn len(&self) -> usize {
        self.goals.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Option<Point3<f64>> {
        self.goals.get(index).map(|g| g.pos)
    }

    fn set_position(&mut self, index: usize, pos: Point3<f64>) -> Result<(), GoalIndexError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(GoalIndexError { index, len })?;
        goal.pos = pos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euler_to_quat;

    #[test]
    fn set_position_keeps_orientation() {
        let mut goal = State::at(Point3::new(1.0, 0.0, 0.0));
        goal.orientation = euler_to_quat(0.0, 0.0, 0.4);
        let mut goals = GoalSequence::from_states(vec![goal.clone()]);

        goals
            .set_position(0, Point3::new(0.0, 2.0, 1.0))
            .expect("in range");

        let stored = goals.get(0).expect("goal");
        assert_eq!(stored.pos, Point3::new(0.0, 2.0, 1.0));
        assert_eq!(stored.orientation, goal.orientation);
    }

    #[test]
    fn out_of_range_write_is_rejected() {
        let mut goals = GoalSequence::new();
        goals.push(State::default());
        let err = goals.set_position(3, Point3::origin()).unwrap_err();
        assert_eq!(err, GoalIndexError { index: 3, len: 1 });
        assert_eq!(goals.len(), 1);
    }
}
