//! Mission variants built on top of the inspection planner.

use std::collections::BTreeMap;

use inspection_core::State;
use serde::{Deserialize, Serialize};

use crate::InspectionPlanner;

/// Errors returned while synthesising a mission's initial trajectory.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    #[error("no solved trajectory for leader {leader_id}")]
    NoLeaderTrajectory { leader_id: u32 },
    #[error("leader trajectory has {available} states, horizon needs {needed}")]
    LeaderTrajectoryTooShort { needed: usize, available: usize },
    #[error("horizon length must be >= 1")]
    EmptyHorizon,
}

/// Behaviour every concrete inspection mission must supply.
///
/// All methods are required so a variant cannot silently inherit an
/// undefined readiness check or heading rule.
pub trait InspectionMission {
    /// Mission readiness.
    fn checks(&self) -> bool;

    /// Initial, not necessarily optimal, trajectory starting at
    /// `initial_pose`. Non-empty on success.
    fn initial_trajectory(
        &mut self,
        planner: &mut InspectionPlanner,
        initial_pose: &State,
    ) -> Result<Vec<State>, MissionError>;

    /// Fill in orientations of `trajectory` from its positions.
    fn initial_orientation(&self, planner: &InspectionPlanner, trajectory: &mut [State]);
}

/// Last reported pose of every expected fleet member.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoseBook {
    poses: BTreeMap<u32, Option<State>>,
}

impl PoseBook {
    /// Expect poses from `drone_ids`; none are known yet.
    pub fn expecting(drone_ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            poses: drone_ids.into_iter().map(|id| (id, None)).collect(),
        }
    }

    /// Record a pose. Unknown drones are added to the fleet.
    pub fn update(&mut self, drone_id: u32, pose: State) {
        self.poses.insert(drone_id, Some(pose));
    }

    pub fn pose(&self, drone_id: u32) -> Option<&State> {
        self.poses.get(&drone_id).and_then(Option::as_ref)
    }

    /// Drones that have not reported a pose yet.
    pub fn missing(&self) -> impl Iterator<Item = u32> + '_ {
        self.poses
            .iter()
            .filter(|(_, pose)| pose.is_none())
            .map(|(id, _)| *id)
    }

    pub fn has_all_poses(&self) -> bool {
        self.missing().next().is_none()
    }
}

/// Latest optimised trajectory per vehicle, as published by the trajectory
/// engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SolvedTrajectories {
    by_vehicle: BTreeMap<u32, Vec<State>>,
}

impl SolvedTrajectories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vehicle_id: u32, trajectory: Vec<State>) {
        self.by_vehicle.insert(vehicle_id, trajectory);
    }

    pub fn get(&self, vehicle_id: u32) -> Option<&[State]> {
        self.by_vehicle.get(&vehicle_id).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.by_vehicle.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn pose_book_tracks_missing_members() {
        let mut book = PoseBook::expecting([1, 2, 3]);
        assert!(!book.has_all_poses());

        book.update(1, State::default());
        book.update(3, State::at(Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(book.missing().collect::<Vec<_>>(), vec![2]);

        book.update(2, State::default());
        assert!(book.has_all_poses());
        assert_eq!(book.pose(3).map(|s| s.pos.x), Some(1.0));
    }

    #[test]
    fn empty_fleet_is_ready() {
        assert!(PoseBook::default().has_all_poses());
    }
}
