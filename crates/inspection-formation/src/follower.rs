//! Follower mission: hold a slot on the inspection circle by copying the
//! leader's optimised path, turned about the inspection point by the
//! relative angle.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use inspection_core::{euler_to_quat, rotate_about_vertical, yaw_towards, State};

use crate::{
    InspectionMission, InspectionPlanner, MissionError, PoseBook, SolvedTrajectories, AZIMUTH_EPS,
};

/// Static follower configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowerParams {
    pub drone_id: u32,
    pub leader_id: u32,
    /// Number of states in a planned trajectory, initial pose included.
    pub horizon_length: usize,
    /// Every vehicle whose pose must be known before planning.
    #[serde(default)]
    pub fleet: Vec<u32>,
}

#[derive(Clone, Debug)]
pub struct FollowerMission {
    params: FollowerParams,
    poses: PoseBook,
    solved: SolvedTrajectories,
}

impl FollowerMission {
    pub fn new(params: FollowerParams) -> Self {
        let poses = PoseBook::expecting(params.fleet.iter().copied());
        Self {
            params,
            poses,
            solved: SolvedTrajectories::new(),
        }
    }

    pub fn params(&self) -> &FollowerParams {
        &self.params
    }

    pub fn poses(&self) -> &PoseBook {
        &self.poses
    }

    pub fn update_pose(&mut self, drone_id: u32, pose: State) {
        self.poses.update(drone_id, pose);
    }

    pub fn solved_trajectories(&self) -> &SolvedTrajectories {
        &self.solved
    }

    pub fn set_solved_trajectory(&mut self, vehicle_id: u32, trajectory: Vec<State>) {
        self.solved.insert(vehicle_id, trajectory);
    }
}

impl InspectionMission for FollowerMission {
    fn checks(&self) -> bool {
        if !self.poses.has_all_poses() {
            let missing: Vec<u32> = self.poses.missing().collect();
            warn!(
                "mission planner {} does not have all poses (missing {:?})",
                self.params.drone_id, missing
            );
            return false;
        }
        true
    }

    fn initial_trajectory(
        &mut self,
        planner: &mut InspectionPlanner,
        initial_pose: &State,
    ) -> Result<Vec<State>, MissionError> {
        let horizon = self.params.horizon_length;
        if horizon == 0 {
            return Err(MissionError::EmptyHorizon);
        }
        let leader_id = self.params.leader_id;
        let leader = self
            .solved
            .get(leader_id)
            .ok_or(MissionError::NoLeaderTrajectory { leader_id })?;
        if leader.len() < horizon {
            return Err(MissionError::LeaderTrajectoryTooShort {
                needed: horizon,
                available: leader.len(),
            });
        }

        planner.refresh();

        let pivot = planner.inspection_point();
        let angle = planner.relative_angle();
        let mut trajectory = Vec::with_capacity(horizon);
        trajectory.push(initial_pose.clone());
        trajectory.extend(
            leader[1..horizon]
                .iter()
                .map(|s| State::at(rotate_about_vertical(&s.pos, &pivot, angle))),
        );
        debug!(
            "follower {} built {} states from leader {} (angle={:.3})",
            self.params.drone_id,
            trajectory.len(),
            leader_id,
            angle
        );
        Ok(trajectory)
    }

    /// Yaw every state towards the inspection point. States directly above
    /// or below it keep their orientation.
    fn initial_orientation(&self, planner: &InspectionPlanner, trajectory: &mut [State]) {
        let target = planner.inspection_point();
        for state in trajectory.iter_mut() {
            if let Some(yaw) = yaw_towards(&state.pos, &target, AZIMUTH_EPS) {
                state.orientation = euler_to_quat(0.0, 0.0, yaw);
            }
        }
    }
}
