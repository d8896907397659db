use log::info;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::InspectionPlanner;

/// Coarse mission phase gated by the inspection zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissionPhase {
    /// Outside the zone band: fly towards the circle.
    #[default]
    Approach,
    /// Inside the zone band: orbit and inspect.
    Inspect,
}

impl MissionPhase {
    pub fn for_pose(planner: &InspectionPlanner, pose: &Point3<f64>) -> Self {
        if planner.is_inspection_zone(pose) {
            MissionPhase::Inspect
        } else {
            MissionPhase::Approach
        }
    }
}

/// Per-cycle phase gate that reports transitions only.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseTracker {
    phase: MissionPhase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    /// Evaluate `pose`; returns the new phase when it changed.
    pub fn update(
        &mut self,
        planner: &InspectionPlanner,
        pose: &Point3<f64>,
    ) -> Option<MissionPhase> {
        let next = MissionPhase::for_pose(planner, pose);
        if next == self.phase {
            return None;
        }
        info!(
            "mission phase {:?} -> {:?} (radial error {:.2} m)",
            self.phase,
            next,
            planner.zone().radial_error(pose)
        );
        self.phase = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InspectionParams;

    #[test]
    fn reports_only_transitions() {
        let planner = InspectionPlanner::new(InspectionParams::default()).expect("params");
        let mut tracker = PhaseTracker::new();

        assert_eq!(tracker.update(&planner, &Point3::new(10.0, 0.0, 0.0)), None);
        assert_eq!(
            tracker.update(&planner, &Point3::new(3.5, 0.0, 0.0)),
            Some(MissionPhase::Inspect)
        );
        assert_eq!(tracker.update(&planner, &Point3::new(0.0, 2.5, 0.0)), None);
        assert_eq!(
            tracker.update(&planner, &Point3::new(0.0, 0.5, 0.0)),
            Some(MissionPhase::Approach)
        );
        assert_eq!(tracker.phase(), MissionPhase::Approach);
    }
}
