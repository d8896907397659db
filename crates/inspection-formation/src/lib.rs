//! Inspection-formation goal geometry.
//!
//! Vehicles inspecting a fixed point hold slots on a horizontal circle around
//! it. This crate keeps the circle parameters (inspection point, standoff
//! distance, relative angle), fits trajectory goals onto the circle, and
//! answers whether a pose is inside the inspection zone.
//!
//! ## Quickstart
//!
//! ```
//! use inspection_core::{GoalSequence, State};
//! use inspection_formation::{InspectionParams, InspectionPlanner};
//! use nalgebra::Point3;
//!
//! let mut planner = InspectionPlanner::new(InspectionParams::default()).expect("default params");
//! planner.set_goals(GoalSequence::from_states(vec![
//!     State::at(Point3::new(10.0, 0.0, 2.0)),
//!     State::at(Point3::new(0.0, -4.0, 0.0)),
//! ]));
//!
//! planner.increment_standoff_distance(true);
//! planner.refresh();
//!
//! for pos in planner.goals().positions() {
//!     let radius = (pos - planner.inspection_point()).norm();
//!     assert!((radius - planner.standoff_distance()).abs() < 1e-9);
//! }
//! assert!(planner.is_inspection_zone(&Point3::new(3.0, 0.0, 0.0)));
//! ```
//!
//! Setters never move goals; call [`InspectionPlanner::refresh`] afterwards.
//! Mission variants implement [`InspectionMission`]; [`FollowerMission`]
//! follows a leader's optimised path from a rotated slot.

mod follower;
mod io;
mod mission;
mod params;
mod phase;
mod planner;
mod projector;
mod refresh;
mod zone;

pub use follower::{FollowerMission, FollowerParams};
pub use io::{InspectionConfig, InspectionIoError};
pub use mission::{InspectionMission, MissionError, PoseBook, SolvedTrajectories};
pub use params::{InspectionParams, InspectionParamsError};
pub use phase::{MissionPhase, PhaseTracker};
pub use planner::InspectionPlanner;
pub use projector::{InspectionCircle, AZIMUTH_EPS};
pub use refresh::refresh_goals;
pub use zone::InspectionZone;

pub use inspection_core::{GoalIndexError, GoalSequence, GoalStore, State};
