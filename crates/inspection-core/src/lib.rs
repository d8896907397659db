//! Core types and utilities for inspection formations.
//!
//! This crate is intentionally small and purely geometric. It knows about
//! vehicle states, ordered goal storage and rotations about the vertical
//! axis, but nothing about missions or inspection parameters.

mod geometry;
mod goals;
mod logger;
mod state;

pub use geometry::{euler_to_quat, horizontal_offset, rotate_about_vertical, yaw_towards};
pub use goals::{GoalIndexError, GoalSequence, GoalStore};
pub use state::State;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
