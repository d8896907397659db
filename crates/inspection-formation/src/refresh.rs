use inspection_core::{rotate_about_vertical, GoalIndexError, GoalStore};

use crate::InspectionCircle;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Rotate every goal by `rotation` radians about the vertical axis through
/// the circle centre, then project it onto the circle.
///
/// Only positions are written; the store keeps its goal count.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(goals, circle), fields(goals = goals.len()))
)]
pub fn refresh_goals<G: GoalStore + ?Sized>(
    goals: &mut G,
    circle: &InspectionCircle,
    rotation: f64,
) -> Result<(), GoalIndexError> {
    for i in 0..goals.len() {
        let Some(pos) = goals.position(i) else {
            return Err(GoalIndexError {
                index: i,
                len: goals.len(),
            });
        };
        let moved = if rotation != 0.0 {
            rotate_about_vertical(&pos, &circle.center, rotation)
        } else {
            pos
        };
        goals.set_position(i, circle.project(&moved))?;
    }
    Ok(())
}
