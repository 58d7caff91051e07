//! Ability errors.

use crate::trajectory::TrajectoryError;
use thiserror::Error;

/// Errors raised by ability hooks.
#[derive(Debug, Error)]
pub enum AbilityError {
    #[error("No border point found within {max_distance} units")]
    NoBorderPoint { max_distance: f32 },

    #[error("Attraction arc unavailable: {0}")]
    Trajectory(#[from] TrajectoryError),

    #[error("Invalid ability config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
