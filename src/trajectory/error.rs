//! Trajectory solver errors.

use thiserror::Error;

/// Reasons a launch cannot be derived from its boundary conditions.
///
/// The solver fails fast instead of handing out `NaN` flight times.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("Non-finite value in {field}")]
    NonFinite { field: &'static str },

    #[error("Vertical acceleration is zero; no apex can be reached")]
    ZeroVerticalAcceleration,

    #[error("Apex height {jump_height} points along vertical acceleration {y_acceleration}")]
    ApexAgainstGravity {
        jump_height: f32,
        y_acceleration: f32,
    },

    #[error("Target lies {displacement_y} vertically from the origin, beyond apex height {jump_height}")]
    TargetBeyondApex {
        displacement_y: f32,
        jump_height: f32,
    },

    #[error("Zero apex height with a level target; flight time is zero")]
    ZeroFlightTime,

    #[error("Invalid attraction config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
