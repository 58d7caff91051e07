//! Ballistic attraction solver.
//!
//! Derives closed-form launch parameters from boundary conditions (origin,
//! target, apex height, per-axis accelerations) and reproduces velocity and
//! position at any time since launch.
//!
//! # Key Concepts
//!
//! - **LaunchData**: initial velocity, flight time and launch angle of one arc
//! - **Trajectory**: a solved episode with its origin, target and tuning
//! - **ParabolicAttraction**: the per-ability holder that starts episodes and
//!   answers "has the body arrived"
//!
//! Degenerate requests (zero gravity, an apex on the wrong side, a target
//! beyond the apex) are rejected with [`TrajectoryError`] instead of yielding
//! `NaN` flight times.

mod arc;
mod attraction;
mod config;
mod error;
mod launch;
mod path;

pub use arc::Trajectory;
pub use attraction::{ParabolicAttraction, Probe};
pub use config::AttractionConfig;
pub use error::TrajectoryError;
pub use launch::LaunchData;
pub use path::{PathSegments, Segment, PATH_RESOLUTION};
