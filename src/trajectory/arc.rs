//! One attraction episode: the solved arc between an origin and a target.

use crate::trajectory::config::AttractionConfig;
use crate::trajectory::error::TrajectoryError;
use crate::trajectory::launch::LaunchData;
use crate::trajectory::path::PathSegments;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Solved arc of a single attraction episode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    origin: Point3<f32>,
    target: Point3<f32>,
    config: AttractionConfig,
    launch: LaunchData,
}

impl Trajectory {
    pub fn solve(
        origin: Point3<f32>,
        target: Point3<f32>,
        config: AttractionConfig,
    ) -> Result<Self, TrajectoryError> {
        let launch = LaunchData::solve(&origin, &target, &config)?;
        Ok(Self {
            origin,
            target,
            config,
            launch,
        })
    }

    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    pub fn target(&self) -> Point3<f32> {
        self.target
    }

    pub fn config(&self) -> &AttractionConfig {
        &self.config
    }

    pub fn launch(&self) -> &LaunchData {
        &self.launch
    }

    pub fn time_to_target(&self) -> f32 {
        self.launch.time_to_target()
    }

    /// Duration of the rise phase; the apex is reached at this time.
    pub fn apex_time(&self) -> f32 {
        (-2.0 * self.config.jump_height / self.config.y_acceleration).sqrt()
    }

    /// Velocity `t` seconds after launch, see [`LaunchData::velocity_at`].
    pub fn velocity_at(&self, t: f32) -> Vector3<f32> {
        self.launch.velocity_at(t, &self.config)
    }

    /// Offset from the origin `t` seconds after launch under constant
    /// acceleration.
    pub fn displacement_at(&self, t: f32) -> Vector3<f32> {
        self.launch.initial_velocity() * t + self.config.acceleration() * (t * t / 2.0)
    }

    pub fn position_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.displacement_at(t)
    }

    /// Line segments approximating the arc, for debug drawing.
    pub fn path(&self) -> PathSegments {
        PathSegments::new(
            self.origin,
            self.launch.initial_velocity(),
            self.config.acceleration(),
            self.time_to_target(),
        )
    }
}
