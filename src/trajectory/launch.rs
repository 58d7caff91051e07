//! Closed-form launch parameters of an apex-constrained arc.

use crate::trajectory::config::AttractionConfig;
use crate::trajectory::error::TrajectoryError;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Launch parameters derived once per attraction episode.
///
/// Immutable; a new target or origin means solving a new `LaunchData`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchData {
    initial_velocity: Vector3<f32>,
    time_to_target: f32,
    launch_angle: f32,
}

impl LaunchData {
    fn new(initial_velocity: Vector3<f32>, time_to_target: f32) -> Self {
        let speed = initial_velocity.norm();
        // A resting launch has no direction; zero keeps the velocity formula
        // finite.
        let launch_angle = if speed > 0.0 {
            (initial_velocity.x / speed).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        Self {
            initial_velocity,
            time_to_target,
            launch_angle,
        }
    }

    /// Derive the launch that carries a body from `origin` to `target` while
    /// first rising `config.jump_height` against gravity.
    ///
    /// Flight time is the rise-to-apex time plus the apex-to-target time.
    /// The vertical speed is the one that exactly reaches the apex; the
    /// horizontal velocity is back-solved from `d = v t + a t^2 / 2` on each
    /// horizontal axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nalgebra::Point3;
    /// use vaultline::trajectory::{AttractionConfig, LaunchData};
    ///
    /// let config = AttractionConfig {
    ///     jump_height: 4.0,
    ///     y_acceleration: -20.0,
    ///     x_acceleration: 0.0,
    ///     z_acceleration: 0.0,
    /// };
    /// let launch = LaunchData::solve(&Point3::origin(), &Point3::new(10.0, 0.0, 0.0), &config).unwrap();
    ///
    /// assert!((launch.time_to_target() - 2.0 * 0.4f32.sqrt()).abs() < 1e-4);
    /// assert!((launch.initial_velocity().y - 160f32.sqrt()).abs() < 1e-3);
    /// ```
    pub fn solve(
        origin: &Point3<f32>,
        target: &Point3<f32>,
        config: &AttractionConfig,
    ) -> Result<Self, TrajectoryError> {
        config.validate()?;
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(TrajectoryError::NonFinite { field: "origin" });
        }
        if !target.coords.iter().all(|c| c.is_finite()) {
            return Err(TrajectoryError::NonFinite { field: "target" });
        }

        let jump_height = config.jump_height;
        let y_acceleration = config.y_acceleration;

        let displacement_y = target.y - origin.y;
        let displacement_xz = Vector3::new(target.x - origin.x, 0.0, target.z - origin.z);

        if (displacement_y - jump_height) / y_acceleration < 0.0 {
            return Err(TrajectoryError::TargetBeyondApex {
                displacement_y,
                jump_height,
            });
        }

        let rise_time = (-2.0 * jump_height / y_acceleration).sqrt();
        let fall_time = (2.0 * (displacement_y - jump_height) / y_acceleration).sqrt();
        let time = rise_time + fall_time;
        if time <= f32::EPSILON {
            return Err(TrajectoryError::ZeroFlightTime);
        }

        let velocity_y = Vector3::y() * (-2.0 * y_acceleration * jump_height).sqrt();
        let velocity_xz = (displacement_xz
            - Vector3::new(
                0.5 * config.x_acceleration * time * time,
                0.0,
                0.5 * config.z_acceleration * time * time,
            ))
            / time;

        Ok(Self::new(
            velocity_xz + velocity_y * -y_acceleration.signum(),
            time,
        ))
    }

    pub fn initial_velocity(&self) -> Vector3<f32> {
        self.initial_velocity
    }

    pub fn time_to_target(&self) -> f32 {
        self.time_to_target
    }

    /// Angle between the launch velocity and the +X axis, in radians.
    pub fn launch_angle(&self) -> f32 {
        self.launch_angle
    }

    /// Instantaneous velocity `t` seconds after launch.
    ///
    /// Rebuilt from launch speed and angle:
    /// `x = |v0| cos(a) + sign(cos(a)) ax t`, `y = |v0| sin(a) + ay t`,
    /// `z = v0.z t`.
    ///
    /// This equals the kinematic velocity `v0 + a t` only when `v0.z == 0`,
    /// `v0.y >= 0`, and either `v0.x >= 0` or `x_acceleration == 0`. A
    /// leftward launch with horizontal acceleration gets `a_x` applied
    /// against the direction `solve` assumed, so its velocity leaves the arc
    /// that [`Trajectory::position_at`](crate::trajectory::Trajectory::position_at)
    /// traces.
    pub fn velocity_at(&self, t: f32, config: &AttractionConfig) -> Vector3<f32> {
        let speed = self.initial_velocity.norm();
        let (sin, cos) = self.launch_angle.sin_cos();

        Vector3::new(
            speed * cos + cos.signum() * config.x_acceleration * t,
            speed * sin + config.y_acceleration * t,
            self.initial_velocity.z * t,
        )
    }
}
