//! Attraction episodes driven by an ability.

use crate::trajectory::arc::Trajectory;
use crate::trajectory::config::AttractionConfig;
use crate::trajectory::error::TrajectoryError;
use crate::trajectory::path::PathSegments;
use nalgebra::{distance, Point3, Vector3};
use tracing::{debug, warn};

/// Straight-line hit test supplied by the host's physics.
///
/// Closures `Fn(&Point3<f32>, &Vector3<f32>) -> bool` implement it.
pub trait Probe {
    /// Whether a ray from `origin` along `direction` hits anything.
    fn hits(&self, origin: &Point3<f32>, direction: &Vector3<f32>) -> bool;
}

impl<F> Probe for F
where
    F: Fn(&Point3<f32>, &Vector3<f32>) -> bool,
{
    fn hits(&self, origin: &Point3<f32>, direction: &Vector3<f32>) -> bool {
        self(origin, direction)
    }
}

/// Pulls a body onto a target point along an apex-constrained arc.
///
/// Holds the tuning values and at most one active [`Trajectory`]. Each
/// [`initialize`](Self::initialize) solves a fresh episode wholesale.
///
/// # Example
///
/// ```rust
/// use nalgebra::Point3;
/// use vaultline::trajectory::{AttractionConfig, ParabolicAttraction};
///
/// let mut attraction = ParabolicAttraction::new(AttractionConfig {
///     jump_height: 1.5,
///     y_acceleration: -18.0,
///     x_acceleration: 0.0,
///     z_acceleration: 0.0,
/// });
/// attraction
///     .initialize(Point3::origin(), Point3::new(2.0, 1.0, 0.0))
///     .unwrap();
///
/// let launch = attraction.velocity_at(0.0).unwrap();
/// assert!(launch.y > 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParabolicAttraction {
    config: AttractionConfig,
    episode: Option<Trajectory>,
}

impl ParabolicAttraction {
    pub fn new(config: AttractionConfig) -> Self {
        Self {
            config,
            episode: None,
        }
    }

    pub fn config(&self) -> &AttractionConfig {
        &self.config
    }

    /// Replace the tuning values. The running episode, if any, keeps the
    /// values it was solved with.
    pub fn set_config(&mut self, config: AttractionConfig) {
        self.config = config;
    }

    /// Start an episode from `origin` toward `target`.
    ///
    /// On failure no episode is active afterwards.
    pub fn initialize(
        &mut self,
        origin: Point3<f32>,
        target: Point3<f32>,
    ) -> Result<&Trajectory, TrajectoryError> {
        self.episode = None;
        let trajectory = Trajectory::solve(origin, target, self.config)?;
        debug!(
            time_to_target = trajectory.time_to_target(),
            launch_angle = trajectory.launch().launch_angle(),
            "attraction initialized"
        );
        Ok(&*self.episode.insert(trajectory))
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.episode.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.episode.is_some()
    }

    /// End the current episode.
    pub fn clear(&mut self) {
        self.episode = None;
    }

    /// Velocity `t` seconds into the current episode.
    pub fn velocity_at(&self, t: f32) -> Option<Vector3<f32>> {
        self.episode.as_ref().map(|arc| arc.velocity_at(t))
    }

    /// Whether a body at `position` has arrived at the episode's target.
    ///
    /// Both a probe toward the target must hit and the distance must be
    /// below `tolerance`. Always false without an episode.
    pub fn is_point_reached<P: Probe + ?Sized>(
        &self,
        position: &Point3<f32>,
        tolerance: f32,
        probe: &P,
    ) -> bool {
        let Some(arc) = &self.episode else {
            return false;
        };

        let target = arc.target();
        if !probe.hits(position, &(target - position)) {
            return false;
        }
        distance(position, &target) < tolerance
    }

    /// Path a fresh episode toward `target` would follow, without starting
    /// it.
    pub fn preview_path(
        &self,
        origin: Point3<f32>,
        target: Point3<f32>,
    ) -> Result<PathSegments, TrajectoryError> {
        Trajectory::solve(origin, target, self.config)
            .map(|arc| arc.path())
            .inspect_err(|err| warn!(%err, "attraction preview unavailable"))
    }
}
