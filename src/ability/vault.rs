//! Vault-up ability: an attraction arc onto a ledge border.

use crate::ability::error::AbilityError;
use crate::core::{Restrictors, State, StateKind};
use crate::trajectory::{AttractionConfig, ParabolicAttraction, PathSegments, Probe};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Host seam of the vault ability.
///
/// Implemented by whatever owns the character body: sensing, the physics
/// velocity sink and collision layers all live behind it.
pub trait VaultEnvironment: Probe {
    /// Length of the current logical frame in seconds.
    fn delta_time(&self) -> f32;

    fn position(&self) -> Point3<f32>;

    /// Direction in which to look for a ledge border.
    fn scan_direction(&self) -> Vector3<f32>;

    /// Border point of the obstacle ahead, if any, within `max_distance`.
    fn border_point(&self, direction: &Vector3<f32>, max_distance: f32) -> Option<Point3<f32>>;

    /// Velocity the physics body should move at this physics frame.
    fn set_target_velocity(&mut self, velocity: Vector3<f32>);

    /// Toggle collisions between the body and vaultable geometry.
    fn set_vault_collision_ignored(&mut self, ignored: bool);

    /// Publish whether the body has arrived at the vault target, for
    /// transition guards.
    fn set_vault_reached(&mut self, reached: bool);
}

/// Tuning of the vault ability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Distance to the border point under which the vault is complete.
    pub reached_tolerance: f32,
    /// How far ahead to look for a border point.
    pub border_scan_distance: f32,
    pub attraction: AttractionConfig,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            reached_tolerance: 0.35,
            border_scan_distance: 5.0,
            attraction: AttractionConfig::default(),
        }
    }
}

impl VaultConfig {
    pub fn from_json(json: &str) -> Result<Self, AbilityError> {
        let config: Self = serde_json::from_str(json)?;
        config.attraction.validate()?;
        Ok(config)
    }
}

/// Vault ability state.
///
/// On entry it scans for a border point and launches an attraction arc
/// toward it; every physics frame it feeds the arc's velocity to the host.
pub struct VaultAbility<K, C> {
    kind: K,
    config: VaultConfig,
    restrictors: Restrictors,
    attraction: ParabolicAttraction,
    elapsed: f32,
    _context: PhantomData<fn(&mut C)>,
}

impl<K: StateKind, C: VaultEnvironment> VaultAbility<K, C> {
    pub fn new(kind: K, config: VaultConfig) -> Self {
        Self {
            kind,
            config,
            restrictors: Restrictors::default(),
            attraction: ParabolicAttraction::new(config.attraction),
            elapsed: 0.0,
            _context: PhantomData,
        }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn attraction(&self) -> &ParabolicAttraction {
        &self.attraction
    }

    /// Seconds since the current vault started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_vault_reached(&self, env: &C) -> bool {
        self.attraction
            .is_point_reached(&env.position(), self.config.reached_tolerance, env)
    }

    /// Arc a vault started now would follow, for debug drawing.
    pub fn preview_path(&self, env: &C) -> Option<PathSegments> {
        let direction = env.scan_direction();
        let border = env.border_point(&direction, self.config.border_scan_distance)?;
        self.attraction.preview_path(env.position(), border).ok()
    }
}

impl<K: StateKind, C: VaultEnvironment> State for VaultAbility<K, C> {
    type Kind = K;
    type Context = C;
    type Error = AbilityError;

    fn kind(&self) -> K {
        self.kind
    }

    fn restrictors(&self) -> Restrictors {
        self.restrictors
    }

    fn restrictors_mut(&mut self) -> &mut Restrictors {
        &mut self.restrictors
    }

    fn on_enter(&mut self, env: &mut C) -> Result<(), AbilityError> {
        self.elapsed = 0.0;
        env.set_vault_reached(false);

        let direction = env.scan_direction();
        let Some(border) = env.border_point(&direction, self.config.border_scan_distance) else {
            warn!(state = self.kind.name(), "no border point ahead");
            return Err(AbilityError::NoBorderPoint {
                max_distance: self.config.border_scan_distance,
            });
        };

        let origin = env.position();
        self.attraction.initialize(origin, border)?;
        env.set_vault_collision_ignored(true);
        debug!(state = self.kind.name(), ?origin, ?border, "vault started");
        Ok(())
    }

    fn tick(&mut self, env: &mut C) -> Result<(), AbilityError> {
        self.elapsed += env.delta_time();
        let reached = self.is_vault_reached(env);
        env.set_vault_reached(reached);
        Ok(())
    }

    fn fixed_tick(&mut self, env: &mut C) -> Result<(), AbilityError> {
        if let Some(velocity) = self.attraction.velocity_at(self.elapsed) {
            env.set_target_velocity(velocity);
        }
        Ok(())
    }

    fn on_exit(&mut self, env: &mut C) -> Result<(), AbilityError> {
        env.set_vault_collision_ignored(false);
        env.set_vault_reached(false);
        self.attraction.clear();
        Ok(())
    }
}
