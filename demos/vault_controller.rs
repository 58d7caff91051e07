//! Vault Controller
//!
//! This example drives a two-state character controller through one vault.
//!
//! Key concepts:
//! - Ability states behind the `State` capability set
//! - Transition guards reading the host body
//! - Parabolic attraction feeding a target velocity every physics frame
//! - Debug path preview of the arc before the vault starts
//!
//! Run with: cargo run --example vault_controller

use nalgebra::{Point3, Vector3};
use vaultline::ability::{AbilityError, VaultAbility, VaultConfig, VaultEnvironment};
use vaultline::builder::MachineBuilder;
use vaultline::core::{Restrictors, State};
use vaultline::state_kind;
use vaultline::trajectory::{AttractionConfig, Probe};

state_kind! {
    enum Move {
        Idle,
        Vault,
    }
}

const FRAME: f32 = 1.0 / 60.0;

struct Character {
    position: Point3<f32>,
    velocity: Vector3<f32>,
    wants_vault: bool,
    vault_reached: bool,
}

impl Probe for Character {
    fn hits(&self, _origin: &Point3<f32>, direction: &Vector3<f32>) -> bool {
        direction.norm() < 1.0
    }
}

impl VaultEnvironment for Character {
    fn delta_time(&self) -> f32 {
        FRAME
    }

    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn scan_direction(&self) -> Vector3<f32> {
        Vector3::x()
    }

    fn border_point(&self, _direction: &Vector3<f32>, _max_distance: f32) -> Option<Point3<f32>> {
        Some(Point3::new(2.5, 1.2, 0.0))
    }

    fn set_target_velocity(&mut self, velocity: Vector3<f32>) {
        self.velocity = velocity;
    }

    fn set_vault_collision_ignored(&mut self, ignored: bool) {
        println!("  vault collisions ignored: {}", ignored);
    }

    fn set_vault_reached(&mut self, reached: bool) {
        self.vault_reached = reached;
    }
}

#[derive(Default)]
struct Idle {
    restrictors: Restrictors,
}

impl State for Idle {
    type Kind = Move;
    type Context = Character;
    type Error = AbilityError;

    fn kind(&self) -> Move {
        Move::Idle
    }

    fn restrictors(&self) -> Restrictors {
        self.restrictors
    }

    fn restrictors_mut(&mut self) -> &mut Restrictors {
        &mut self.restrictors
    }

    fn on_enter(&mut self, character: &mut Character) -> Result<(), AbilityError> {
        character.velocity = Vector3::zeros();
        character.wants_vault = false;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Vault Controller Example ===\n");

    let config = VaultConfig {
        attraction: AttractionConfig {
            jump_height: 2.0,
            y_acceleration: -20.0,
            x_acceleration: 0.0,
            z_acceleration: 0.0,
        },
        ..VaultConfig::default()
    };

    let vault = VaultAbility::new(Move::Vault, config);
    let mut character = Character {
        position: Point3::origin(),
        velocity: Vector3::zeros(),
        wants_vault: false,
        vault_reached: false,
    };

    if let Some(path) = vault.preview_path(&character) {
        println!("Preview path:");
        for segment in path.step_by(10) {
            println!("  {:?} -> {:?}", segment.start.coords, segment.end.coords);
        }
    }

    let mut machine = MachineBuilder::new()
        .state(Idle::default())
        .state(vault)
        .transition(Move::Idle, Move::Vault, |c: &Character| c.wants_vault)
        .transition(Move::Vault, Move::Idle, |c: &Character| c.vault_reached)
        .build()?;

    machine.set_state(Move::Idle, &mut character)?;
    println!("\nInitial state: {:?}", machine.current_state());

    character.wants_vault = true;
    for frame in 0..120 {
        if let Some(entered) = machine.tick(&mut character)? {
            println!("Frame {:3}: entered {:?} at {:?}", frame, entered, character.position.coords);
            if entered == Move::Idle {
                break;
            }
        }
        machine.fixed_tick(&mut character)?;
        character.position += character.velocity * FRAME;
    }

    println!("\nFinal state: {:?}", machine.current_state());
    println!("Final position: {:?}", character.position.coords);

    println!("\n=== Example Complete ===");
    Ok(())
}
