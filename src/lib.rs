//! Vaultline: behavior core for character-control logic
//!
//! Two pieces that ability-driven character controllers keep rewriting:
//! a predicate-driven finite state machine that sequences mutually
//! exclusive ability states, and a ballistic solver that launches a body
//! onto a target point along an arc with a required apex height.
//!
//! # Core Concepts
//!
//! - **State**: capability set (enter/tick/fixed-tick/exit) implemented by
//!   each ability, keyed by a `StateKind`
//! - **Transitions**: guarded edges, local ones gated by the destination's
//!   restrictors, global interrupts evaluated first and never gated
//! - **Attraction**: closed-form launch data and time-parameterized velocity
//!   of an apex-constrained arc
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use vaultline::builder::MachineBuilder;
//! use vaultline::core::{Restrictors, State};
//! use vaultline::state_kind;
//!
//! state_kind! {
//!     pub enum Move {
//!         Idle,
//!         Vault,
//!     }
//! }
//!
//! struct Controls {
//!     can_vault: bool,
//!     force_reset: bool,
//! }
//!
//! struct Plain(Move, Restrictors);
//!
//! impl State for Plain {
//!     type Kind = Move;
//!     type Context = Controls;
//!     type Error = Infallible;
//!
//!     fn kind(&self) -> Move {
//!         self.0
//!     }
//!
//!     fn restrictors(&self) -> Restrictors {
//!         self.1
//!     }
//!
//!     fn restrictors_mut(&mut self) -> &mut Restrictors {
//!         &mut self.1
//!     }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .state(Plain(Move::Idle, Restrictors::default()))
//!     .state(Plain(Move::Vault, Restrictors::default()))
//!     .transition(Move::Idle, Move::Vault, |c: &Controls| c.can_vault)
//!     .any_transition(Move::Idle, |c: &Controls| c.force_reset)
//!     .build()
//!     .unwrap();
//!
//! let mut controls = Controls { can_vault: true, force_reset: false };
//! machine.set_state(Move::Idle, &mut controls).unwrap();
//! machine.tick(&mut controls).unwrap();
//! assert_eq!(machine.current_state(), Some(Move::Vault));
//!
//! controls.force_reset = true;
//! machine.tick(&mut controls).unwrap();
//! assert_eq!(machine.current_state(), Some(Move::Idle));
//! ```

pub mod ability;
pub mod builder;
pub mod core;
pub mod engine;
pub mod trajectory;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use self::core::{Guard, Restrictors, State, StateKind};
pub use engine::{MachineError, StateMachine};
pub use trajectory::{AttractionConfig, ParabolicAttraction, Trajectory, TrajectoryError};
