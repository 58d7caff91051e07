//! Core state types.
//!
//! This module contains the contract shared by the state machine and the
//! abilities it sequences:
//! - State identity via the `StateKind` trait
//! - The `State` capability set (enter/tick/fixed-tick/exit hooks)
//! - Restriction counters that veto ordinary entry
//! - Guard predicates for transition control

mod guard;
mod restrictors;
mod state;

pub use guard::Guard;
pub use restrictors::Restrictors;
pub use state::{BoxedState, State, StateKind};
