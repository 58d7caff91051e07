//! Transition-graph evaluator for ability states.
//!
//! # Key Concepts
//!
//! - **Local transitions**: guarded edges out of one state kind, gated by the
//!   destination's restrictors
//! - **Global transitions**: interrupts evaluated first from any state, never
//!   gated
//! - **Ticks**: `tick` selects and applies at most one transition, then ticks
//!   the current state; `fixed_tick` only forwards
//!
//! Everything runs synchronously on the caller's thread.

mod error;
mod machine;
mod transition;

pub use error::{Hook, MachineError};
pub use machine::StateMachine;
pub use transition::Transition;
