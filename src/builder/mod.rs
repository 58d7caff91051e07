//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for declaring state
//! kinds, validating the transition table before the machine runs.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
