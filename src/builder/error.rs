//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State kind '{kind}' registered more than once")]
    DuplicateState { kind: &'static str },

    #[error("Transition source '{kind}' has no registered state. Call .state() for it")]
    UnknownSource { kind: &'static str },

    #[error("Transition target '{kind}' has no registered state. Call .state() for it")]
    UnknownTarget { kind: &'static str },
}
