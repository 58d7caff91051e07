//! Errors raised while driving a state machine.

use std::fmt;
use thiserror::Error;

/// Lifecycle hook of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Enter,
    Tick,
    FixedTick,
    Exit,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Hook::Enter => "enter",
            Hook::Tick => "tick",
            Hook::FixedTick => "fixed tick",
            Hook::Exit => "exit",
        })
    }
}

/// Errors that can occur while ticking or switching states.
///
/// Failures from caller-supplied hooks and guards are wrapped, never
/// swallowed; the in-progress call is aborted.
#[derive(Debug, Error)]
pub enum MachineError<E: std::error::Error + 'static> {
    #[error("No state registered for kind '{kind}'")]
    UnknownState { kind: &'static str },

    #[error("The {hook} hook of state '{state}' failed")]
    Hook {
        state: &'static str,
        hook: Hook,
        #[source]
        source: E,
    },

    #[error("Guard of transition toward '{to}' failed")]
    Guard {
        to: &'static str,
        #[source]
        source: E,
    },
}
