//! Guarded edges between states.

use crate::core::{Guard, StateKind};

/// A transition toward `to`, active while its guard passes.
///
/// The source is not stored: local transitions live in their source kind's
/// list, global ones in the machine's interrupt list.
pub struct Transition<K: StateKind, C, E> {
    pub to: K,
    pub guard: Guard<C, E>,
}

impl<K: StateKind, C, E> Transition<K, C, E> {
    pub fn new(to: K, guard: Guard<C, E>) -> Self {
        Self { to, guard }
    }

    /// Evaluate the guard against the host context.
    pub fn is_satisfied(&self, ctx: &C) -> Result<bool, E> {
        self.guard.check(ctx)
    }
}

impl<K: StateKind, C, E> std::fmt::Debug for Transition<K, C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition").field("to", &self.to).finish()
    }
}
