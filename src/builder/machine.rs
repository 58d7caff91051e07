//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{BoxedState, Guard, State, StateKind};
use crate::engine::StateMachine;
use std::collections::HashSet;

/// Builder for constructing state machines with a fluent API.
///
/// The built machine has no current state; enter the initial one with
/// [`StateMachine::set_state`].
pub struct MachineBuilder<K: StateKind, C, E: std::error::Error + 'static> {
    states: Vec<BoxedState<K, C, E>>,
    transitions: Vec<(K, K, Guard<C, E>)>,
    any_transitions: Vec<(K, Guard<C, E>)>,
}

impl<K: StateKind, C, E: std::error::Error + 'static> MachineBuilder<K, C, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            any_transitions: Vec::new(),
        }
    }

    /// Register a state instance.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<Kind = K, Context = C, Error = E> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add a local transition with an infallible predicate.
    pub fn transition<F>(self, from: K, to: K, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.guarded(from, to, Guard::new(predicate))
    }

    /// Add a local transition whose predicate may fail.
    pub fn try_transition<F>(self, from: K, to: K, predicate: F) -> Self
    where
        F: Fn(&C) -> Result<bool, E> + 'static,
    {
        self.guarded(from, to, Guard::try_new(predicate))
    }

    /// Add a local transition with a prepared guard.
    pub fn guarded(mut self, from: K, to: K, guard: Guard<C, E>) -> Self {
        self.transitions.push((from, to, guard));
        self
    }

    /// Add a global interrupt transition.
    pub fn any_transition<F>(mut self, to: K, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.any_transitions.push((to, Guard::new(predicate)));
        self
    }

    /// Add a global interrupt transition whose predicate may fail.
    pub fn try_any_transition<F>(mut self, to: K, predicate: F) -> Self
    where
        F: Fn(&C) -> Result<bool, E> + 'static,
    {
        self.any_transitions.push((to, Guard::try_new(predicate)));
        self
    }

    /// Build the state machine.
    /// Returns an error if a kind is registered twice or a transition names
    /// a kind without a state.
    pub fn build(self) -> Result<StateMachine<K, C, E>, BuildError> {
        let mut kinds = HashSet::new();
        for state in &self.states {
            let kind = state.kind();
            if !kinds.insert(kind) {
                return Err(BuildError::DuplicateState { kind: kind.name() });
            }
        }

        for (from, to, _) in &self.transitions {
            if !kinds.contains(from) {
                return Err(BuildError::UnknownSource { kind: from.name() });
            }
            if !kinds.contains(to) {
                return Err(BuildError::UnknownTarget { kind: to.name() });
            }
        }
        if let Some((to, _)) = self.any_transitions.iter().find(|(to, _)| !kinds.contains(to)) {
            return Err(BuildError::UnknownTarget { kind: to.name() });
        }

        let mut machine = StateMachine::new();
        for state in self.states {
            machine.insert_boxed(state);
        }
        for (from, to, guard) in self.transitions {
            machine.add_transition(from, to, guard);
        }
        for (to, guard) in self.any_transitions {
            machine.add_any_transition(to, guard);
        }

        Ok(machine)
    }
}

impl<K: StateKind, C, E: std::error::Error + 'static> Default for MachineBuilder<K, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
