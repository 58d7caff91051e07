//! State machine that sequences mutually exclusive ability states.

use crate::core::{BoxedState, Guard, Restrictors, State, StateKind};
use crate::engine::error::{Hook, MachineError};
use crate::engine::transition::Transition;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Predicate-driven finite state machine.
///
/// Owns one state per kind, the local transitions of each kind, a list of
/// global interrupt transitions and the currently active kind. Nothing is
/// current until the first [`set_state`](Self::set_state).
///
/// Transition selection, first match wins:
/// 1. global transitions in registration order, ignoring restrictors;
/// 2. the current kind's transitions in registration order, skipping
///    destinations whose restrictors are not clear.
pub struct StateMachine<K: StateKind, C, E: std::error::Error + 'static> {
    states: HashMap<K, BoxedState<K, C, E>>,
    current: Option<K>,
    transition_lists: Vec<Vec<Transition<K, C, E>>>,
    list_index: HashMap<K, usize>,
    any_transitions: Vec<Transition<K, C, E>>,
    // Index into `transition_lists` for the current kind; `None` is the
    // shared empty list.
    active_list: Option<usize>,
}

impl<K: StateKind, C, E: std::error::Error + 'static> StateMachine<K, C, E> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            transition_lists: Vec::new(),
            list_index: HashMap::new(),
            any_transitions: Vec::new(),
            active_list: None,
        }
    }

    /// Register the state instance for its kind, returning the instance it
    /// replaces.
    pub fn insert_state<S>(&mut self, state: S) -> Option<BoxedState<K, C, E>>
    where
        S: State<Kind = K, Context = C, Error = E> + 'static,
    {
        self.insert_boxed(Box::new(state))
    }

    pub fn insert_boxed(&mut self, state: BoxedState<K, C, E>) -> Option<BoxedState<K, C, E>> {
        self.states.insert(state.kind(), state)
    }

    /// Add a transition between two kinds. Registration order is priority
    /// order among the transitions of `from`.
    pub fn add_transition(&mut self, from: K, to: K, guard: Guard<C, E>) {
        let index = match self.list_index.get(&from) {
            Some(&index) => index,
            None => {
                let index = self.transition_lists.len();
                self.transition_lists.push(Vec::new());
                self.list_index.insert(from, index);
                index
            }
        };
        self.transition_lists[index].push(Transition::new(to, guard));

        if self.current == Some(from) {
            self.active_list = Some(index);
        }
    }

    /// Add a global transition that can interrupt any state, restrictors
    /// notwithstanding.
    pub fn add_any_transition(&mut self, to: K, guard: Guard<C, E>) {
        self.any_transitions.push(Transition::new(to, guard));
    }

    /// Currently active kind (pure)
    pub fn current_state(&self) -> Option<K> {
        self.current
    }

    pub fn is_current(&self, kind: K) -> bool {
        self.current == Some(kind)
    }

    pub fn state(&self, kind: K) -> Option<&(dyn State<Kind = K, Context = C, Error = E> + 'static)> {
        self.states.get(&kind).map(|state| state.as_ref())
    }

    pub fn state_mut(
        &mut self,
        kind: K,
    ) -> Option<&mut (dyn State<Kind = K, Context = C, Error = E> + 'static)> {
        self.states.get_mut(&kind).map(|state| state.as_mut())
    }

    /// Restriction counter of `kind`, for external systems vetoing entry.
    pub fn restrictors_mut(&mut self, kind: K) -> Option<&mut Restrictors> {
        self.states
            .get_mut(&kind)
            .map(|state| state.restrictors_mut())
    }

    /// Local transitions registered for `kind`; empty for kinds that never
    /// had any.
    pub fn transitions_from(&self, kind: K) -> &[Transition<K, C, E>] {
        match self.list_index.get(&kind) {
            Some(&index) => &self.transition_lists[index],
            None => &[],
        }
    }

    pub fn any_transitions(&self) -> &[Transition<K, C, E>] {
        &self.any_transitions
    }

    /// Transition to `kind`.
    ///
    /// No-op when `kind` is already current. Otherwise runs the old state's
    /// exit hook, switches, refreshes the active transition list and runs the
    /// new state's enter hook. If the enter hook fails the new state stays
    /// current.
    pub fn set_state(&mut self, kind: K, ctx: &mut C) -> Result<(), MachineError<E>> {
        if self.current == Some(kind) {
            return Ok(());
        }
        if !self.states.contains_key(&kind) {
            return Err(MachineError::UnknownState { kind: kind.name() });
        }

        if let Some(previous) = self.current {
            self.run_hook(previous, Hook::Exit, ctx)?;
        }

        debug!(from = ?self.current, to = kind.name(), "state change");
        self.current = Some(kind);
        self.active_list = self.list_index.get(&kind).copied();

        self.run_hook(kind, Hook::Enter, ctx)
    }

    /// Per-frame update.
    ///
    /// Fires at most one transition, then ticks whichever state is current
    /// afterwards. Returns the destination of the fired transition, if any.
    /// A selected transition into the current kind fires nothing and yields
    /// `None`.
    pub fn tick(&mut self, ctx: &mut C) -> Result<Option<K>, MachineError<E>> {
        let fired = self
            .next_transition(ctx)?
            .filter(|to| self.current != Some(*to));
        if let Some(to) = fired {
            self.set_state(to, ctx)?;
        }

        if let Some(current) = self.current {
            self.run_hook(current, Hook::Tick, ctx)?;
        }
        Ok(fired)
    }

    /// Per-physics-frame update. Never evaluates transitions.
    pub fn fixed_tick(&mut self, ctx: &mut C) -> Result<(), MachineError<E>> {
        match self.current {
            Some(current) => self.run_hook(current, Hook::FixedTick, ctx),
            None => Ok(()),
        }
    }

    /// Exit the current state without entering another one.
    pub fn exit_current_state(&mut self, ctx: &mut C) -> Result<(), MachineError<E>> {
        let Some(current) = self.current else {
            return Ok(());
        };

        self.run_hook(current, Hook::Exit, ctx)?;
        debug!(from = current.name(), "state cleared");
        self.current = None;
        self.active_list = None;
        Ok(())
    }

    /// Select the transition to fire this tick (pure apart from guard
    /// evaluation).
    pub fn next_transition(&self, ctx: &C) -> Result<Option<K>, MachineError<E>> {
        for transition in &self.any_transitions {
            if Self::is_satisfied(transition, ctx)? {
                trace!(to = transition.to.name(), "global transition selected");
                return Ok(Some(transition.to));
            }
        }

        for transition in self.active_transitions() {
            if Self::is_satisfied(transition, ctx)? && self.is_enterable(transition.to) {
                trace!(to = transition.to.name(), "transition selected");
                return Ok(Some(transition.to));
            }
        }

        Ok(None)
    }

    fn active_transitions(&self) -> &[Transition<K, C, E>] {
        match self.active_list {
            Some(index) => &self.transition_lists[index],
            None => &[],
        }
    }

    fn is_satisfied(transition: &Transition<K, C, E>, ctx: &C) -> Result<bool, MachineError<E>> {
        transition
            .is_satisfied(ctx)
            .map_err(|source| MachineError::Guard {
                to: transition.to.name(),
                source,
            })
    }

    // Kinds without a registered instance count as clear; entering them
    // fails in `set_state`.
    fn is_enterable(&self, kind: K) -> bool {
        self.states
            .get(&kind)
            .is_none_or(|state| state.restrictors().is_clear())
    }

    fn run_hook(&mut self, kind: K, hook: Hook, ctx: &mut C) -> Result<(), MachineError<E>> {
        let state = self
            .states
            .get_mut(&kind)
            .ok_or(MachineError::UnknownState { kind: kind.name() })?;

        let result = match hook {
            Hook::Enter => state.on_enter(ctx),
            Hook::Tick => state.tick(ctx),
            Hook::FixedTick => state.fixed_tick(ctx),
            Hook::Exit => state.on_exit(ctx),
        };
        result.map_err(|source| MachineError::Hook {
            state: kind.name(),
            hook,
            source,
        })
    }
}

impl<K: StateKind, C, E: std::error::Error + 'static> Default for StateMachine<K, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
