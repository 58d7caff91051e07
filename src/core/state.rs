//! State identity and the capability contract every ability state implements.
//!
//! A state machine never inspects a concrete ability. It only sees the
//! hooks below, the state's kind and its restriction counter.

use super::restrictors::Restrictors;
use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a state inside the transition table.
///
/// Kinds are compared and hashed, never the state values themselves, so two
/// instances of the same kind are interchangeable destinations. Fieldless
/// enums are the intended implementors; see [`state_kind!`](crate::state_kind).
///
/// # Example
///
/// ```rust
/// use vaultline::core::StateKind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Stance {
///     Idle,
///     Vault,
/// }
///
/// impl StateKind for Stance {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Vault => "Vault",
///         }
///     }
/// }
///
/// assert_eq!(Stance::Vault.name(), "Vault");
/// ```
pub trait StateKind: Copy + Eq + Hash + Debug + 'static {
    /// Stable name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// Capability set of a controllable state.
///
/// The machine calls the hooks in a fixed order: `on_exit` of the old state,
/// then `on_enter` of the new one, then `tick` on whichever state is current
/// after transition selection. `fixed_tick` is only ever forwarded.
///
/// Hooks receive the host context mutably; transition predicates only get to
/// read it. All hooks default to doing nothing.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use vaultline::core::{Restrictors, State};
/// use vaultline::state_kind;
///
/// state_kind! {
///     pub enum Stance {
///         Idle,
///         Crouch,
///     }
/// }
///
/// #[derive(Default)]
/// struct Crouch {
///     restrictors: Restrictors,
/// }
///
/// impl State for Crouch {
///     type Kind = Stance;
///     type Context = f32;
///     type Error = Infallible;
///
///     fn kind(&self) -> Stance {
///         Stance::Crouch
///     }
///
///     fn restrictors(&self) -> Restrictors {
///         self.restrictors
///     }
///
///     fn restrictors_mut(&mut self) -> &mut Restrictors {
///         &mut self.restrictors
///     }
///
///     fn on_enter(&mut self, collider_height: &mut f32) -> Result<(), Infallible> {
///         *collider_height *= 0.5;
///         Ok(())
///     }
/// }
/// ```
pub trait State {
    /// Kind used as this state's key in the transition table.
    type Kind: StateKind;

    /// Host environment handed to hooks and transition predicates.
    type Context;

    /// Failure raised by a hook. Use [`std::convert::Infallible`] for states
    /// that cannot fail.
    type Error: std::error::Error + 'static;

    fn kind(&self) -> Self::Kind;

    /// Current restriction counter. Entry through an ordinary transition is
    /// only allowed while it is clear.
    fn restrictors(&self) -> Restrictors;

    /// Mutable access for external systems that veto entry.
    fn restrictors_mut(&mut self) -> &mut Restrictors;

    /// Executed when the state becomes current.
    fn on_enter(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Executed once per logical frame while current.
    fn tick(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Executed once per physics frame while current.
    fn fixed_tick(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Executed when the state stops being current.
    fn on_exit(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Boxed state as stored by the state machine.
pub type BoxedState<K, C, E> = Box<dyn State<Kind = K, Context = C, Error = E>>;
