//! Ability states built on the core.
//!
//! Abilities implement [`State`](crate::core::State) and reach the host only
//! through an environment trait, so they can be driven by any engine that
//! supplies sensing and a velocity sink.

mod error;
mod vault;

pub use error::AbilityError;
pub use vault::{VaultAbility, VaultConfig, VaultEnvironment};
