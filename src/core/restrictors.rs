//! Externally maintained veto counter on a state.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of external systems currently forbidding entry into a state.
///
/// A state may be entered through an ordinary transition only while the
/// count is zero. Global transitions ignore it.
///
/// # Example
///
/// ```rust
/// use vaultline::core::Restrictors;
///
/// let mut restrictors = Restrictors::default();
/// restrictors.restrict();
/// restrictors.restrict();
/// assert_eq!(restrictors.count(), 2);
///
/// restrictors.release();
/// restrictors.release();
/// assert!(restrictors.is_clear());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restrictors(u32);

impl Restrictors {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    /// Register one more veto.
    pub fn restrict(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Drop one veto. Unbalanced releases are ignored.
    pub fn release(&mut self) {
        match self.0.checked_sub(1) {
            Some(count) => self.0 = count,
            None => warn!("restrictor released while none were held"),
        }
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// True when entry is permitted.
    pub fn is_clear(&self) -> bool {
        self.0 == 0
    }
}
