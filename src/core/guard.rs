//! Guard predicates for controlling state transitions.
//!
//! Guards read the host context and decide whether a transition may fire.
//! They never mutate anything; a guard that cannot decide reports an error,
//! which the state machine propagates to its caller.

/// Boxed predicate evaluated against the host context.
type Predicate<C, E> = Box<dyn Fn(&C) -> Result<bool, E>>;

/// Predicate that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use vaultline::core::Guard;
///
/// struct Body {
///     grounded: bool,
/// }
///
/// let can_jump: Guard<Body, Infallible> = Guard::new(|body: &Body| body.grounded);
///
/// assert!(can_jump.check(&Body { grounded: true }).unwrap());
/// assert!(!can_jump.check(&Body { grounded: false }).unwrap());
/// ```
pub struct Guard<C, E> {
    predicate: Predicate<C, E>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from an infallible predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(move |ctx| Ok(predicate(ctx))),
        }
    }

    /// Create a guard whose predicate may fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vaultline::core::Guard;
    ///
    /// #[derive(Debug)]
    /// struct SensorOffline;
    ///
    /// impl std::fmt::Display for SensorOffline {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         f.write_str("ledge sensor offline")
    ///     }
    /// }
    ///
    /// impl std::error::Error for SensorOffline {}
    ///
    /// let ledge_ahead = Guard::try_new(|reading: &Option<f32>| {
    ///     reading.map(|distance| distance < 2.0).ok_or(SensorOffline)
    /// });
    ///
    /// assert!(ledge_ahead.check(&Some(1.5)).unwrap());
    /// assert!(ledge_ahead.check(&None).is_err());
    /// ```
    pub fn try_new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> Result<bool, E> + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self
    where
        C: 'static,
        E: 'static,
    {
        Guard::new(|_| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self, ctx: &C) -> Result<bool, E> {
        (self.predicate)(ctx)
    }
}

impl<C, E> std::fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
