//! Listener trait and helpers.

use std::sync::Arc;

use super::payload::EventArgs;
use crate::error::EventResult;

/// A registered callback, invoked once per matching trigger.
///
/// The registry imposes no structure on a listener beyond this single
/// operation; any callable that can look at a three-slot payload qualifies.
/// Listeners are held by reference ([`SharedListener`]) — the registry never
/// copies listener state, and subscribing the same listener twice means it
/// runs twice per trigger.
///
/// Returning an `Err` aborts the remaining dispatch for that trigger call
/// and propagates the error to the trigger caller.
pub trait Listener: Send + Sync {
    /// Handle one dispatched event.
    fn on_event(&self, args: &EventArgs) -> EventResult<()>;
}

/// Shared handle to a listener, as stored by the registry.
pub type SharedListener = Arc<dyn Listener>;

impl<F> Listener for F
where
    F: Fn(&EventArgs) -> EventResult<()> + Send + Sync,
{
    fn on_event(&self, args: &EventArgs) -> EventResult<()> {
        self(args)
    }
}

/// Wrap a callback closure into a [`SharedListener`].
///
/// Listeners with state of their own can implement [`Listener`] directly
/// and be subscribed as `Arc<MyListener>`.
///
/// # Example
///
/// ```rust
/// use hearsay_core::{EventArgs, EventRegistry, shared_listener};
///
/// let registry = EventRegistry::new();
/// registry.subscribe("roster:updated", shared_listener(|_args| Ok(())));
/// ```
pub fn shared_listener<F>(callback: F) -> SharedListener
where
    F: Fn(&EventArgs) -> EventResult<()> + Send + Sync + 'static,
{
    Arc::new(callback)
}
