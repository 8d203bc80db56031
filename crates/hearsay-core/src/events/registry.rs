//! The named-event registry: subscribe, trigger, clear.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::listener::SharedListener;
use super::payload::EventArgs;
use crate::error::EventResult;

/// Registry mapping event names to ordered listener lists.
///
/// Subscribing appends to the list for a name, creating the list on first
/// use. Triggering looks the list up and invokes every listener with the
/// payload, synchronously and in registration order, before returning.
///
/// The whole mapping sits behind a single mutex, so a registry can be shared
/// across threads (`&self` everywhere); list creation by `subscribe` is
/// atomic with respect to concurrent lookups in `trigger`. The lock is *not*
/// held while listeners run — dispatch iterates a snapshot of the list taken
/// when the trigger began, so a listener may subscribe or trigger on the
/// same registry without deadlocking. A listener added during an in-flight
/// trigger only participates in later triggers.
///
/// # Example
///
/// ```rust
/// use hearsay_core::{EventArgs, EventRegistry, shared_listener};
///
/// let registry = EventRegistry::new();
/// registry.subscribe("presence:online", shared_listener(|args| {
///     println!("{} came online", args.arg0());
///     Ok(())
/// }));
///
/// registry.trigger("presence:online", &EventArgs::one("alice@example.org"))?;
/// # Ok::<(), hearsay_core::EventError>(())
/// ```
#[derive(Default)]
pub struct EventRegistry {
    listeners: Mutex<HashMap<String, Vec<SharedListener>>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `listener` to the ordered list for `name`.
    ///
    /// Creates the list if `name` has no listeners yet. No de-duplication:
    /// subscribing the same listener twice means two invocations per
    /// trigger.
    ///
    /// # Panics
    ///
    /// Panics on an empty event name — that is a producer/consumer wiring
    /// bug, and tolerating it silently would hide it.
    pub fn subscribe(&self, name: &str, listener: SharedListener) {
        assert!(!name.is_empty(), "event name must not be empty");

        let mut listeners = self.listeners.lock();
        let list = listeners.entry(name.to_string()).or_default();
        list.push(listener);
        tracing::debug!(event = %name, listeners = list.len(), "Listener subscribed");
    }

    /// Dispatch `args` to every listener subscribed to `name`.
    ///
    /// Listeners run inline, in registration order; `trigger` returns only
    /// after every invoked listener has returned. A name with no listeners
    /// is a no-op, not an error. The first listener failure aborts the
    /// remaining dispatch for this call and propagates to the caller; the
    /// registry itself is never mutated by a trigger.
    ///
    /// # Panics
    ///
    /// Panics on an empty event name, as [`subscribe`](Self::subscribe)
    /// does.
    pub fn trigger(&self, name: &str, args: &EventArgs) -> EventResult<()> {
        assert!(!name.is_empty(), "event name must not be empty");

        // Snapshot under the lock, dispatch outside it.
        let snapshot: Vec<SharedListener> = {
            let listeners = self.listeners.lock();
            match listeners.get(name) {
                Some(list) => list.clone(),
                None => return Ok(()),
            }
        };

        tracing::debug!(event = %name, listeners = snapshot.len(), "Dispatching event");

        for (index, listener) in snapshot.iter().enumerate() {
            tracing::trace!(event = %name, index, "Invoking listener");
            if let Err(err) = listener.on_event(args) {
                tracing::warn!(
                    event = %name,
                    index,
                    error = %err,
                    "Listener failed, aborting dispatch"
                );
                return Err(err);
            }
        }

        Ok(())
    }

    /// Drop every listener list without invoking anyone.
    ///
    /// The registry is reusable afterwards, starting from an empty mapping;
    /// previously registered listeners are released, not leaked into the
    /// fresh state.
    pub fn clear(&self) {
        let mut listeners = self.listeners.lock();
        let dropped: usize = listeners.values().map(Vec::len).sum();
        listeners.clear();
        tracing::debug!(dropped, "Registry cleared");
    }

    /// Number of listeners currently subscribed to `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.lock().get(name).map_or(0, Vec::len)
    }

    /// Names that currently have at least one listener.
    pub fn event_names(&self) -> Vec<String> {
        self.listeners.lock().keys().cloned().collect()
    }

    /// True if no name has any listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.lock();
        f.debug_struct("EventRegistry")
            .field("events", &listeners.len())
            .field("listeners", &listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::events::listener::shared_listener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Listener that records a tag into a shared log on every invocation.
    fn recording(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> SharedListener {
        let log = Arc::clone(log);
        shared_listener(move |_args: &EventArgs| {
            log.lock().push(tag);
            Ok(())
        })
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let registry = EventRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        registry.subscribe("x", recording(&log, "first"));
        registry.subscribe("x", recording(&log, "second"));
        registry.subscribe("x", recording(&log, "third"));

        for _ in 0..3 {
            registry.trigger("x", &EventArgs::none()).unwrap();
        }

        assert_eq!(
            *log.lock(),
            vec![
                "first", "second", "third", "first", "second", "third", "first", "second", "third"
            ]
        );
    }

    #[test]
    fn unknown_name_is_a_noop() {
        let registry = EventRegistry::new();
        registry.trigger("nonexistent", &EventArgs::none()).unwrap();
    }

    #[test]
    fn duplicate_subscription_runs_twice() {
        let registry = EventRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_ = Arc::clone(&count);
        let listener = shared_listener(move |_args: &EventArgs| {
            count_.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        registry.subscribe("x", Arc::clone(&listener));
        registry.subscribe("x", listener);

        registry.trigger("x", &EventArgs::none()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn names_are_independent() {
        let registry = EventRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        registry.subscribe("a", recording(&log, "a"));
        registry.trigger("b", &EventArgs::none()).unwrap();
        assert!(log.lock().is_empty());

        registry.trigger("a", &EventArgs::none()).unwrap();
        assert_eq!(*log.lock(), vec!["a"]);
    }

    #[test]
    fn arguments_pass_through_unmodified() {
        let registry = EventRegistry::new();
        let seen = Arc::new(Mutex::new(None));

        let seen_ = Arc::clone(&seen);
        registry.subscribe(
            "x",
            shared_listener(move |args: &EventArgs| {
                *seen_.lock() = Some(args.clone());
                Ok(())
            }),
        );

        let args = EventArgs::new("v0", 1, serde_json::json!(["v2"]));
        registry.trigger("x", &args).unwrap();
        assert_eq!(seen.lock().as_ref(), Some(&args));
    }

    #[test]
    fn first_failure_aborts_remaining_dispatch() {
        let registry = EventRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        registry.subscribe("x", recording(&log, "before"));
        registry.subscribe(
            "x",
            shared_listener(|_args: &EventArgs| Err(EventError::other("boom"))),
        );
        registry.subscribe("x", recording(&log, "after"));

        let err = registry.trigger("x", &EventArgs::none()).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(*log.lock(), vec!["before"]);

        // The failure does not unsubscribe anyone.
        assert_eq!(registry.listener_count("x"), 3);
    }

    #[test]
    fn subscribe_during_dispatch_waits_for_next_trigger() {
        let registry = Arc::new(EventRegistry::new());
        let count = Arc::new(AtomicUsize::new(0));

        let registry_ = Arc::clone(&registry);
        let count_ = Arc::clone(&count);
        registry.subscribe(
            "x",
            shared_listener(move |_args: &EventArgs| {
                let count = Arc::clone(&count_);
                registry_.subscribe(
                    "x",
                    shared_listener(move |_args: &EventArgs| {
                        count.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }),
                );
                Ok(())
            }),
        );

        // The in-flight trigger dispatches only the snapshot taken at start.
        registry.trigger("x", &EventArgs::none()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(registry.listener_count("x"), 2);

        // The next trigger sees the listener added above (and adds another).
        registry.trigger("x", &EventArgs::none()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(registry.listener_count("x"), 3);
    }

    #[test]
    fn clear_releases_all_listeners() {
        let registry = EventRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        registry.subscribe("a", recording(&log, "a"));
        registry.subscribe("b", recording(&log, "b"));
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.listener_count("a"), 0);

        registry.trigger("a", &EventArgs::none()).unwrap();
        assert!(log.lock().is_empty());

        // Reusable after clear, with no stale listeners.
        registry.subscribe("a", recording(&log, "fresh"));
        registry.trigger("a", &EventArgs::none()).unwrap();
        assert_eq!(*log.lock(), vec!["fresh"]);
    }

    #[test]
    #[should_panic(expected = "event name must not be empty")]
    fn empty_name_subscribe_panics() {
        let registry = EventRegistry::new();
        registry.subscribe("", shared_listener(|_args: &EventArgs| Ok(())));
    }

    #[test]
    #[should_panic(expected = "event name must not be empty")]
    fn empty_name_trigger_panics() {
        let registry = EventRegistry::new();
        let _ = registry.trigger("", &EventArgs::none());
    }

    #[test]
    fn event_names_lists_subscribed_names() {
        let registry = EventRegistry::new();
        registry.subscribe("a", shared_listener(|_args: &EventArgs| Ok(())));
        registry.subscribe("b", shared_listener(|_args: &EventArgs| Ok(())));

        let mut names = registry.event_names();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }
}
