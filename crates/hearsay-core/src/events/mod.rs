//! Event system for Hearsay.
//!
//! This module provides the named-event registry and its supporting types.
//!
//! # Architecture
//!
//! ```text
//! Producers (many):                   Consumers (many):
//!   connection ──┐                      ┌──► chat window
//!   roster     ──┼──► EventRegistry ────┼──► notifier
//!   presence   ──┘   (name -> ordered   └──► chat log
//!                     listener list)
//! ```
//!
//! # Key Components
//!
//! - [`EventRegistry`]: name → ordered listener list, synchronous fan-out
//! - [`Listener`]: capability trait, one `on_event` operation
//! - [`EventArgs`]: fixed three-slot payload passed to every listener
//!
//! # Dispatch Rules
//!
//! - Listeners run in registration order, inline, before `trigger` returns.
//! - Triggering a name nobody subscribed to is a no-op, not an error.
//! - The first listener failure aborts the remaining dispatch for that
//!   trigger call and propagates to the caller.
//! - Dispatch iterates a snapshot taken when the trigger begins; listeners
//!   added mid-dispatch only participate in later triggers.

pub mod listener;
pub mod payload;
pub mod registry;

pub use listener::{shared_listener, Listener, SharedListener};
pub use payload::EventArgs;
pub use registry::EventRegistry;
