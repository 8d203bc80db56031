//! # Hearsay Event Core
//!
//! An in-process publish/subscribe registry. Producers announce occurrences
//! by name with a fixed three-slot payload; consumers subscribe listeners to
//! a name and are invoked synchronously, in registration order, on every
//! matching trigger.
//!
//! The registry is an explicit object with an owner-supplied lifetime, so
//! hosts can construct as many independent registries as they need (one per
//! session, one per test) rather than sharing hidden global state.
//!
//! ## Quick Start
//!
//! ```rust
//! use hearsay_core::{EventArgs, EventRegistry, shared_listener};
//!
//! let registry = EventRegistry::new();
//!
//! registry.subscribe(
//!     "message:received",
//!     shared_listener(|args| {
//!         println!("from {}: {}", args.arg0(), args.arg1());
//!         Ok(())
//!     }),
//! );
//!
//! registry.trigger(
//!     "message:received",
//!     &EventArgs::two("alice@example.org", "hello"),
//! )?;
//! # Ok::<(), hearsay_core::EventError>(())
//! ```

pub mod error;
pub mod events;

pub use error::{EventError, EventResult};
pub use events::{shared_listener, EventArgs, EventRegistry, Listener, SharedListener};
