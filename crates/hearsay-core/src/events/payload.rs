//! The fixed three-slot payload passed to listeners.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload carried by a trigger call.
///
/// Every event carries exactly three slots. How many slots are semantically
/// meaningful is a contract between the producer and every consumer of a
/// given event name; unused slots are always [`Value::Null`], never
/// unspecified. The constructors below cover the common call shapes so the
/// compiler enforces the arity instead of the caller counting arguments.
///
/// # Example
///
/// ```rust
/// use hearsay_core::EventArgs;
///
/// // A message event: sender and body, third slot unused.
/// let args = EventArgs::two("alice@example.org", "hello");
/// assert_eq!(args.arg0(), "alice@example.org");
/// assert!(args.arg2().is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventArgs {
    arg0: Value,
    arg1: Value,
    arg2: Value,
}

impl EventArgs {
    /// Payload with all three slots set.
    pub fn new(arg0: impl Into<Value>, arg1: impl Into<Value>, arg2: impl Into<Value>) -> Self {
        Self {
            arg0: arg0.into(),
            arg1: arg1.into(),
            arg2: arg2.into(),
        }
    }

    /// Payload with no meaningful slots (all null).
    pub fn none() -> Self {
        Self::default()
    }

    /// Payload with one meaningful slot.
    pub fn one(arg0: impl Into<Value>) -> Self {
        Self {
            arg0: arg0.into(),
            ..Self::default()
        }
    }

    /// Payload with two meaningful slots.
    pub fn two(arg0: impl Into<Value>, arg1: impl Into<Value>) -> Self {
        Self {
            arg0: arg0.into(),
            arg1: arg1.into(),
            ..Self::default()
        }
    }

    /// First slot.
    pub fn arg0(&self) -> &Value {
        &self.arg0
    }

    /// Second slot.
    pub fn arg1(&self) -> &Value {
        &self.arg1
    }

    /// Third slot.
    pub fn arg2(&self) -> &Value {
        &self.arg2
    }
}
