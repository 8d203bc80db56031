//! Error types for the event core.

/// Errors surfaced through event dispatch.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// A listener failed while handling a dispatched event.
    #[error("listener failed during '{event}' dispatch: {message}")]
    Listener {
        /// Name of the event being dispatched when the listener failed.
        event: String,
        /// Description of the failure.
        message: String,
    },

    /// Any other event-system failure.
    #[error("{0}")]
    Other(String),
}

impl EventError {
    /// Create a listener failure for the given event.
    pub fn listener(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Listener {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Create a generic event error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result alias for event operations.
pub type EventResult<T> = std::result::Result<T, EventError>;
