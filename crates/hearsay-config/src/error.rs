//! Error types for preference persistence.
//!
//! Only writes can fail: reads degrade to per-key defaults instead of
//! surfacing errors.

use std::path::PathBuf;

/// Errors raised while persisting preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    /// Writing the preferences file failed.
    #[error("failed to write preferences to {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The in-memory store could not be serialized.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}
