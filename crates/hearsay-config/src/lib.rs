//! # Hearsay Preferences
//!
//! Persistent, grouped key-value preferences backed by a human-editable
//! TOML file at a fixed per-user location. Every recognized key has exactly
//! one group, one on-disk field name, and a documented default; missing
//! files, missing keys, and malformed values all resolve to defaults rather
//! than erroring.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hearsay_config::{Preference, Preferences};
//!
//! let mut prefs = Preferences::load();
//!
//! let beep = prefs.get_boolean(Preference::Beep);
//! prefs.set_boolean(Preference::Beep, !beep)?;
//! # Ok::<(), hearsay_config::PreferencesError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod boolean_choice;
mod error;
mod keys;
mod preferences;

pub use boolean_choice::BooleanChoice;
pub use error::PreferencesError;
pub use keys::Preference;
pub use preferences::{Preferences, MAX_LOG_SIZE, MIN_LOG_SIZE};
