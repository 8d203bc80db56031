//! The file-backed preferences store.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::PreferencesError;
use crate::keys::Preference;

/// Stored log sizes below this are treated as unset.
pub const MIN_LOG_SIZE: i64 = 64;
/// Log size used when no usable value is stored.
pub const MAX_LOG_SIZE: i64 = 1_048_580;

/// Minutes of inactivity before auto-away when nothing usable is stored.
const DEFAULT_AUTOAWAY_TIME: i64 = 15;

/// Grouped, persistent key-value preferences.
///
/// Backed by a human-editable TOML file with one table per group. Reads
/// never fail hard: a missing file, a missing key, or a malformed value all
/// resolve to the key's documented default. Every `set_*` call updates the
/// in-memory store and synchronously persists the entire store back to the
/// file — no batching, no write coalescing.
///
/// # Example
///
/// ```rust,no_run
/// use hearsay_config::{Preference, Preferences};
///
/// let mut prefs = Preferences::load();
/// if prefs.get_boolean(Preference::Beep) {
///     // sound the bell ...
/// }
/// prefs.set_boolean(Preference::Beep, false)?;
/// # Ok::<(), hearsay_config::PreferencesError>(())
/// ```
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    table: Table,
}

impl Preferences {
    /// Load preferences from the per-user config location
    /// (`$XDG_CONFIG_HOME/hearsay/hearsay.toml` or the platform
    /// equivalent).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load preferences from an explicit file path.
    ///
    /// A missing file yields an empty store, not an error. A file that
    /// fails to parse is treated the same way, with a warning — a broken
    /// config must never take the host application down.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(contents) => match contents.parse::<Table>() {
                Ok(table) => table,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Malformed preferences file, falling back to defaults"
                    );
                    Table::new()
                }
            },
            Err(_) => Table::new(),
        };

        tracing::info!(path = %path.display(), groups = table.len(), "Loaded preferences");
        Self { path, table }
    }

    /// The per-user preferences file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hearsay")
            .join("hearsay.toml")
    }

    /// The file this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored boolean for `pref`, or its default when absent or malformed.
    pub fn get_boolean(&self, pref: Preference) -> bool {
        self.get_value(pref)
            .and_then(Value::as_bool)
            .unwrap_or_else(|| pref.default_boolean())
    }

    /// Stored string for `pref`, or its default when absent or malformed.
    pub fn get_string(&self, pref: Preference) -> Option<String> {
        self.get_value(pref)
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| pref.default_string().map(str::to_string))
    }

    /// Stored integer for `pref`, or its default when absent or malformed.
    pub fn get_int(&self, pref: Preference) -> i64 {
        self.get_value(pref)
            .and_then(Value::as_integer)
            .unwrap_or_else(|| pref.default_int())
    }

    /// Set a boolean and persist the store.
    pub fn set_boolean(&mut self, pref: Preference, value: bool) -> Result<(), PreferencesError> {
        self.set_value(pref, Value::Boolean(value))
    }

    /// Set or remove a string and persist the store.
    ///
    /// `None` removes the key, so a later read falls back to the default.
    pub fn set_string(
        &mut self,
        pref: Preference,
        value: Option<&str>,
    ) -> Result<(), PreferencesError> {
        match value {
            Some(value) => self.set_value(pref, Value::String(value.to_string())),
            None => {
                if let Some(Value::Table(group)) = self.table.get_mut(pref.group()) {
                    group.remove(pref.key());
                }
                self.save()
            }
        }
    }

    /// Set an integer and persist the store.
    pub fn set_int(&mut self, pref: Preference, value: i64) -> Result<(), PreferencesError> {
        self.set_value(pref, Value::Integer(value))
    }

    /// Maximum log size in bytes.
    ///
    /// A stored value below [`MIN_LOG_SIZE`] is unusable and yields
    /// [`MAX_LOG_SIZE`] instead.
    pub fn max_log_size(&self) -> i64 {
        let stored = self.get_int(Preference::LogMaxSize);
        if stored < MIN_LOG_SIZE {
            MAX_LOG_SIZE
        } else {
            stored
        }
    }

    /// Minutes of inactivity before going auto-away.
    ///
    /// A stored (or defaulted) zero means "never configured" and yields 15.
    pub fn autoaway_time(&self) -> i64 {
        let stored = self.get_int(Preference::AutoawayTime);
        if stored == 0 {
            DEFAULT_AUTOAWAY_TIME
        } else {
            stored
        }
    }

    fn get_value(&self, pref: Preference) -> Option<&Value> {
        self.table.get(pref.group())?.as_table()?.get(pref.key())
    }

    fn set_value(&mut self, pref: Preference, value: Value) -> Result<(), PreferencesError> {
        let group = self
            .table
            .entry(pref.group())
            .or_insert_with(|| Value::Table(Table::new()));

        if let Value::Table(table) = group {
            table.insert(pref.key().to_string(), value);
        } else {
            // A scalar where a group table belongs; the group wins.
            let mut table = Table::new();
            table.insert(pref.key().to_string(), value);
            *group = Value::Table(table);
        }

        self.save()
    }

    fn save(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferencesError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(&self.table)?;
        fs::write(&self.path, contents).map_err(|source| PreferencesError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }
}
