//! Tab completion for boolean preference values.

const CHOICES: [&str; 2] = ["on", "off"];

/// Cycles through the "on"/"off" choices matching a typed prefix.
///
/// Repeated `complete` calls with the same prefix walk successive matches;
/// once the matches are exhausted the completer returns `None` and starts
/// over on the next call. `reset` abandons the current cycle, for when the
/// user moves on to a different input.
///
/// # Example
///
/// ```rust
/// use hearsay_config::BooleanChoice;
///
/// let mut completer = BooleanChoice::new();
/// assert_eq!(completer.complete("o"), Some("on"));
/// assert_eq!(completer.complete("o"), Some("off"));
/// assert_eq!(completer.complete("o"), None);
/// ```
#[derive(Debug, Default)]
pub struct BooleanChoice {
    last: Option<usize>,
}

impl BooleanChoice {
    /// Create a completer with no cycle in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next choice matching `prefix`, or `None` when the cycle is done.
    pub fn complete(&mut self, prefix: &str) -> Option<&'static str> {
        let start = self.last.map_or(0, |index| index + 1);
        for index in start..CHOICES.len() {
            if CHOICES[index].starts_with(prefix) {
                self.last = Some(index);
                return Some(CHOICES[index]);
            }
        }

        self.last = None;
        None
    }

    /// Abandon the current cycle.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
