//! Narrow capabilities the engine consumes from its host, besides the renderer.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{ConfigError, ConfigResult};
use crate::input::KeyEvent;

/// Monotonic real-time clock. Sampled once per render or dispatch pass.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced explicitly by the host. Useful for replays and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// A clock frozen at `ms` milliseconds.
    #[must_use]
    pub fn at_millis(ms: u64) -> Self {
        Self {
            now: Cell::new(Duration::from_millis(ms)),
        }
    }

    /// Sets the current time in milliseconds.
    pub fn set_millis(&self, ms: u64) {
        self.now.set(Duration::from_millis(ms));
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Maps abstract action names to the key events that trigger them.
pub trait KeybindingMap {
    /// True if `event` triggers the action called `binding`.
    fn matches(&self, binding: &str, event: &KeyEvent) -> bool;
}

/// Keybindings loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeybindingTable {
    bindings: HashMap<String, Vec<KeyEvent>>,
}

impl KeybindingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `event` as a trigger for `binding`.
    pub fn bind(&mut self, binding: impl Into<String>, event: KeyEvent) {
        self.bindings.entry(binding.into()).or_default().push(event);
    }

    /// Builds a table from action name → key descriptions such as `"CTRL+S"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for a description that does not
    /// name a key.
    pub fn from_names(table: &HashMap<String, Vec<String>>) -> ConfigResult<Self> {
        let mut result = Self::new();
        for (binding, keys) in table {
            for key in keys {
                let event = KeyEvent::parse(key).ok_or_else(|| ConfigError::UnknownKey {
                    binding: binding.clone(),
                    key: key.clone(),
                })?;
                result.bind(binding.clone(), event);
            }
        }
        Ok(result)
    }
}

impl KeybindingMap for KeybindingTable {
    fn matches(&self, binding: &str, event: &KeyEvent) -> bool {
        self.bindings
            .get(binding)
            .is_some_and(|events| events.contains(event))
    }
}

/// Fire-and-forget sound trigger.
pub trait SoundPlayer {
    /// Plays the sound registered under `id`.
    fn play(&mut self, id: &str);
}

/// Sound capability that discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSound;

impl SoundPlayer for NoSound {
    fn play(&mut self, _id: &str) {}
}
