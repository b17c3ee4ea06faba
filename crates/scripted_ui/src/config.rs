//! Engine configuration, loaded once at startup from TOML.
//!
//! ```toml
//! scroll_ease_ms = 100
//! tooltip_delay_ms = 400
//! click_sound = "BUTTON_CLICK"
//!
//! [keybindings]
//! MENU_SELECT = ["ENTER", "SPACE"]
//! MENU_BACK = ["ESCAPE"]
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::capability::KeybindingTable;
use crate::error::{ConfigError, ConfigResult};

/// Tunables shared by every screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Duration of scroll easing, in milliseconds.
    pub scroll_ease_ms: u64,
    /// Hover time before a tooltip shows, in milliseconds.
    pub tooltip_delay_ms: u64,
    /// Default text point size.
    pub text_size: f32,
    /// Height reserved for one line of text.
    pub line_height: f32,
    /// Edge length of one icon at zoom 1.
    pub icon_size: f32,
    /// Pixels scrolled per wheel notch.
    pub wheel_step: f32,
    /// Pixels scrolled per scroll-button press.
    pub scroll_button_step: f32,
    /// Sound played when a button fires.
    pub click_sound: Option<String>,
    /// Sound played when keyboard focus moves.
    pub navigate_sound: Option<String>,
    /// Action name → key descriptions.
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_ease_ms: 100,
            tooltip_delay_ms: 500,
            text_size: 19.0,
            line_height: 20.0,
            icon_size: 24.0,
            wheel_step: 40.0,
            scroll_button_step: 40.0,
            click_sound: None,
            navigate_sound: None,
            keybindings: HashMap::new(),
        }
    }
}

impl UiConfig {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not valid TOML of this shape.
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Toml`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Scroll easing window.
    #[must_use]
    pub const fn scroll_ease(&self) -> Duration {
        Duration::from_millis(self.scroll_ease_ms)
    }

    /// Tooltip hover delay.
    #[must_use]
    pub const fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms)
    }

    /// Builds the keybinding capability from the `keybindings` table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for an unparseable key description.
    pub fn keybinding_table(&self) -> ConfigResult<KeybindingTable> {
        KeybindingTable::from_names(&self.keybindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::KeybindingMap;
    use crate::input::{Key, KeyEvent};

    #[test]
    fn test_defaults_when_empty() {
        let config = UiConfig::from_toml("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.scroll_ease(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_toml(
            r#"
            tooltip_delay_ms = 250
            click_sound = "CLICK"

            [keybindings]
            MENU_SELECT = ["ENTER"]
            "#,
        )
        .unwrap();

        assert_eq!(config.tooltip_delay(), Duration::from_millis(250));
        assert_eq!(config.click_sound.as_deref(), Some("CLICK"));
        assert_eq!(config.text_size, 19.0);

        let table = config.keybinding_table().unwrap();
        assert!(table.matches("MENU_SELECT", &KeyEvent::new(Key::Enter)));
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(matches!(
            UiConfig::from_toml("scroll_ease_ms = \"fast\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
