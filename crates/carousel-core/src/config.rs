use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Cards shown on the track (built-in portfolio set when empty)
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Quiet window before a burst of resizes is reconciled
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Sub-unit tolerance when deciding whether the end has been reached
    #[serde(default = "default_next_epsilon")]
    pub next_epsilon: f64,
    /// Reduced-motion preference: every reposition happens without a transition
    #[serde(default)]
    pub reduced_motion: bool,
    /// Give the carousel keyboard focus on start
    #[serde(default = "default_true")]
    pub focus_on_start: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce_ms(),
            next_epsilon: default_next_epsilon(),
            reduced_motion: false,
            focus_on_start: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Card width in terminal columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Gap between track children in columns
    #[serde(default = "default_card_gap")]
    pub card_gap: u16,
    /// Insert an inert divider before the first card
    #[serde(default)]
    pub leading_divider: bool,
    /// Track transition settings
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            card_width: default_card_width(),
            card_gap: default_card_gap(),
            leading_divider: false,
            transition: TransitionConfig::default(),
        }
    }
}

/// Easing curve used by the track transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Animate track movement between positions
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Transition duration in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while a transition is running
    #[serde(default = "default_transition_fps")]
    pub fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            fps: default_transition_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<C-h>", "<S-Tab>", "<Left>", "<Home>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Previous slide
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// First slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Move keyboard focus onto / off the carousel
    #[serde(default = "default_key_toggle_focus")]
    pub toggle_focus: String,
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            prev: default_key_prev(),
            next: default_key_next(),
            first: default_key_first(),
            last: default_key_last(),
            toggle_focus: default_key_toggle_focus(),
            quit: default_key_quit(),
        }
    }
}

/// A single card on the track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: Option<String>,
}

impl CardConfig {
    pub fn new(title: &str, description: &str, tag: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tag: tag.map(str::to_string),
        }
    }

    /// Built-in portfolio cards used when the config lists none
    pub fn portfolio() -> Vec<Self> {
        vec![
            Self::new("Aurora", "Brand film and motion identity for a lighting studio.", Some("Motion")),
            Self::new("Drift", "Product launch teaser cut for social platforms.", Some("Edit")),
            Self::new("Harbor", "Documentary short following a night ferry crew.", Some("Film")),
            Self::new("Kinetic", "Typography loop set for a conference stage.", Some("Motion")),
            Self::new("Lumen", "Colour grade and finishing for a music video.", Some("Colour")),
            Self::new("Meridian", "Explainer series for a travel start-up.", Some("Animation")),
        ]
    }
}

fn default_key_prev() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_first() -> String { "<Home>".to_string() }
fn default_key_last() -> String { "<End>".to_string() }
fn default_key_toggle_focus() -> String { "<Tab>".to_string() }
fn default_key_quit() -> String { "q".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_resize_debounce_ms() -> u64 {
    120
}

fn default_next_epsilon() -> f64 {
    1.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_card_width() -> u16 {
    28
}

fn default_card_gap() -> u16 {
    2
}

fn default_transition_duration() -> u64 {
    180
}

fn default_transition_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Cards to show, falling back to the built-in set
    pub fn cards(&self) -> Vec<CardConfig> {
        if self.cards.is_empty() {
            CardConfig::portfolio()
        } else {
            self.cards.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.slider.resize_debounce_ms, 120);
        assert!((config.slider.next_epsilon - 1.0).abs() < f64::EPSILON);
        assert!(!config.slider.reduced_motion);
        assert_eq!(config.ui.transition.easing, EasingType::Cubic);
        assert_eq!(config.keymap.prev, "h");
        assert_eq!(config.cards().len(), 6);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            reduced_motion = true

            [ui.transition]
            easing = "ease_out"

            [[cards]]
            title = "Solo"
            "#,
        )
        .unwrap();

        assert!(config.slider.reduced_motion);
        assert_eq!(config.slider.resize_debounce_ms, 120);
        assert_eq!(config.ui.transition.easing, EasingType::EaseOut);
        assert_eq!(config.ui.card_width, 28);
        assert_eq!(config.cards(), vec![CardConfig::new("Solo", "", None)]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[slider]\nresize_debounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_round_trip_keeps_cards() {
        let mut config = AppConfig::default();
        config.cards = CardConfig::portfolio();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.cards, config.cards);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("carousel-config-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }
}
