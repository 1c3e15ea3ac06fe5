//! Tile configuration.
//!
//! A [`TileConfig`] is an immutable snapshot: the editor never patches fields
//! in place, it commits a whole new value (see [`crate::events`]). Loading
//! and saving follow the usual config conventions: RON under
//! `~/.config/sensortile-rs/`, with a home-directory fallback.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, TileError};
use crate::scale::ColorScale;

/// Configuration for a single sensor tile.
///
/// Only `numbers` and `colors` feed the color decision; `icon`, `name` and
/// `border` are cosmetic values passed through to the renderer. Nothing is
/// validated beyond what color computation needs: a malformed scale shows
/// the fallback color instead of failing the tile.
///
/// # Examples
///
/// ```rust
/// use sensortile_rs_core::TileConfig;
///
/// let config = TileConfig::new("sensor.kitchen_co2")
///     .with_icon("mdi:molecule-co2")
///     .with_scale("600 1000 1500", "green yellow orange red");
///
/// let scale = config.color_scale().unwrap();
/// assert_eq!(scale.color_for(800.0), Some("yellow"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TileConfig {
    /// Entity id of the sensor to observe
    pub entity: String,
    /// Icon name shown in the tile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display-name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Icon border radius in percent (0-50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<u8>,
    /// Space-separated ascending thresholds
    #[serde(default)]
    pub numbers: String,
    /// Space-separated color tokens, one more than thresholds
    #[serde(default)]
    pub colors: String,
}

impl TileConfig {
    /// Create a configuration observing the given entity, with no scale yet.
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            icon: None,
            name: None,
            border: None,
            numbers: String::new(),
            colors: String::new(),
        }
    }

    /// Set the tile icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the display-name override.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the icon border radius in percent.
    #[must_use]
    pub fn with_border(mut self, percent: u8) -> Self {
        self.border = Some(percent);
        self
    }

    /// Set the threshold and color strings.
    #[must_use]
    pub fn with_scale(mut self, numbers: impl Into<String>, colors: impl Into<String>) -> Self {
        self.numbers = numbers.into();
        self.colors = colors.into();
        self
    }

    /// Parse the configured threshold/color strings into a [`ColorScale`].
    ///
    /// # Errors
    ///
    /// Returns [`TileError::Config`] if a threshold token is not a number.
    pub fn color_scale(&self) -> Result<ColorScale> {
        ColorScale::parse(&self.numbers, &self.colors)
    }

    /// Load configuration from the standard config file location.
    ///
    /// Searches for config in:
    /// 1. ~/.config/sensortile-rs/config.ron
    /// 2. ~/.sensortile-rs/config.ron (fallback)
    ///
    /// # Errors
    ///
    /// Returns an error if no config file exists in either location, or if
    /// the file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::find_config_file().ok_or_else(|| {
            TileError::config("no config file found; run with --generate-config first")
        })?;
        Self::load_from_file(&path)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: TileConfig = ron::from_str(&content).map_err(|e| TileError::Parse {
            message: format!("Failed to parse config file: {}", e),
            source: None,
        })?;

        Ok(config)
    }

    /// Find the config file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        // Try XDG config directory first
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_path = config_dir.join("sensortile-rs").join("config.ron");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        // Try home directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".sensortile-rs").join("config.ron");
            if home_path.exists() {
                return Some(home_path);
            }
        }

        None
    }

    /// Get the default config file path for writing.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sensortile-rs").join("config.ron"))
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| TileError::Parse {
                message: format!("Failed to serialize config: {}", e),
                source: None,
            })?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// An example configuration with a typical CO2 scale.
    #[must_use]
    pub fn example_config() -> Self {
        Self::new("sensor.kitchen_co2")
            .with_icon("mdi:molecule-co2")
            .with_scale("600 1000 1500", "green yellow orange red")
    }

    /// Save a documented example configuration to a file.
    pub fn save_example_config_to_file(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = r##"// sensortile-rs Configuration File
// ================================
// Copy this to ~/.config/sensortile-rs/config.ron and customize.
//
// There must be one more color than threshold. Enter thresholds and colors
// separated by spaces; two-word color names use a dash ("deep-orange").

(
    // Entity id of the sensor to observe
    entity: "sensor.kitchen_co2",

    // Icon shown in the tile
    icon: Some("mdi:molecule-co2"),

    // Display-name override (omit to use the sensor's friendly name)
    // name: Some("Kitchen CO2"),

    // Icon border radius in percent, 0-50 (omit for the default 22%)
    // border: Some(22),

    // Ascending thresholds cutting the value range into buckets
    numbers: "600 1000 1500",

    // One color per bucket: below 600, 600-1000, 1000-1500, above 1500.
    // Known names: primary, accent, disabled, red, pink, purple, deep-purple,
    // indigo, blue, light-blue, cyan, teal, green, light-green, lime, yellow,
    // amber, orange, deep-orange, brown, light-grey, grey, dark-grey,
    // blue-grey, black, white. Anything else renders as white.
    colors: "green yellow orange red",
)
"##;

        std::fs::write(path, template)?;

        Ok(())
    }
}
