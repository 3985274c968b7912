//! Configuration settings for quickadd.
//!
//! Settings are loaded from `~/.quickadd/config.yaml`.

use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::QuickAddError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Parser settings.
    pub parser: ParserConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// First day of the week.
    #[serde(default)]
    pub week_start: WeekStart,
    /// Use the fallback detector for absolute dates like "jan 15" and "5pm".
    #[serde(default = "default_true")]
    pub fallback_detection: bool,
}

/// First day of the week, as written in config files and on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday.
    #[default]
    Sunday,
    /// Weeks start on Monday.
    Monday,
    /// Weeks start on Tuesday.
    Tuesday,
    /// Weeks start on Wednesday.
    Wednesday,
    /// Weeks start on Thursday.
    Thursday,
    /// Weeks start on Friday.
    Friday,
    /// Weeks start on Saturday.
    Saturday,
}

impl WeekStart {
    /// The corresponding chrono weekday.
    #[must_use]
    pub const fn to_weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
        }
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            fallback_detection: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, QuickAddError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            QuickAddError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            QuickAddError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, QuickAddError> {
        serde_yaml::to_string(self)
            .map_err(|e| QuickAddError::Config(format!("Failed to serialize config: {e}")))
    }
}
