//! # Configuration State
//!
//! Stores terminal configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ABACUS_MAX_DIGITS=12                                               │
//! │     ABACUS_OUTPUT=json                                                 │
//! │     ABACUS_SHOW_SUMMARY=false                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $ABACUS_CONFIG, or                                                 │
//! │     ~/.config/abacus/abacus.toml (Linux)                               │
//! │     ~/Library/Application Support/dev.abacus.abacus/abacus.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     16 digits, text output, summary shown, 24 columns                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # abacus.toml
//! max_digits = 16
//! output = "text"      # text | json
//! show_summary = true
//! display_width = 24
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::str::FromStr;

use abacus_core::validation::validate_max_digits;
use abacus_core::{ValidationError, DEFAULT_MAX_DIGITS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Narrowest and widest text display.
const MIN_DISPLAY_WIDTH: usize = 8;
const MAX_DISPLAY_WIDTH: usize = 120;

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Output Mode
// =============================================================================

/// How the display is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Two right-aligned lines: summary above, display below.
    #[default]
    Text,

    /// One JSON object per response, for a frontend driving the process.
    Json,
}

impl FromStr for OutputMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputMode::Text),
            "json" | "jsonl" => Ok(OutputMode::Json),
            other => Err(ValidationError::InvalidFormat {
                field: "output".to_string(),
                reason: format!("expected text or json, got {:?}", other),
            }),
        }
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Digits one operand may hold.
    pub max_digits: usize,

    /// Output format.
    pub output: OutputMode,

    /// Print the pending-operation line above the display.
    pub show_summary: bool,

    /// Column the text display is right-aligned to.
    pub display_width: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            max_digits: DEFAULT_MAX_DIGITS,
            output: OutputMode::Text,
            show_summary: true,
            display_width: 24,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (abacus.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::ReadFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_max_digits(self.max_digits)?;

        if !(MIN_DISPLAY_WIDTH..=MAX_DISPLAY_WIDTH).contains(&self.display_width) {
            return Err(ValidationError::OutOfRange {
                field: "display_width".to_string(),
                min: MIN_DISPLAY_WIDTH as i64,
                max: MAX_DISPLAY_WIDTH as i64,
            }
            .into());
        }

        Ok(())
    }

    /// Applies `ABACUS_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup. Unparsable values are logged and
    /// skipped.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ABACUS_MAX_DIGITS") {
            match value.trim().parse::<usize>() {
                Ok(n) => {
                    debug!(max_digits = n, "Overriding max digits from environment");
                    self.max_digits = n;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid ABACUS_MAX_DIGITS"),
            }
        }

        if let Some(value) = lookup("ABACUS_OUTPUT") {
            match value.parse::<OutputMode>() {
                Ok(mode) => self.output = mode,
                Err(e) => warn!(value = %value, "Ignoring ABACUS_OUTPUT: {}", e),
            }
        }

        if let Some(value) = lookup("ABACUS_SHOW_SUMMARY") {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.show_summary = true,
                "0" | "false" | "no" | "off" => self.show_summary = false,
                _ => warn!(value = %value, "Ignoring invalid ABACUS_SHOW_SUMMARY"),
            }
        }
    }

    /// Returns the config file path: `$ABACUS_CONFIG` or the platform
    /// config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ABACUS_CONFIG") {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("dev", "abacus", "abacus")
            .map(|dirs| dirs.config_dir().join("abacus.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ConfigState::default();
        assert_eq!(config.max_digits, 16);
        assert_eq!(config.output, OutputMode::Text);
        assert!(config.show_summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_digits = 10\noutput = \"json\"").unwrap();

        let config = ConfigState::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.max_digits, 10);
        assert_eq!(config.output, OutputMode::Json);
        // Unset keys keep their defaults
        assert!(config.show_summary);
        assert_eq!(config.display_width, 24);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.max_digits, ConfigState::default().max_digits);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_digits = \"lots\"").unwrap();

        let result = ConfigState::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));

        let fallback = ConfigState::load_or_default(Some(file.path().to_path_buf()));
        assert_eq!(fallback, ConfigState::default());
    }

    #[test]
    fn test_out_of_range_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_digits = 100").unwrap();

        let result = ConfigState::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.max_digits = 0;
        assert!(config.validate().is_err());

        config.max_digits = 32;
        assert!(config.validate().is_ok());

        config.display_width = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup_from(&[
            ("ABACUS_MAX_DIGITS", "12"),
            ("ABACUS_OUTPUT", "JSON"),
            ("ABACUS_SHOW_SUMMARY", "off"),
        ]));

        assert_eq!(config.max_digits, 12);
        assert_eq!(config.output, OutputMode::Json);
        assert!(!config.show_summary);
    }

    #[test]
    fn test_invalid_overrides_are_skipped() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup_from(&[
            ("ABACUS_MAX_DIGITS", "many"),
            ("ABACUS_OUTPUT", "xml"),
            ("ABACUS_SHOW_SUMMARY", "maybe"),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ConfigState::default()).unwrap();
        assert!(toml_str.contains("max_digits = 16"));
        assert!(toml_str.contains("output = \"text\""));
    }
}
