//! Player configuration
//!
//! Loads `player.toml` into the core's playback and scan settings. A copy
//! of the shipped file is embedded so the player always has a valid
//! configuration to fall back to.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use strophe_core::config::{ConfigIssue, PlaybackConfig, ScanConfig};

/// Shipped default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../player.toml");

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(io::Error),
    /// File is not valid TOML or has wrongly typed keys
    Parse(toml::de::Error),
    /// Values parsed but are out of range
    Invalid(ConfigIssue),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config: {}", e),
            ConfigError::Invalid(issue) => write!(f, "invalid config: {}", issue),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ConfigIssue> for ConfigError {
    fn from(issue: ConfigIssue) -> Self {
        ConfigError::Invalid(issue)
    }
}

/// Complete player configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub playback: PlaybackConfig,
    pub scan: ScanConfig,
}

impl PlayerConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: PlayerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded player config");
        Ok(config)
    }

    /// Read a config file, using the embedded defaults if it is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{=str}, using defaults", e.to_string().as_str());
                Self::embedded()
            }
        }
    }

    /// The embedded default configuration
    pub fn embedded() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        self.playback.validate()?;
        self.scan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strophe_core::Face;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = PlayerConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(PlayerConfig::embedded(), PlayerConfig::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = PlayerConfig::from_toml_str("[playback]\nstep_pause_ms = 500.0\n").unwrap();
        assert_eq!(config.playback.step_pause_ms, 500.0);
        assert_eq!(config.playback.fallback_step_ms, 1500.0);
        assert_eq!(config.scan, ScanConfig::default());

        assert_eq!(PlayerConfig::from_toml_str("").unwrap(), PlayerConfig::default());
    }

    #[test]
    fn test_custom_scan_order() {
        let text = r#"
            [scan]
            order = ["up", "down", "front", "back", "left", "right"]
        "#;
        let config = PlayerConfig::from_toml_str(text).unwrap();
        assert_eq!(config.scan.order[0], Face::Up);
        assert_eq!(config.scan.order[5], Face::Right);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let text = "[playback]\nmin_speed = 2.0\nmax_speed = 1.0\n";
        assert!(matches!(
            PlayerConfig::from_toml_str(text),
            Err(ConfigError::Invalid(ConfigIssue::BadSpeedRange))
        ));

        let text = "[playback]\ndeadband_ms = -1.0\n";
        assert!(matches!(
            PlayerConfig::from_toml_str(text),
            Err(ConfigError::Invalid(ConfigIssue::BadDuration("deadband_ms")))
        ));

        let text = r#"
            [scan]
            order = ["up", "up", "front", "back", "left", "right"]
        "#;
        assert!(matches!(
            PlayerConfig::from_toml_str(text),
            Err(ConfigError::Invalid(ConfigIssue::BadScanOrder))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            PlayerConfig::from_toml_str("[playback\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PlayerConfig::from_toml_str("[scan]\norder = [\"top\"]\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = PlayerConfig::load("/nonexistent/strophe/player.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
        assert_eq!(
            PlayerConfig::load_or_default("/nonexistent/strophe/player.toml"),
            PlayerConfig::default()
        );
    }
}
