//! Configuration management module
//!
//! Handles loading, rendering, and validation of the quiz configuration.
//! The config file is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::fs;
use serde::{Deserialize, Serialize};
use crate::util::duration::humantime_serde;
use crate::{QuizError, Result, APP_NAME, CONFIG_FILE};

/// Delay before the "next" control appears after an answer
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);
/// Poll interval of the input thread
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

const MAX_REVEAL_DELAY: Duration = Duration::from_secs(10);
const MIN_TICK_RATE: Duration = Duration::from_millis(10);
const MAX_TICK_RATE: Duration = Duration::from_secs(1);

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Delay between answering and the "next" control appearing
    #[serde(with = "humantime_serde")]
    pub reveal_delay: Duration,
    /// How often the input thread checks whether it should stop
    #[serde(with = "humantime_serde")]
    pub tick_rate: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl QuizConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.reveal_delay > MAX_REVEAL_DELAY {
            return Err(QuizError::ConfigError(format!(
                "Reveal delay too long: {}ms (max: {}ms)",
                self.reveal_delay.as_millis(),
                MAX_REVEAL_DELAY.as_millis()
            )));
        }

        if self.tick_rate < MIN_TICK_RATE || self.tick_rate > MAX_TICK_RATE {
            return Err(QuizError::ConfigError(format!(
                "Tick rate must be between {}ms and {}ms",
                MIN_TICK_RATE.as_millis(),
                MAX_TICK_RATE.as_millis()
            )));
        }

        Ok(())
    }

    /// Set the reveal delay
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the tick rate
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| QuizError::ConfigError(
                format!("Failed to read config file {}: {}", config_path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| QuizError::ConfigError(
                format!("Failed to parse config file {}: {}", config_path.display(), e)
            ))?;

        config.validate()?;
        tracing::info!(path = %config_path.display(), "loaded config");

        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quizwiz/quizwiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QuizError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = QuizConfig::default();
        assert_eq!(config.reveal_delay, Duration::from_millis(500));
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let config = QuizConfig::new().with_reveal_delay(Duration::from_millis(750));
        let toml_str = config.to_toml().expect("Failed to serialize to TOML");
        assert!(toml_str.contains("reveal_delay = \"750ms\""));

        let deserialized: QuizConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: QuizConfig = toml::from_str("tick_rate = \"100ms\"").unwrap();
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.reveal_delay, DEFAULT_REVEAL_DELAY);
    }

    #[test]
    fn test_validation_failures() {
        let slow = QuizConfig::new().with_reveal_delay(Duration::from_secs(11));
        assert!(matches!(slow.validate(), Err(QuizError::ConfigError(_))));

        let busy = QuizConfig::new().with_tick_rate(Duration::from_millis(1));
        assert!(busy.validate().is_err());

        let sleepy = QuizConfig::new().with_tick_rate(Duration::from_secs(5));
        assert!(sleepy.validate().is_err());

        let instant = QuizConfig::new().with_reveal_delay(Duration::ZERO);
        assert!(instant.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = QuizConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn test_rendered_toml_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = QuizConfig::new()
            .with_reveal_delay(Duration::from_millis(200))
            .with_tick_rate(Duration::from_millis(50));

        fs::write(&path, config.to_toml().unwrap()).unwrap();
        let loaded = QuizConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        fs::write(&path, "reveal_delay = \"whenever\"").unwrap();
        assert!(QuizConfig::load_from(&path).is_err());

        fs::write(&path, "reveal_delay = \"1m\"").unwrap();
        assert!(QuizConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("quizwiz"));
        assert!(path.to_string_lossy().ends_with("quizwiz.toml"));
    }
}
