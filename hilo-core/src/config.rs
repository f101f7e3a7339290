//! Session configuration shared by the TUI and CLI front ends.
//!
//! Every field has a serde default so a partial YAML file (or none at all)
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Game defaults applied before the player edits anything.
    #[serde(default)]
    pub game: GameConfig,
    /// Terminal UI settings.
    #[serde(default)]
    pub ui: UiConfig,
    /// Event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Game defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Candidate upper bound shown in the setup screen.
    #[serde(default = "default_max_number")]
    pub default_max_number: u32,
    /// Fixed RNG seed for reproducible sessions; absent means entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_number() -> u32 {
    100
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_max_number: default_max_number(),
            seed: None,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

/// Event log settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// NDJSON event log destination; absent disables event logging.
    #[serde(default)]
    pub events_path: Option<PathBuf>,
    /// Flush the event log every N lines; 0 flushes only on exit.
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    100
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
game:
  default_max_number: 500
  seed: 42

ui:
  tick_ms: 50
"#;

        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.game.default_max_number, 500);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.ui.tick_ms, 50);
        // Check defaults are applied
        assert_eq!(config.logging.events_path, None);
        assert_eq!(config.logging.flush_every_lines, 100);
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config = Config::from_yaml("game: {}\n").expect("Failed to parse YAML");
        assert_eq!(config.game.default_max_number, 100);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = Config::default();
        config.game.default_max_number = 1234;
        config.logging.events_path = Some(PathBuf::from("logs/events.ndjson"));
        let s = serde_yaml::to_string(&config).unwrap();
        let back = Config::from_yaml(&s).unwrap();
        assert_eq!(back.game.default_max_number, 1234);
        assert_eq!(
            back.logging.events_path.as_deref(),
            Some(Path::new("logs/events.ndjson"))
        );
    }
}
