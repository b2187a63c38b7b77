//! TUI configuration persistence
//!
//! Saves and loads user preferences such as tick rate, simulated submit
//! latency, re-submission policy and theme.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dialogkit_core::ReentryPolicy;
use serde::{Deserialize, Serialize};

use crate::ui::ThemeVariant;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "dialogkit";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Redraw/tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Simulated latency of the host's create/rename work
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// What to do when submit is pressed while a submission is pending
    #[serde(default)]
    pub reentry: ReentryConfig,

    #[serde(default)]
    pub theme: ThemeVariant,

    /// Ask before quitting
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

/// Re-submission policy (serializable version)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReentryConfig {
    /// Disable submit while a submission is pending
    #[default]
    Guarded,
    /// Allow overlapping submissions
    Concurrent,
}

impl From<ReentryConfig> for ReentryPolicy {
    fn from(config: ReentryConfig) -> Self {
        match config {
            ReentryConfig::Guarded => ReentryPolicy::Guarded,
            ReentryConfig::Concurrent => ReentryPolicy::Concurrent,
        }
    }
}

impl From<ReentryPolicy> for ReentryConfig {
    fn from(policy: ReentryPolicy) -> Self {
        match policy {
            ReentryPolicy::Guarded => ReentryConfig::Guarded,
            ReentryPolicy::Concurrent => ReentryConfig::Concurrent,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_submit_delay_ms() -> u64 {
    400
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            reentry: ReentryConfig::default(),
            theme: ThemeVariant::default(),
            confirm_quit: true,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to the platform default
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Save to `path`, or to the default location when `None`
    ///
    /// Returns where the file was written.
    pub fn persist(&self, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match path {
            Some(path) => {
                self.save_to(path)?;
                Ok(path.to_path_buf())
            }
            None => {
                self.save()?;
                Self::config_file_path().ok_or(ConfigError::NoConfigDir)
            }
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.submit_delay(), Duration::from_millis(400));
        assert_eq!(config.reentry, ReentryConfig::Guarded);
        assert_eq!(config.theme, ThemeVariant::Dark);
        assert!(config.confirm_quit);
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = TuiConfig {
            tick_rate_ms: 50,
            submit_delay_ms: 0,
            reentry: ReentryConfig::Concurrent,
            theme: ThemeVariant::HighContrast,
            confirm_quit: false,
        };
        config.save_to(&path).unwrap();

        assert_eq!(TuiConfig::load_from(&path), config);
    }

    #[test]
    fn test_persist_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = TuiConfig {
            submit_delay_ms: 1200,
            ..TuiConfig::default()
        };

        let written = config.persist(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(TuiConfig::load_from(&path).submit_delay_ms, 1200);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(TuiConfig::load_from(&path), TuiConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: TuiConfig =
            serde_json::from_str(r#"{ "reentry": "concurrent", "theme": "high_contrast" }"#)
                .unwrap();
        assert_eq!(config.reentry, ReentryConfig::Concurrent);
        assert_eq!(config.theme, ThemeVariant::HighContrast);
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.confirm_quit);
    }

    #[test]
    fn test_reentry_conversion() {
        assert_eq!(
            ReentryPolicy::from(ReentryConfig::Concurrent),
            ReentryPolicy::Concurrent
        );
        assert_eq!(
            ReentryConfig::from(ReentryPolicy::Guarded),
            ReentryConfig::Guarded
        );
    }
}
