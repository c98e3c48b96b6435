//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\queue-view\config.toml
//! - macOS: ~/Library/Application Support/queue-view/config.toml
//! - Linux: ~/.config/queue-view/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::player::RemovalPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play queue behaviour
    pub queue: QueueConfig,

    /// List view settings
    pub view: ViewConfig,

    /// Settings for the `demo` command
    pub demo: DemoConfig,
}

/// Play queue settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// What happens to the current index when an earlier item is removed
    pub removal_policy: RemovalPolicy,
}

/// List view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Header line
    pub header: String,

    /// Whether the list gets a header row
    pub show_header: bool,

    /// Footer line
    pub footer: String,

    /// Whether the footer row is shown
    pub show_footer: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            header: "Play Queue".to_string(),
            show_header: true,
            footer: "End of queue".to_string(),
            show_footer: true,
        }
    }
}

/// Demo producer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Tracks queued before the demo starts
    pub tracks: usize,

    /// Number of random mutations the producer performs
    pub steps: usize,

    /// Delay between mutations in milliseconds
    pub interval_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tracks: 5,
            steps: 12,
            interval_ms: 150,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("queue-view"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)
}

/// Save configuration to `path`, creating parent directories as needed.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[queue]"));
        assert!(toml.contains("[view]"));
        assert!(toml.contains("[demo]"));
        assert!(toml.contains("removal_policy = \"track_item\""));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[queue]
removal_policy = "keep_index"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.queue.removal_policy, RemovalPolicy::KeepIndex);
        assert_eq!(config.view, ViewConfig::default());
        assert_eq!(config.demo.tracks, 5);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.view.show_header = false;
        config.view.show_footer = false;
        config.demo.steps = 3;

        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_disabled_header_survives_round_trip() {
        let mut config = Config::default();
        config.view.show_header = false;

        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("show_header = false"));
        let loaded: Config = toml::from_str(&toml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "queue = [not toml").unwrap();

        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("absent.toml")), Config::default());
    }
}
