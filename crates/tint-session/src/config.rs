//! Session Configuration

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Session configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of history entries kept
    pub history_capacity: usize,

    /// Delay between a finished copy and the history write
    pub copy_debounce: Duration,

    /// JSON file holding the history record
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            copy_debounce: Duration::from_millis(500),
            storage_path: std::env::temp_dir().join("tint").join("history.json"),
        }
    }
}

/// On-disk form; every field is optional and falls back to the default
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    capacity: Option<usize>,
    copy_debounce_ms: Option<u64>,
    storage_path: Option<PathBuf>,
}

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a JSON config document such as
    /// `{"capacity": 7, "copy_debounce_ms": 250}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let mut builder = ConfigBuilder::new();

        if let Some(capacity) = file.capacity {
            builder = builder.history_capacity(capacity);
        }
        if let Some(ms) = file.copy_debounce_ms {
            builder = builder.copy_debounce(Duration::from_millis(ms));
        }
        if let Some(path) = file.storage_path {
            builder = builder.storage_path(path);
        }

        builder.build()
    }

    /// Load from a JSON file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Config builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn copy_debounce(mut self, delay: Duration) -> Self {
        self.config.copy_debounce = delay;
        self
    }

    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_path = path.into();
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.config.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.history_capacity, 20);
        assert_eq!(config.copy_debounce, Duration::from_millis(500));
        assert!(config.storage_path.ends_with("history.json"));
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .history_capacity(7)
            .copy_debounce(Duration::ZERO)
            .storage_path("/tmp/x.json")
            .build()
            .unwrap();
        assert_eq!(config.history_capacity, 7);
        assert_eq!(config.copy_debounce, Duration::ZERO);
        assert_eq!(config.storage_path, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            Config::builder().history_capacity(0).build(),
            Err(ConfigError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"capacity": 7}"#).unwrap();
        assert_eq!(config.history_capacity, 7);
        assert_eq!(config.copy_debounce, Duration::from_millis(500));

        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(Config::from_json(r#"{"capcity": 7}"#), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_json(r#"{"capacity": -1}"#), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_json(r#"{"capacity": 0}"#), Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tint.json");
        fs::write(&path, r#"{"copy_debounce_ms": 0, "storage_path": "h.json"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.copy_debounce, Duration::ZERO);
        assert_eq!(config.storage_path, PathBuf::from("h.json"));
    }
}
