//! Configuration loading and typed config structures for Evently.
//!
//! The canonical configuration lives in `evently.yaml` at the project root.
//! This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default matching the original client's hard-coded behavior, so an absent
//! or empty file is a valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use evently_types::Coordinates;
use serde::Deserialize;

/// Environment variable overriding the storage root directory.
pub const ENV_STORAGE_ROOT: &str = "EVENTLY_STORAGE";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `evently.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Durable local storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Mock-authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// The fixed position distances are measured from.
    #[serde(default)]
    pub viewpoint: ViewpointConfig,

    /// Event catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `EVENTLY_STORAGE` environment variable overrides
    /// `storage.root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config
            .storage
            .override_root(std::env::var(ENV_STORAGE_ROOT).ok().as_deref());
        Ok(config)
    }
}

/// Durable local storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value files (the `localStorage` analog).
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

impl StorageConfig {
    /// Replace the root with a non-empty override value, if one is given.
    fn override_root(&mut self, value: Option<&str>) {
        if let Some(root) = value {
            if !root.is_empty() {
                self.root = PathBuf::from(root);
            }
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

fn default_storage_root() -> PathBuf {
    PathBuf::from(".evently")
}

/// Mock-authentication configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    /// Artificial delay before a login completes, in milliseconds.
    ///
    /// Exists purely for perceived responsiveness; the original client
    /// used an 800 ms timeout.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

impl AuthConfig {
    /// The login delay as a [`Duration`].
    pub const fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

const fn default_login_delay_ms() -> u64 {
    800
}

/// The fixed position distances are measured from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewpointConfig {
    /// Viewpoint latitude in decimal degrees.
    #[serde(default = "default_viewpoint_latitude")]
    pub latitude: f64,

    /// Viewpoint longitude in decimal degrees.
    #[serde(default = "default_viewpoint_longitude")]
    pub longitude: f64,
}

impl ViewpointConfig {
    /// The viewpoint as a [`Coordinates`] pair.
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl Default for ViewpointConfig {
    fn default() -> Self {
        Self {
            latitude: default_viewpoint_latitude(),
            longitude: default_viewpoint_longitude(),
        }
    }
}

const fn default_viewpoint_latitude() -> f64 {
    evently_geo::DEFAULT_VIEWPOINT.latitude
}

const fn default_viewpoint_longitude() -> f64 {
    evently_geo::DEFAULT_VIEWPOINT.longitude
}

/// Event catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Whether the catalog starts with the sample events.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

const fn default_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_client() {
        let config = AppConfig::default();
        assert_eq!(config.storage.root, PathBuf::from(".evently"));
        assert_eq!(config.auth.login_delay_ms, 800);
        assert_eq!(config.auth.login_delay(), Duration::from_millis(800));
        assert!(config.catalog.seed);
        let viewpoint = config.viewpoint.coordinates();
        assert!((viewpoint.latitude - 48.8566).abs() < 1e-9);
        assert!((viewpoint.longitude - 2.3522).abs() < 1e-9);
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config = AppConfig::parse("auth:\n  login_delay_ms: 5\n").ok();
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.auth.login_delay_ms, 5);
            assert!(config.catalog.seed);
        }
    }

    #[test]
    fn full_yaml_is_honored() {
        let yaml = "\
storage:
  root: /tmp/evently-test
auth:
  login_delay_ms: 0
viewpoint:
  latitude: 45.764
  longitude: 4.8357
catalog:
  seed: false
";
        let config = AppConfig::parse(yaml).ok();
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.storage.root, PathBuf::from("/tmp/evently-test"));
            assert_eq!(config.auth.login_delay_ms, 0);
            assert!(!config.catalog.seed);
            assert!((config.viewpoint.latitude - 45.764).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_yaml_is_a_typed_error() {
        let result = AppConfig::parse(": not yaml :");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn storage_root_override() {
        let mut storage = StorageConfig::default();
        storage.override_root(Some("/custom/root"));
        assert_eq!(storage.root, PathBuf::from("/custom/root"));

        // Empty and absent overrides leave the configured value alone.
        let mut storage = StorageConfig::default();
        storage.override_root(Some(""));
        assert_eq!(storage.root, PathBuf::from(".evently"));
        storage.override_root(None);
        assert_eq!(storage.root, PathBuf::from(".evently"));
    }
}
