//! TOML configuration for a parley store.
//!
//! ```toml
//! [store]
//! debug = false
//! default_limit = 100
//! max_limit = 1000
//! ```

use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()
    }
}

///
/// StoreConfig
///
/// debug          : print `[debug]` lines for every store mutation
/// default_limit  : page size when a listing does not name one
/// max_limit      : upper clamp for any requested page size
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub debug: bool,
    pub default_limit: u32,
    pub max_limit: u32,
}

impl StoreConfig {
    pub const DEFAULT_LIMIT: u32 = 100;
    pub const MAX_LIMIT: u32 = 1000;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::Invalid(
                "store.max_limit must be greater than zero".to_string(),
            ));
        }
        if self.default_limit > self.max_limit {
            return Err(ConfigError::Invalid(format!(
                "store.default_limit ({}) exceeds store.max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }

        Ok(())
    }

    /// Page size for a request: the default when none is given, clamped
    /// to `max_limit`.
    #[must_use]
    pub fn clamp_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::MAX_LIMIT,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.store.default_limit, 100);
        assert_eq!(config.store.max_limit, 1000);
        assert!(!config.store.debug);
    }

    #[test]
    fn partial_store_table_keeps_other_defaults() {
        let config = Config::from_toml_str("[store]\ndebug = true\n").unwrap();

        assert!(config.store.debug);
        assert_eq!(config.store.max_limit, StoreConfig::MAX_LIMIT);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[store]\ncache = 1\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_limit_cannot_exceed_max() {
        let err =
            Config::from_toml_str("[store]\ndefault_limit = 50\nmax_limit = 10\n").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn limit_is_clamped() {
        let store = StoreConfig::default();

        assert_eq!(store.clamp_limit(None), 100);
        assert_eq!(store.clamp_limit(Some(5)), 5);
        assert_eq!(store.clamp_limit(Some(5000)), 1000);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_path("/nonexistent/parley.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn reads_from_path() {
        let path = std::env::temp_dir().join("parley-config-reads-from-path.toml");
        std::fs::write(&path, "[store]\ndefault_limit = 10\nmax_limit = 20\n").unwrap();

        let config = Config::from_path(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.store.max_limit, 20);
    }
}
