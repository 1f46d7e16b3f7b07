// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Translator Configuration
//!
//! Selects the target dialect and how term names are rendered. The
//! configuration can be built in code or loaded from a JSON or YAML file.
//!
//! ## Example
//!
//! ```json
//! {
//!   "dialect": "postgres",
//!   "quoteNames": true
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use sqlterm_ir::Dialect;
use tracing::debug;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration of a [`Translator`](crate::Translator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Target dialect. Accepts any name understood by `Dialect::from_str`.
    #[serde(deserialize_with = "deserialize_dialect")]
    pub dialect: Dialect,

    /// Render term names as delimited identifiers
    pub quote_names: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Default,
            quote_names: false,
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration targeting `dialect`
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    /// Builder method: delimit term names
    pub fn with_quoted_names(mut self, quote_names: bool) -> Self {
        self.quote_names = quote_names;
        self
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a configuration file
    ///
    /// The format is chosen from the extension: `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&contents)?;
        debug!("Loaded translator config from {}: {:?}", path.display(), config);

        Ok(config)
    }
}

fn deserialize_dialect<'de, D>(deserializer: D) -> Result<Dialect, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON configuration
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML configuration
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format
    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranslatorConfig::default();
        assert_eq!(config.dialect, Dialect::Default);
        assert!(!config.quote_names);
    }

    #[test]
    fn test_from_json_accepts_aliases() {
        let config = TranslatorConfig::from_json_str(r#"{"dialect": "pg", "quoteNames": true}"#)
            .unwrap();
        assert_eq!(config.dialect, Dialect::PostgreSQL);
        assert!(config.quote_names);
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let config = TranslatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_from_json_unknown_dialect() {
        let err = TranslatorConfig::from_json_str(r#"{"dialect": "db9"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("Unknown SQL dialect"));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = TranslatorConfig::from_json_str(r#"{"dialekt": "pg"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("unknown field `dialekt`"));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = TranslatorConfig::from_yaml_str("dialect: mysql
quote_names: true
")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml() {
        let config = TranslatorConfig::from_yaml_str("dialect: hsqldb\n").unwrap();
        assert_eq!(config.dialect, Dialect::HSQLDB);
        assert!(!config.quote_names);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = TranslatorConfig::from_path("translator.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
