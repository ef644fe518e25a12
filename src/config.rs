//! Application configuration.
//!
//! Loaded from TOML: an explicit `--config` path, else
//! `skyline-catalog.toml` in the working directory, else defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skyline-catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON record set replacing the built-in projects
    pub catalog_path: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Directory for exported result sets
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".to_string(),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`]
    /// when no path is given and that file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The record source this configuration selects
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(JsonFileCatalog::new(path)),
            None => Box::new(BuiltinCatalog::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = Config::from_toml("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "catalog_path = \"projects.json\"").unwrap();
        writeln!(file, "export_dir = \"out\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("projects.json")));
        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.catalog_source().source_name(), "json-file");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = Config::from_toml("log_level = ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/no/such/skyline.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_source_by_default() {
        assert_eq!(Config::default().catalog_source().source_name(), "builtin");
    }
}
