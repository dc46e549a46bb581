//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the user's config
//! directory and includes:
//! - Service endpoints for the user directory and the recipe catalog
//! - Page size for the catalog's incremental reveal
//! - Remote operation timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LarderError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the user directory service
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Base URL of the recipe catalog service
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// How many recipes each "reveal more" step shows (default: 6)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Remote operation timeout in seconds (default: 30)
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout: u64,
}

fn default_directory_url() -> String {
    "https://dummyjson.com/users".to_string()
}

fn default_catalog_url() -> String {
    "https://dummyjson.com/recipes".to_string()
}

fn default_page_size() -> usize {
    crate::types::LOAD_INCREMENT
}

fn default_remote_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            catalog_url: default_catalog_url(),
            page_size: default_page_size(),
            remote_timeout: default_remote_timeout(),
        }
    }
}

impl Config {
    /// Get the directory holding config and session files
    pub fn config_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "larder", "larder")
            .ok_or_else(|| LarderError::Config("cannot resolve config directory".to_string()))?;
        Ok(dirs.config_dir().to_path_buf())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return defaults if not found.
    ///
    /// Environment variables `LARDER_DIRECTORY_URL` and `LARDER_CATALOG_URL`
    /// override whatever the file says.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(u) = env::var("LARDER_DIRECTORY_URL")
            && !u.is_empty()
        {
            config.directory_url = u;
        }
        if let Ok(u) = env::var("LARDER_CATALOG_URL")
            && !u.is_empty()
        {
            config.catalog_url = u;
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Remote operation timeout as a `Duration`
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout)
    }

    /// Check that the configured endpoints parse as URLs and the page size
    /// is usable.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.directory_url)
            .map_err(|e| LarderError::Config(format!("invalid directory URL: {}", e)))?;
        Url::parse(&self.catalog_url)
            .map_err(|e| LarderError::Config(format!("invalid catalog URL: {}", e)))?;
        if self.page_size == 0 {
            return Err(LarderError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "directory_url" => Ok(self.directory_url.clone()),
            "catalog_url" => Ok(self.catalog_url.clone()),
            "page_size" => Ok(self.page_size.to_string()),
            "remote_timeout" => Ok(self.remote_timeout.to_string()),
            _ => Err(LarderError::Config(format!("unknown key '{}'", key))),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "directory_url" => self.directory_url = value.to_string(),
            "catalog_url" => self.catalog_url = value.to_string(),
            "page_size" => {
                self.page_size = value
                    .parse()
                    .map_err(|_| LarderError::Config(format!("invalid page size '{}'", value)))?;
            }
            "remote_timeout" => {
                self.remote_timeout = value
                    .parse()
                    .map_err(|_| LarderError::Config(format!("invalid timeout '{}'", value)))?;
            }
            _ => return Err(LarderError::Config(format!("unknown key '{}'", key))),
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.remote_timeout, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.set("catalog_url", "https://recipes.example.com/api").unwrap();
        config.set("page_size", "12").unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.catalog_url, "https://recipes.example.com/api");
        assert_eq!(parsed.page_size, 12);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("catalog_url", "not a url").is_err());
        assert!(config.set("page_size", "zero").is_err());
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("nonsense", "x").is_err());
    }

    #[test]
    fn test_config_get() {
        let config = Config::default();
        assert_eq!(config.get("page_size").unwrap(), "6");
        assert!(config.get("nonsense").is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: Config =
            serde_yaml_ng::from_str("catalog_url: https://example.com/recipes\n").unwrap();
        assert_eq!(parsed.catalog_url, "https://example.com/recipes");
        assert_eq!(parsed.page_size, 6);
        assert_eq!(parsed.directory_url, default_directory_url());
    }
}
