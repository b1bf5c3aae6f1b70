//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the two resource URLs the loader tracks, whether the durable cache is
//! used, and where it lives on disk.
//!
//! Configuration is stored at `~/.config/iconcache/config.json`; each
//! value can be overridden with an `ICONCACHE_*` environment variable.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "iconcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the icon table document
    pub icons_url: Option<String>,
    /// URL of the category table document
    pub categories_url: Option<String>,
    /// Use the durable on-disk cache. When false the loader fetches
    /// directly and relies on transport-level caching.
    #[serde(default = "default_durable_cache")]
    pub durable_cache: bool,
    /// Override for the cache root; defaults to the platform cache dir
    pub cache_dir: Option<PathBuf>,
}

fn default_durable_cache() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icons_url: None,
            categories_url: None,
            durable_cache: true,
            cache_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("ICONCACHE_ICONS_URL") {
            self.icons_url = Some(url);
        }
        if let Ok(url) = std::env::var("ICONCACHE_CATEGORIES_URL") {
            self.categories_url = Some(url);
        }
        if let Ok(dir) = std::env::var("ICONCACHE_CACHE_DIR") {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        if let Ok(value) = std::env::var("ICONCACHE_DURABLE_CACHE") {
            self.durable_cache = value != "0" && !value.eq_ignore_ascii_case("false");
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Root directory the cache regions live under
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.durable_cache);
        assert!(config.icons_url.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{"icons_url": "https://example.org/icons.json", "categories_url": null, "cache_dir": null}"#,
        )
        .expect("Failed to parse config");
        assert_eq!(config.icons_url.as_deref(), Some("https://example.org/icons.json"));
        // durable_cache falls back to its default when omitted
        assert!(config.durable_cache);
    }

    #[test]
    fn test_explicit_cache_dir_wins() {
        let config = Config {
            cache_dir: Some(PathBuf::from("/tmp/iconcache-test")),
            ..Config::default()
        };
        assert_eq!(config.cache_dir().unwrap(), PathBuf::from("/tmp/iconcache-test"));
    }
}
