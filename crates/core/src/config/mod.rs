//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (GATHER_*)
//! 2. TOML config file (if GATHER_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (GATHER_*)
/// 2. TOML config file (if GATHER_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search API key.
    ///
    /// Set via GATHER_API_KEY environment variable.
    /// Required only when a live search call is made.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Custom search engine identifier.
    ///
    /// Set via GATHER_ENGINE_ID environment variable.
    #[serde(default)]
    pub engine_id: Option<String>,

    /// Whether the disk cache is consulted and written at all.
    ///
    /// Set via GATHER_CACHE_ENABLED environment variable. When false every
    /// search and page fetch goes live and no cache files are touched.
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// Root directory for the disk cache.
    ///
    /// Set via GATHER_CACHE_DIR environment variable. Holds two
    /// subdirectories, `searches/` and `pages/`.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Base URL of the extraction service (a Tika server).
    ///
    /// Set via GATHER_TIKA_URL environment variable.
    #[serde(default = "default_tika_url")]
    pub tika_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via GATHER_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum bytes to fetch per page.
    ///
    /// Set via GATHER_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via GATHER_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Discard non-ASCII characters when normalizing extracted text.
    ///
    /// Set via GATHER_ASCII_ONLY environment variable. Off by default; the
    /// lossy coercion exists only for compatibility with caches written by
    /// older tooling.
    #[serde(default)]
    pub ascii_only: bool,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("./gather-cache")
}

fn default_tika_url() -> String {
    "http://localhost:9998".into()
}

fn default_user_agent() -> String {
    "gather/0.1".into()
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            cache_enabled: true,
            cache_dir: default_cache_dir(),
            tika_url: default_tika_url(),
            user_agent: default_user_agent(),
            max_bytes: default_max_bytes(),
            timeout_ms: default_timeout_ms(),
            ascii_only: false,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `GATHER_`
    /// 2. TOML file from `GATHER_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("GATHER_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("GATHER_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check if the search API key is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is not set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "api_key".into(),
            hint: "Set GATHER_API_KEY environment variable".into(),
        })
    }

    /// Check if the search engine id is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the engine id is not set.
    pub fn require_engine_id(&self) -> Result<&str, ConfigError> {
        self.engine_id.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "engine_id".into(),
            hint: "Set GATHER_ENGINE_ID environment variable".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from("./gather-cache"));
        assert_eq!(config.tika_url, "http://localhost:9998");
        assert_eq!(config.user_agent, "gather/0.1");
        assert_eq!(config.max_bytes, 5_242_880);
        assert_eq!(config.timeout_ms, 20_000);
        assert!(config.cache_enabled);
        assert!(!config.ascii_only);
        assert!(config.api_key.is_none());
        assert!(config.engine_id.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = AppConfig::default();
        let result = config.require_api_key();
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_api_key_present() {
        let config = AppConfig { api_key: Some("test-key".into()), ..Default::default() };
        let result = config.require_api_key();
        assert_eq!(result.unwrap(), "test-key");
    }

    #[test]
    fn test_require_engine_id_missing() {
        let config = AppConfig::default();
        let result = config.require_engine_id();
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }
}
