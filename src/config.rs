//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `SALEAF_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::listing::client::CUSTOMERS_PER_PAGE;
use crate::pagination::PageSize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Admin API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://saleafapi-production.up.railway.app".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Credential settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Where `login` stores the bearer token; defaults to the data directory
    pub token_file: Option<String>,

    /// Token supplied from the environment; never written to disk
    #[serde(skip)]
    pub token: Option<String>,
}

/// List view defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub page_size: PageSize,

    #[serde(default = "default_customers_per_page")]
    pub customers_per_page: usize,
}

fn default_customers_per_page() -> usize {
    CUSTOMERS_PER_PAGE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            customers_per_page: default_customers_per_page(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("saleaf-admin").join("config.toml")),
            Some(PathBuf::from("/etc/saleaf-admin/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `SALEAF_*` overrides read through `var`
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("SALEAF_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("SALEAF_REQUEST_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) if secs > 0 => self.api.request_timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid SALEAF_REQUEST_TIMEOUT {:?}", timeout),
            }
        }
        if let Some(token) = var("SALEAF_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.auth.token = Some(token);
        }
        if let Some(level) = var("SALEAF_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SALEAF_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Token file location, explicit or default
    pub fn token_file(&self) -> PathBuf {
        match &self.auth.token_file {
            Some(path) => PathBuf::from(path),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("saleaf-admin")
                .join("token"),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if self.api.request_timeout_secs == 0 {
            return Err("api.request_timeout_secs must be at least 1".to_string());
        }
        if self.listing.customers_per_page == 0 {
            return Err("listing.customers_per_page must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SALEAF Admin Configuration
#
# Environment variables override these settings:
# - SALEAF_API_URL
# - SALEAF_TOKEN
# - SALEAF_REQUEST_TIMEOUT
# - SALEAF_LOG_LEVEL
# - SALEAF_LOG_FORMAT

[api]
# Admin API base URL
base_url = "https://saleafapi-production.up.railway.app"

# Request timeout in seconds
request_timeout_secs = 30

[auth]
# Where `saleaf-admin login` keeps the bearer token
# token_file = "~/.local/share/saleaf-admin/token"

[listing]
# Default rows per page for registrations and uploads: 5, 10, 20 or 50
page_size = 10

# Customers shown per page
customers_per_page = 6

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.listing.page_size, PageSize::Ten);
        assert_eq!(config.listing.customers_per_page, 6);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:5000\"\n[listing]\npage_size = 20"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.listing.page_size, PageSize::Twenty);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unsupported_page_size_rejected() {
        let err = Config::parse("[listing]\npage_size = 15").unwrap_err();
        assert!(err.contains("page size"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::parse("[api]\nrequest_timeout_secs = 0").unwrap_err();
        assert!(err.contains("request_timeout_secs"));

        let mut config = Config::default();
        config.apply_overrides(|key| (key == "SALEAF_REQUEST_TIMEOUT").then(|| "0".to_string()));
        assert_eq!(config.api.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SALEAF_API_URL", "http://api.test"),
            ("SALEAF_TOKEN", "env-token"),
            ("SALEAF_REQUEST_TIMEOUT", "not-a-number"),
            ("SALEAF_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://api.test");
        assert_eq!(config.auth.token.as_deref(), Some("env-token"));
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_explicit_token_file() {
        let config = Config::parse("[auth]\ntoken_file = \"/tmp/saleaf-token\"").unwrap();
        assert_eq!(config.token_file(), PathBuf::from("/tmp/saleaf-token"));
    }
}
