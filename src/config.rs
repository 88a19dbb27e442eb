//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Key supplied through `WALLET_WATCHER_API_KEY`; never read from file
    #[serde(skip)]
    pub api_key_override: Option<String>,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Origin of the Wallet Watcher backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means requests wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Where the API key is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default = "default_credentials_path")]
    pub path: String,
}

fn default_credentials_path() -> String {
    dirs::config_dir()
        .map(|p| {
            p.join("wallet-watcher")
                .join("credentials.toml")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./wallet_watcher_credentials.toml".to_string())
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: default_credentials_path(),
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
    "warn".to_string()
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

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Files that exist but fail to load are skipped and returned, so the
    /// caller can report them once logging is up.
    pub fn load_default() -> (Self, Vec<ConfigError>) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("wallet-watcher").join("config.toml")),
            Some(PathBuf::from("./wallet-watcher.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First existing path that loads, else environment only
    pub fn load_first(paths: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push(e),
            }
        }

        (Self::from_env(), skipped)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("WALLET_WATCHER_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("WALLET_WATCHER_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = Some(secs);
            }
        }
        if let Some(key) = var("WALLET_WATCHER_API_KEY").filter(|k| !k.is_empty()) {
            self.api_key_override = Some(key);
        }
        if let Some(path) = var("WALLET_WATCHER_CREDENTIALS") {
            self.credentials.path = path;
        }
        if let Some(level) = var("WALLET_WATCHER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WALLET_WATCHER_LOG_FORMAT") {
            self.logging.format = format;
        }
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
    r#"# Wallet Watcher client configuration
#
# Environment variables override these settings:
# - WALLET_WATCHER_API_URL
# - WALLET_WATCHER_TIMEOUT_SECS
# - WALLET_WATCHER_API_KEY (used instead of the stored key)
# - WALLET_WATCHER_CREDENTIALS
# - WALLET_WATCHER_LOG_LEVEL
# - WALLET_WATCHER_LOG_FORMAT

[api]
# Origin of the Wallet Watcher backend
base_url = "http://localhost:5000"

# Request timeout in seconds (leave unset to wait indefinitely)
# request_timeout_secs = 30

[credentials]
# File holding the API key written by `wallet-watcher login`
# path = "~/.config/wallet-watcher/credentials.toml"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert!(config.api.request_timeout().is_none());
        assert_eq!(config.logging.format, "pretty");
        assert!(config.api_key_override.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://watch.example\"\nrequest_timeout_secs = 10\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "https://watch.example");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\n").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\n").unwrap();
        std::fs::write(&good, "[api]\nbase_url = \"https://watch.example\"\n").unwrap();

        let (config, skipped) =
            Config::load_first(&[dir.path().join("missing.toml"), broken.clone(), good]);
        assert_eq!(config.api.base_url, "https://watch.example");
        assert_eq!(skipped.len(), 1);
        assert!(matches!(&skipped[0], ConfigError::Parse { path, .. } if *path == broken));

        let (config, skipped) = Config::load_first(&[broken]);
        assert_eq!(config.logging.level, "warn");
        assert!(skipped[0].to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WALLET_WATCHER_API_URL", "http://10.0.0.2:5000"),
            ("WALLET_WATCHER_TIMEOUT_SECS", "not-a-number"),
            ("WALLET_WATCHER_API_KEY", "env-key"),
            ("WALLET_WATCHER_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");
        assert!(config.api.request_timeout_secs.is_none());
        assert_eq!(config.api_key_override.as_deref(), Some("env-key"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }
}
