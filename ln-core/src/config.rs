//! Client configuration management.
//!
//! Handles loading, saving, and accessing the client configuration: the API
//! key, the service base URL, optional transport settings and logging.
//! Configuration is persisted as TOML on disk and can be overridden from the
//! environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{LnError, LnResult};
use crate::platform::Platform;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for one `ApiClient`. Immutable once a client is built from it.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer credential sent with every authenticated request.
    #[serde(default)]
    pub api_key: String,

    /// Service root, e.g. "https://images.labnocturne.com".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in milliseconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Connect timeout in milliseconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// `User-Agent` header value.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_ms: None,
            connect_timeout_ms: None,
            user_agent: constants::default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ClientConfig {
    /// Config for `api_key` against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Replace the base URL (normalized).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = AppConfig::normalize_base_url(base_url);
        self
    }

    /// Set the whole-request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Check that the config can build a client.
    pub fn validate(&self) -> LnResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(LnError::MissingConfig("api_key".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(LnError::MissingConfig("base_url".into()));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load from the default path, falling back to defaults when the file
    /// does not exist. Environment overrides are applied either way.
    pub fn load_default() -> LnResult<Self> {
        let mut config = Self::load_from_path_or_default(&Self::default_config_path()?)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path`, or return defaults when no file exists there.
    pub fn load_from_path_or_default(path: &Path) -> LnResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> LnResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&contents)?;
        config.client.base_url = Self::normalize_base_url(&config.client.base_url);
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> LnResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LnError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> LnResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> LnResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Apply `LABNOCTURNE_API_KEY` / `LABNOCTURNE_BASE_URL` if set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(constants::ENV_API_KEY).ok(),
            std::env::var(constants::ENV_BASE_URL).ok(),
        );
    }

    fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.client.api_key = key.trim().to_string();
        }
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.client.base_url = Self::normalize_base_url(&url);
        }
    }

    /// Sanitize and normalize a base URL.
    ///
    /// Strips whitespace and quotes, defaults the scheme to https and drops
    /// trailing slashes so endpoint paths can be appended directly.
    pub fn normalize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
