//! Configuration loading and constants.
//!
//! The service runs with built-in defaults (`0.0.0.0:3000`, version `1.0.0`,
//! health check enabled). An optional TOML file can override any section, and the
//! build label is taken from the `BUILD_NUMBER` environment variable at startup.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting page - content only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Health responses must always reflect the live process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Version label shown on the greeting page
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Build label used when `BUILD_NUMBER` is unset
pub const DEFAULT_BUILD_LABEL: &str = "local";

/// Environment variable carrying the CI build identifier
pub const BUILD_NUMBER_ENV: &str = "BUILD_NUMBER";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pipeline_greeter=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Page content and route toggles
    #[serde(default)]
    pub app: PageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    /// Version label rendered on the greeting page ("1.0.0" or the short "1.0")
    #[serde(default = "PageConfig::default_version")]
    pub version: String,
    /// Build identifier. When absent from the file it is resolved from `BUILD_NUMBER`.
    #[serde(default)]
    pub build_label: Option<String>,
    /// Serve `GET /health`
    #[serde(default = "PageConfig::default_health_check")]
    pub health_check: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            build_label: None,
            health_check: Self::default_health_check(),
        }
    }
}

impl PageConfig {
    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }

    fn default_health_check() -> bool {
        true
    }

    /// The build label to render, falling back to `local`.
    pub fn build_label(&self) -> &str {
        self.build_label.as_deref().unwrap_or(DEFAULT_BUILD_LABEL)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Map a raw `BUILD_NUMBER` value to a build label. Unset or empty means `local`;
/// any other value, whitespace included, is kept as-is.
pub fn resolve_build_label(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_BUILD_LABEL.to_string(),
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file.
    ///
    /// Without a path the built-in defaults are used. Missing sections and fields
    /// in the file also fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Fill in the build label from `BUILD_NUMBER` unless the file pinned one.
    pub fn with_build_label_from_env(self) -> Self {
        self.with_build_label(std::env::var(BUILD_NUMBER_ENV).ok())
    }

    pub fn with_build_label(mut self, raw: Option<String>) -> Self {
        if self.app.build_label.is_none() {
            self.app.build_label = Some(resolve_build_label(raw));
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be a non-zero port number".to_string(),
            ));
        }
        if self.app.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "app.version must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
