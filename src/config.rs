//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, the development bootstrap addresses, logging and default
//! paths. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::i18n::Locale;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches (nginx, CDNs). All values in seconds.
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html
// - RFC 5861 (stale-* extensions): https://httpwg.org/specs/rfc5861.html

/// Marketing pages - copy only changes on deploy
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 300;
pub const HTTP_CACHE_PAGE_SWR: u32 = 60;

/// Static assets (CSS, images) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Stale-if-error duration - serve stale pages during backend failures (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_PAGE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_PAGE_MAX_AGE,
    HTTP_CACHE_PAGE_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

/// Status responses carry a fresh timestamp and must never be cached
pub const CACHE_CONTROL_STATUS: &str = "no-store";

// =============================================================================
// Development Bootstraps
// =============================================================================

/// Host the development listeners bind to
pub const DEV_HOST: &str = "127.0.0.1";

/// Port for the development site server
pub const DEV_SITE_PORT: u16 = 3007;

/// Port for the diagnostic echo server
pub const DEV_DIAGNOSTIC_PORT: u16 = 3008;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default template directory; templates are loaded with `<dir>/**/*`
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default static asset directory
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default site name shown in page titles
pub const DEFAULT_SITE_NAME: &str = "Sapunoa";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "sapunoa=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Configuration used by the development bootstraps, which read no file.
    pub fn development(port: u16) -> Self {
        Self {
            http: HttpServerConfig {
                host: DEV_HOST.to_string(),
                port,
            },
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Site presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site title shown in header and page titles
    #[serde(default = "SiteConfig::default_name")]
    pub name: String,
    /// Locale code used for `/`
    #[serde(default = "SiteConfig::default_locale")]
    pub default_locale: String,
    #[serde(default = "SiteConfig::default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "SiteConfig::default_static_dir")]
    pub static_dir: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "SiteConfig::default_version")]
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            default_locale: Self::default_locale(),
            templates_dir: Self::default_templates_dir(),
            static_dir: Self::default_static_dir(),
            version: Self::default_version(),
        }
    }
}

impl SiteConfig {
    fn default_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_locale() -> String {
        Locale::default().code().to_string()
    }

    fn default_templates_dir() -> String {
        DEFAULT_TEMPLATES_DIR.to_string()
    }

    fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Glob pattern Tera uses to discover templates
    pub fn template_glob(&self) -> String {
        format!("{}/**/*", self.templates_dir.trim_end_matches('/'))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        if Locale::from_code(&config.site.default_locale).is_none() {
            return Err(ConfigError::Validation(format!(
                "Unknown site.default_locale '{}'; expected one of: {}",
                config.site.default_locale,
                Locale::ALL
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(config)
    }

    /// The locale served at `/`. Validated at load time.
    pub fn default_locale(&self) -> Locale {
        Locale::from_code(&self.site.default_locale).unwrap_or_default()
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
