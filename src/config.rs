//! Configuration loading and constants.
//!
//! Configuration is resolved once at startup: built-in defaults, then an optional
//! TOML file, then environment variables (`PORT`, `HOST`, `DEBUG`, `APP_NAME`, ...).
//! The resulting `AppConfig` is immutable for the lifetime of the process and is
//! shared with handlers through `AppState`.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Every route returns time-dependent content, and probe results must never be
/// served from an intermediate cache.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Service Identity
// =============================================================================

/// Version reported by the health endpoint
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status reported by the health endpoint
pub const HEALTHY_STATUS: &str = "healthy";

/// Timestamp format used in responses and the home page
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

// =============================================================================
// Defaults
// =============================================================================

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default application name shown on the home page and in health responses
pub const DEFAULT_APP_NAME: &str = "ping-pong";

/// Default template directory
pub const DEFAULT_TEMPLATE_DIR: &str = "html";

/// Glob pattern for template files, relative to the template directory
pub const TEMPLATE_GLOB: &str = "**/*";

/// Name of the home page template
pub const HOME_TEMPLATE: &str = "index.html";

/// Tracing target of this crate
pub const LOG_TARGET: &str = "ping_pong";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Log filter used when debug mode is enabled
pub const DEBUG_LOG_FILTER: &str = formatcp!("{}=debug,tower_http=debug", LOG_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_TEMPLATE_DIR: &str = "TEMPLATE_DIR";
pub const ENV_ENABLE_ISEVEN: &str = "ENABLE_ISEVEN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Service identity and feature switches
    #[serde(default)]
    pub service: ServiceConfig,
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
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// Socket address string in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Name reported on the home page and by the health endpoint
    #[serde(default = "ServiceConfig::default_name")]
    pub name: String,
    /// Debug mode raises the default log verbosity
    #[serde(default)]
    pub debug: bool,
    /// Directory containing `index.html`
    #[serde(default = "ServiceConfig::default_template_dir")]
    pub template_dir: String,
    /// Register the `/iseven` route
    #[serde(default)]
    pub enable_iseven: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            debug: false,
            template_dir: Self::default_template_dir(),
            enable_iseven: false,
        }
    }
}

impl ServiceConfig {
    fn default_name() -> String {
        DEFAULT_APP_NAME.to_string()
    }

    fn default_template_dir() -> String {
        DEFAULT_TEMPLATE_DIR.to_string()
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

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply overrides from
    /// the process environment.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML configuration file. Missing sections and keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment-style overrides from `lookup` on top of this config.
    ///
    /// `lookup` receives a variable name and returns its value if set, which lets
    /// tests supply overrides without touching the process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.http.port = port.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a port number, got {:?}", ENV_PORT, port))
            })?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.http.host = host;
        }
        if let Some(debug) = lookup(ENV_DEBUG) {
            self.service.debug = parse_flag(&debug);
        }
        if let Some(name) = lookup(ENV_APP_NAME) {
            self.service.name = name;
        }
        if let Some(dir) = lookup(ENV_TEMPLATE_DIR) {
            self.service.template_dir = dir;
        }
        if let Some(enabled) = lookup(ENV_ENABLE_ISEVEN) {
            self.service.enable_iseven = parse_flag(&enabled);
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format;
        }

        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} must not be empty", ENV_HOST)));
        }

        Ok(self)
    }

    /// Log filter to use when neither `--log-level` nor RUST_LOG is given
    pub fn default_log_filter(&self) -> &'static str {
        if self.service.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Only a case-insensitive "true" enables a flag
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert!(!config.service.debug);
        assert_eq!(config.service.name, "ping-pong");
        assert!(!config.service.enable_iseven);
        assert_eq!(config.http.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup_from(&[
                ("PORT", "8080"),
                ("HOST", "127.0.0.1"),
                ("APP_NAME", "demo"),
                ("ENABLE_ISEVEN", "True"),
            ]))
            .unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.service.name, "demo");
        assert!(config.service.enable_iseven);
    }

    #[test]
    fn test_debug_flag_parsing() {
        let on = AppConfig::default()
            .with_overrides(lookup_from(&[("DEBUG", "TRUE")]))
            .unwrap();
        assert!(on.service.debug);
        assert_eq!(on.default_log_filter(), "ping_pong=debug,tower_http=debug");

        let off = AppConfig::default()
            .with_overrides(lookup_from(&[("DEBUG", "yes")]))
            .unwrap();
        assert!(!off.service.debug);
        assert_eq!(off.default_log_filter(), "ping_pong=info,tower_http=info");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = AppConfig::default()
            .with_overrides(lookup_from(&[("PORT", "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = AppConfig::default()
            .with_overrides(lookup_from(&[("PORT", "70000")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = AppConfig::default()
            .with_overrides(lookup_from(&[("HOST", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 9000\n\n[service]\nname = \"from-file\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.service.name, "from-file");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 9000").unwrap();

        let config = AppConfig::from_file(file.path())
            .unwrap()
            .with_overrides(lookup_from(&[("PORT", "9100")]))
            .unwrap();
        assert_eq!(config.http.port, 9100);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = ").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file("/nonexistent/ping-pong.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_log_format() {
        let config = AppConfig::default()
            .with_overrides(lookup_from(&[("LOG_FORMAT", "JSON")]))
            .unwrap();
        assert!(config.logging.is_json());
        assert!(!LoggingConfig::default().is_json());
    }
}
