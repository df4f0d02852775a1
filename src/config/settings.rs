//! Configuration settings structures for newsclip
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "newsclip".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/newsclip.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_cookie_name() -> String {
    "newsclip_session".to_string()
}

fn default_session_ttl_hours() -> i64 {
    12
}

fn default_remember_ttl_hours() -> i64 {
    24 * 14 // two weeks
}

fn default_news_api_base_url() -> String {
    "https://newsapi.org/v2/top-headlines".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL cannot be empty",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Connection pool must allow at least one connection",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "min_connections cannot exceed max_connections",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Session Configuration
// ============================================================================

/// Server-side login session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in hours for a plain login
    #[serde(default = "default_session_ttl_hours")]
    pub ttl_hours: i64,

    /// Extended session lifetime in hours when "remember me" is checked
    #[serde(default = "default_remember_ttl_hours")]
    pub remember_ttl_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_hours: default_session_ttl_hours(),
            remember_ttl_hours: default_remember_ttl_hours(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::validation(
                "session.cookie_name",
                "Session cookie name cannot be empty",
            ));
        }
        if self.ttl_hours <= 0 {
            return Err(ConfigError::validation(
                "session.ttl_hours",
                "Session lifetime must be positive",
            ));
        }
        if self.remember_ttl_hours < self.ttl_hours {
            return Err(ConfigError::validation(
                "session.remember_ttl_hours",
                "Remember-me lifetime should not be shorter than the plain session lifetime",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// News API Configuration
// ============================================================================

/// External headline API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsApiConfig {
    /// Base endpoint for keyword searches
    #[serde(default = "default_news_api_base_url")]
    pub base_url: String,

    /// API key credential, sent as the `apiKey` query parameter.
    /// Use the NEWSCLIP__NEWS_API__API_KEY environment variable rather
    /// than committing this to a config file.
    #[serde(default)]
    pub api_key: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_news_api_base_url(),
            api_key: String::new(),
        }
    }
}

impl NewsApiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "news_api.base_url",
                "News API base URL cannot be empty",
            ));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::validation(
                "news_api.api_key",
                "News API key cannot be empty",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to an existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error" or an
    /// env-filter directive string
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Converts the serde-friendly settings into the logger module's config.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = match self.file.format.to_lowercase().as_str() {
            "full" => LogFormat::Full,
            "compact" => LogFormat::Compact,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::validation(
                    "logger.file.format".to_string(),
                    format!("Unknown log format '{}'", other),
                ));
            }
        };

        Ok(LoggerConfig {
            level: self.level,
            console: ConsoleConfig {
                enabled: self.console.enabled,
                colored: self.console.colored,
            },
            file: FileConfig {
                enabled: self.file.enabled,
                path: self.file.path,
                append: self.file.append,
                format,
            },
        })
    }
}

// ============================================================================
// Top-level Settings
// ============================================================================

/// Complete application settings, deserialized from layered TOML files
/// plus NEWSCLIP__* environment variable overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub news_api: NewsApiConfig,
}

impl Settings {
    /// Validates every section of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.session.validate()?;
        self.news_api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/newsclip_test".to_string();
        settings.news_api.api_key = "test-key".to_string();
        settings
    }

    #[test]
    fn default_settings_fail_validation_without_database_url() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn session_lifetime_must_be_positive() {
        let mut settings = valid_settings();
        settings.session.ttl_hours = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn remember_lifetime_cannot_undercut_plain_lifetime() {
        let mut settings = valid_settings();
        settings.session.remember_ttl_hours = settings.session.ttl_hours - 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn logger_settings_reject_unknown_format() {
        let mut logger = LoggerSettings::default();
        logger.file.format = "xml".to_string();
        assert!(logger.into_logger_config().is_err());
    }

    #[test]
    fn settings_deserialize_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://localhost/newsclip"

            [session]
            ttl_hours = 6

            [news_api]
            api_key = "abc123"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.session.ttl_hours, 6);
        assert!(settings.validate().is_ok());
    }
}
