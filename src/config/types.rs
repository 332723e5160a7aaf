use serde::Deserialize;

use crate::ui::Theme;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// UI theme: "light" or "dark"
    #[serde(default)]
    pub theme: Theme,

    /// Identity service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Realtime database settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity service configuration (sign-in, sign-up, sign-out)
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the identity service (e.g., "https://project.supabase.co")
    #[serde(default)]
    pub auth_url: String,

    /// Public API key sent with every auth request
    #[serde(default)]
    pub anon_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            auth_url: String::new(),
            anon_key: String::new(),
        }
    }
}

/// Realtime database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the realtime database
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Path of the status document holding the counters
    #[serde(default = "default_status_path")]
    pub status_path: String,
}

impl RemoteConfig {
    /// Full URL of the streaming endpoint for the status document
    pub fn stream_url(&self) -> String {
        format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            self.status_path.trim_matches('/')
        )
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            status_path: default_status_path(),
        }
    }
}

fn default_database_url() -> String {
    "https://ai-track-car-prod.firebaseio.com".to_string()
}

fn default_status_path() -> String {
    "status".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// Log file path
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    "/tmp/trackcar.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url_joins_path() {
        let remote = RemoteConfig {
            database_url: "https://db.example.com/".to_string(),
            status_path: "/status/".to_string(),
        };
        assert_eq!(remote.stream_url(), "https://db.example.com/status.json");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.remote.status_path, "status");
    }
}
