//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty means permissive.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the dashboard's input snapshot comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON event list (`{"items": [...]}`). Unset means an empty agenda.
    pub events_path: Option<PathBuf>,

    /// JSON weather reading. Unset means no weather card.
    pub weather_path: Option<PathBuf>,

    #[serde(default)]
    pub weather_format: WeatherFormat,
}

/// Shape of the weather file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherFormat {
    /// A `WeatherReading` as JSON
    #[default]
    Reading,
    /// An OpenWeatherMap current-weather response
    OpenWeather,
}

impl FromStr for WeatherFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reading" => Ok(WeatherFormat::Reading),
            "openweather" => Ok(WeatherFormat::OpenWeather),
            other => Err(ConfigError::Invalid {
                key: "weather_format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid {
                key: "logging.format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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

    /// Config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    ///
    /// Reports through `tracing`, so call it with a subscriber in place
    /// (see `logging::bootstrap_subscriber`).
    pub fn load_default() -> Self {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing candidate that parses
    ///
    /// Candidates that exist but fail to load are logged and skipped. Falls
    /// back to defaults with environment overrides.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `DASHBOARD_*` overrides read through `lookup`
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("DASHBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid DASHBOARD_API_PORT: {}", port),
            }
        }

        // Data overrides
        if let Some(path) = lookup("DASHBOARD_EVENTS_PATH") {
            self.data.events_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("DASHBOARD_WEATHER_PATH") {
            self.data.weather_path = Some(PathBuf::from(path));
        }
        if let Some(format) = lookup("DASHBOARD_WEATHER_FORMAT") {
            match format.parse() {
                Ok(f) => self.data.weather_format = f,
                Err(e) => tracing::warn!("Ignoring DASHBOARD_WEATHER_FORMAT: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!("Ignoring DASHBOARD_LOG_FORMAT: {}", e),
            }
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

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_API_HOST
# - DASHBOARD_API_PORT
# - DASHBOARD_EVENTS_PATH
# - DASHBOARD_WEATHER_PATH
# - DASHBOARD_WEATHER_FORMAT
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[api]
# Server host
host = "127.0.0.1"

# Server port
port = 8000

# Allowed CORS origins (empty = permissive)
cors_origins = []

[data]
# Calendar events as JSON: {"items": [{"id", "summary", "start": {"dateTime"}}]}
# events_path = "./events.json"

# Current weather as JSON
# weather_path = "./weather.json"

# Weather file shape: reading ({"temp", "humidity", "at", ...})
# or openweather (OpenWeatherMap current-weather response, metric units)
weather_format = "reading"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
