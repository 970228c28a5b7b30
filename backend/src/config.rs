//! Service configuration.
//!
//! Settings are read from an optional `ticket-analytics.toml` file and then
//! overridden by environment variables. The resulting values are passed
//! explicitly to the HTTP layer at startup; nothing here is global.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ticket-analytics.toml";

/// Longest forecast the projector will produce.
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// How the daily ticket volume is projected forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStrategy {
    /// Least-squares line over the whole daily series.
    #[default]
    LinearTrend,
    /// Constant mean of the days inside the recency window.
    FlatMean,
}

impl ProjectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionStrategy::LinearTrend => "linear_trend",
            ProjectionStrategy::FlatMean => "flat_mean",
        }
    }
}

impl fmt::Display for ProjectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear_trend" | "linear" => Ok(ProjectionStrategy::LinearTrend),
            "flat_mean" | "mean" => Ok(ProjectionStrategy::FlatMean),
            other => Err(format!(
                "unknown projection strategy '{}'. Use linear_trend or flat_mean.",
                other
            )),
        }
    }
}

/// Trend projector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default)]
    pub strategy: ProjectionStrategy,
    /// Number of future days to forecast
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Trailing span, relative to request time, used by the flat-mean strategy
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: u32,
    /// The linear strategy needs strictly more distinct days than this
    #[serde(default = "default_min_history_days")]
    pub min_history_days: usize,
}

fn default_horizon_days() -> u32 {
    7
}

fn default_recency_window_days() -> u32 {
    7
}

fn default_min_history_days() -> usize {
    7
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            strategy: ProjectionStrategy::default(),
            horizon_days: default_horizon_days(),
            recency_window_days: default_recency_window_days(),
            min_history_days: default_min_history_days(),
        }
    }
}

/// Analytics engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load settings from the first config file found in the standard locations.
    ///
    /// Searches for `ticket-analytics.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        match search_paths.iter().find(|path| path.exists()) {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Default-location file plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::from_default_location()?;
        settings.apply_env_overrides()?;
        Ok(settings)
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `HOST`: listener host
    /// - `PORT`: listener port
    /// - `PROJECTION_STRATEGY`: `linear_trend` | `flat_mean`
    /// - `PROJECTION_HORIZON_DAYS`: number of forecast days
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Ok(strategy) = env::var("PROJECTION_STRATEGY") {
            self.analytics.projection.strategy = parse_env("PROJECTION_STRATEGY", &strategy)?;
        }
        if let Ok(horizon) = env::var("PROJECTION_HORIZON_DAYS") {
            self.analytics.projection.horizon_days = parse_env("PROJECTION_HORIZON_DAYS", &horizon)?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let projection = &self.analytics.projection;
        if !(1..=MAX_HORIZON_DAYS).contains(&projection.horizon_days) {
            return Err(ConfigError::InvalidValue {
                key: "projection.horizon_days".to_string(),
                message: format!("must be between 1 and {}", MAX_HORIZON_DAYS),
            });
        }
        if projection.recency_window_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "projection.recency_window_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        // A line needs two points
        if projection.min_history_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "projection.min_history_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
