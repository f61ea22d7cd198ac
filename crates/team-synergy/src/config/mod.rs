use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::synergy::domain::{ProjectType, SizeCategory};
use crate::synergy::scoring::DEFAULT_HISTORICAL_SUCCESS;
use crate::synergy::validation::{validate_historical_prior, validate_top_n};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Defaults applied when a scoring request leaves an option out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub default_project: ProjectType,
    pub default_size: SizeCategory,
    pub historical_prior: f64,
    pub default_top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_project: ProjectType::Balanced,
            default_size: SizeCategory::Medium,
            historical_prior: DEFAULT_HISTORICAL_SUCCESS,
            default_top_n: 5,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_project = env::var("SYNERGY_DEFAULT_PROJECT")
            .map(|label| ProjectType::from_label(&label))
            .unwrap_or(defaults.default_project);

        let default_size = match env::var("SYNERGY_DEFAULT_SIZE") {
            Ok(label) => SizeCategory::parse_label(&label)
                .ok_or(ConfigError::InvalidSizeCategory(label))?,
            Err(_) => defaults.default_size,
        };

        let historical_prior = match env::var("SYNERGY_HISTORICAL_PRIOR") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|prior| validate_historical_prior(prior).ok())
                .ok_or(ConfigError::InvalidHistoricalPrior(raw))?,
            Err(_) => defaults.historical_prior,
        };

        let default_top_n = match env::var("SYNERGY_DEFAULT_TOP_N") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|top_n| validate_top_n(top_n).ok())
                .ok_or(ConfigError::InvalidTopN(raw))?,
            Err(_) => defaults.default_top_n,
        };

        Ok(Self {
            default_project,
            default_size,
            historical_prior,
            default_top_n,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSizeCategory(String),
    InvalidHistoricalPrior(String),
    InvalidTopN(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSizeCategory(value) => write!(
                f,
                "SYNERGY_DEFAULT_SIZE '{value}' must be one of small, medium, large"
            ),
            ConfigError::InvalidHistoricalPrior(value) => write!(
                f,
                "SYNERGY_HISTORICAL_PRIOR '{value}' must be a number between 0 and 1"
            ),
            ConfigError::InvalidTopN(value) => write!(
                f,
                "SYNERGY_DEFAULT_TOP_N '{value}' must be an integer between 1 and 20"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidSizeCategory(_)
            | ConfigError::InvalidHistoricalPrior(_)
            | ConfigError::InvalidTopN(_) => None,
        }
    }
}
