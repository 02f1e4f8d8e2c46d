use crate::scoring::DecisionThreshold;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/credit_scoring_model.json";

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
    pub model: ModelConfig,
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

        let artifact_path = env::var("APP_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let decision_threshold = match env::var("APP_DECISION_THRESHOLD") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_threshold(&raw)?),
            _ => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            model: ModelConfig {
                artifact_path,
                decision_threshold,
            },
        })
    }
}

pub fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidThreshold {
            value: raw.to_string(),
        })?;

    DecisionThreshold::probability(value)
        .map(|_| value)
        .map_err(|_| ConfigError::InvalidThreshold {
            value: raw.to_string(),
        })
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the classifier artifact and the decision policy applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub artifact_path: PathBuf,
    /// `None` keeps the classifier's own cutoff.
    pub decision_threshold: Option<f64>,
}

impl ModelConfig {
    pub fn threshold(&self) -> DecisionThreshold {
        match self.decision_threshold {
            Some(cutoff) => DecisionThreshold::Probability(cutoff),
            None => DecisionThreshold::Native,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_MODEL_PATH),
            decision_threshold: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { value } => write!(
                f,
                "APP_DECISION_THRESHOLD must be a number between 0 and 1 (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidThreshold { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
