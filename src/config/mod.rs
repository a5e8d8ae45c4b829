use std::env;
use std::fmt;
use std::time::Duration;

/// Top-level configuration for the analyzer CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("ANALYZER_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let timeout_secs = env::var("ANALYZER_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let log_level = env::var("ANALYZER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the outbound product API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyBaseUrl,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBaseUrl => {
                write!(f, "ANALYZER_API_BASE_URL must not be blank")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "ANALYZER_HTTP_TIMEOUT_SECS must be a valid u64")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
