use crate::prospects::Strictness;
use std::env;

/// Distinguishes runtime behavior for different stages of the application.
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

/// Top-level configuration for the application shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringSettings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let strictness = match env::var("APP_STRICTNESS") {
            Ok(value) => Strictness::parse(&value)
                .ok_or(ConfigError::InvalidStrictness { value })?,
            Err(_) => Strictness::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringSettings { strictness },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// User-level scoring preferences applied when the caller does not override them.
#[derive(Debug, Clone, Copy)]
pub struct ScoringSettings {
    pub strictness: Strictness,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_STRICTNESS must be one of gentle, normal, or strict (got '{value}')")]
    InvalidStrictness { value: String },
}
