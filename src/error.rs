use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Error raised by the command-line shell around the scoring library.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export parse error: {0}")]
    Export(#[from] serde_json::Error),
}
