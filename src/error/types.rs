use thiserror::Error;

/// Error taxonomy for the risk engine.
///
/// Provider failures are caught at the fetch boundary and converted into
/// signal absence for their category; they never abort an evaluation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Timed out fetching {0} data")]
    Timeout(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(format!("JSON error: {}", err))
    }
}
