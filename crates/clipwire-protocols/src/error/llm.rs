//! LLM backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No backend registered for provider: {0}")]
    ProviderNotFound(String),

    #[error("Model not supported by backend: {0}")]
    ModelNotSupported(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited: retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Stream error: {0}")]
    StreamError(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}
