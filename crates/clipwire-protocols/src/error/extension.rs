//! Extension handler errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Handler failed: {0}")]
    HandlerFailed(String),

    #[error("Event cancelled")]
    Cancelled,

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_failed_error() {
        let err = ExtensionError::HandlerFailed("connection refused".to_string());
        let display = err.to_string();
        assert!(display.contains("Handler failed"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_cancelled_error() {
        let err = ExtensionError::Cancelled;
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_timeout_error() {
        let err = ExtensionError::Timeout;
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_custom_error() {
        let err = ExtensionError::Custom("custom error message".to_string());
        assert_eq!(err.to_string(), "custom error message");
    }

    #[test]
    fn test_error_debug() {
        let err = ExtensionError::HandlerFailed("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("HandlerFailed"));
    }
}
