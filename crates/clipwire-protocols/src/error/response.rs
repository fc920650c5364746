//! Response construction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Paste response carries both immediate content and a notification")]
    AmbiguousPaste,

    #[error("Paste response carries neither immediate content nor a notification")]
    EmptyPaste,

    #[error("Unknown notification status: {0}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_paste_error() {
        let err = ResponseError::AmbiguousPaste;
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_empty_paste_error() {
        let err = ResponseError::EmptyPaste;
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_unknown_status_error() {
        let err = ResponseError::UnknownStatus("done".to_string());
        assert!(err.to_string().contains("done"));
    }
}
