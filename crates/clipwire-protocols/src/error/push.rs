//! Notification transport errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("Transport closed")]
    TransportClosed,

    #[error("Device not connected: {0}")]
    DeviceNotConnected(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_closed_error() {
        let err = PushError::TransportClosed;
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_device_not_connected_error() {
        let err = PushError::DeviceNotConnected("device-42".to_string());
        assert!(err.to_string().contains("device-42"));
    }

    #[test]
    fn test_serialization_error() {
        let err = PushError::Serialization("bad payload".to_string());
        assert!(err.to_string().contains("bad payload"));
    }

    #[test]
    fn test_custom_error() {
        let err = PushError::Custom("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }
}
