//! Notification transport protocol.
//!
//! Extensions route all user-facing status communication through this
//! interface so the host retains a single audit point. The transport is
//! fire-and-forget: a completed send only guarantees the event was handed to
//! the transport, not that it was displayed.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PushError;

/// Event name used for extension notifications.
pub const EXTENSION_NOTIFICATION_EVENT: &str = "extension_notification";

/// Transport for pushing events to a specific user device.
///
/// Implementations must deliver events for a single submitter in submission
/// order; cross-submitter ordering is not guaranteed.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Send an event payload to the device's push connection.
    async fn send_event(
        &self,
        device_id: &str,
        event_name: &str,
        payload: Value,
    ) -> Result<(), PushError>;
}
