//! Notification delivery: extension-side notifier and an in-process transport.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use clipwire_protocols::error::PushError;
use clipwire_protocols::extension::{ExtensionId, Notification};
use clipwire_protocols::push::{PushSender, EXTENSION_NOTIFICATION_EVENT};

/// Sends notifications on behalf of one extension.
///
/// Stamps the extension id into every payload so the host can attribute
/// notifications at its single audit point.
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn PushSender>,
    extension_id: ExtensionId,
}

impl Notifier {
    /// Create a notifier bound to an extension identity.
    pub fn new(sender: Arc<dyn PushSender>, extension_id: impl Into<ExtensionId>) -> Self {
        Self {
            sender,
            extension_id: extension_id.into(),
        }
    }

    /// Push a notification to the user's device.
    ///
    /// Fire-and-forget: completion means the notification was handed to the
    /// transport. For a single request id, calls made in order are delivered
    /// in order.
    pub async fn send_push_notification(
        &self,
        device_id: &str,
        notification: &Notification,
    ) -> Result<(), PushError> {
        let mut payload = notification.to_payload();
        payload["extension_id"] = Value::String(self.extension_id.clone());

        debug!(
            extension_id = %self.extension_id,
            request_id = %notification.request_id,
            status = notification.status.as_str(),
            "pushing notification"
        );
        self.sender
            .send_event(device_id, EXTENSION_NOTIFICATION_EVENT, payload)
            .await
    }
}

/// An event delivered through [`LocalPushSender`].
#[derive(Debug, Clone)]
pub struct PushEvent {
    pub device_id: String,
    pub event_name: String,
    pub payload: Value,
}

/// In-process push transport backed by an mpsc channel.
///
/// Delivers events in submission order, which satisfies the per-request-id
/// ordering guarantee. Every submitted event is delivered at least once;
/// misuse such as a second terminal status is passed through, not dropped.
pub struct LocalPushSender {
    tx: mpsc::Sender<PushEvent>,
}

impl LocalPushSender {
    /// Create a transport and the receiver end consuming its events.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<PushEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl PushSender for LocalPushSender {
    async fn send_event(
        &self,
        device_id: &str,
        event_name: &str,
        payload: Value,
    ) -> Result<(), PushError> {
        self.tx
            .send(PushEvent {
                device_id: device_id.to_string(),
                event_name: event_name.to_string(),
                payload,
            })
            .await
            .map_err(|_| PushError::TransportClosed)
    }
}
