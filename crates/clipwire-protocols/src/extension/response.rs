//! Response model for copy/paste events and context requests.
//!
//! Handler outcomes are closed variant sets so the host can dispatch on
//! shape exhaustively. Wire payloads produced by `to_payload` keep the
//! field names consumed by existing clients.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

use crate::error::ResponseError;

/// Status of an asynchronous notification.
///
/// `Pending` is the only non-terminal state; for a given request id it may be
/// followed by at most one terminal update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Ready,
    Error,
}

impl NotificationStatus {
    /// Whether this status ends the notification lifecycle.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Error => "error",
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "ready" => Ok(Self::Ready),
            "error" => Ok(Self::Error),
            other => Err(ResponseError::UnknownStatus(other.to_string())),
        }
    }
}

/// A push notification addressed to the user, keyed by request id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub request_id: String,
    pub title: String,
    pub detail: String,
    pub content: String,
    pub status: NotificationStatus,
}

impl Notification {
    /// Create a notification.
    pub fn new(
        request_id: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        content: impl Into<String>,
        status: NotificationStatus,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            title: title.into(),
            detail: detail.into(),
            content: content.into(),
            status,
        }
    }

    /// Serialize to the wire payload shape.
    pub fn to_payload(&self) -> Value {
        json!({
            "notification_request_id": self.request_id,
            "notification_title": self.title,
            "notification_detail": self.detail,
            "notification_content": self.content,
            "notification_status": self.status.as_str(),
        })
    }
}

/// Content to paste immediately in place of the clipboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmediatePaste {
    pub content: String,
}

impl ImmediatePaste {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Serialize to the wire payload shape.
    pub fn to_payload(&self) -> Value {
        json!({ "immediate_paste_content": self.content })
    }
}

/// Outcome of a copy event: at most a notification.
#[derive(Debug, Clone, Default)]
pub struct CopyResponse {
    pub notification: Option<Notification>,
}

impl CopyResponse {
    /// Response carrying a notification.
    pub fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
        }
    }

    /// Response with nothing to tell the user.
    pub fn silent() -> Self {
        Self { notification: None }
    }

    /// Serialize to the wire payload shape.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({});
        if let Some(ref notification) = self.notification {
            payload["notification"] = notification.to_payload();
        }
        payload
    }
}

/// Outcome of a paste event: exactly one of immediate content or a deferred
/// notification. The variant set makes a both-present response unrepresentable.
#[derive(Debug, Clone)]
pub enum PasteResponse {
    /// Replace the pasted content immediately.
    Paste(ImmediatePaste),
    /// Defer: the result arrives later through the notification channel.
    Notify(Notification),
}

impl PasteResponse {
    /// Response pasting the given content immediately.
    pub fn immediate(content: impl Into<String>) -> Self {
        Self::Paste(ImmediatePaste::new(content))
    }

    /// Response deferring to a notification.
    pub fn deferred(notification: Notification) -> Self {
        Self::Notify(notification)
    }

    /// Build from untyped wire parts, rejecting ill-formed combinations.
    ///
    /// Exactly one of `content` and `notification` must be present; anything
    /// else fails here rather than reaching a consumer.
    pub fn from_parts(
        content: Option<String>,
        notification: Option<Notification>,
    ) -> Result<Self, ResponseError> {
        match (content, notification) {
            (Some(content), None) => Ok(Self::immediate(content)),
            (None, Some(notification)) => Ok(Self::Notify(notification)),
            (Some(_), Some(_)) => Err(ResponseError::AmbiguousPaste),
            (None, None) => Err(ResponseError::EmptyPaste),
        }
    }

    /// Serialize to the wire payload shape.
    pub fn to_payload(&self) -> Value {
        match self {
            Self::Paste(paste) => json!({ "immediate_paste": paste.to_payload() }),
            Self::Notify(notification) => json!({ "notification": notification.to_payload() }),
        }
    }
}

/// One context contribution from an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionContext {
    /// What this context is (presented to downstream consumers).
    pub description: String,
    /// The context text itself.
    pub context: String,
}

impl ExtensionContext {
    pub fn new(description: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            context: context.into(),
        }
    }
}

/// Response to a context request: an ordered sequence of contributions.
///
/// Order is significant. An empty sequence is valid and distinct from
/// declining to answer (handlers decline by returning `None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnContextResponse {
    pub contexts: Vec<ExtensionContext>,
}

impl OnContextResponse {
    /// Response with no contributions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Response from an ordered list of contributions.
    pub fn with_contexts(contexts: Vec<ExtensionContext>) -> Self {
        Self { contexts }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
