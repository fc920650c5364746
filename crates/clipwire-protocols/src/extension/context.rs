//! Event context and context query payloads.
//!
//! Both are untyped key-value maps: the protocol imposes no schema, only a
//! set of conventional keys the host fills in for copy/paste events.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Well-known event context keys populated by the host.
pub mod keys {
    pub const DEVICE_ID: &str = "device_id";
    pub const SESSION_ID: &str = "session_id";
    pub const REQUEST_ID: &str = "request_id";
    pub const TIMESTAMP: &str = "timestamp";
    pub const WINDOW_INFO: &str = "window_info";
    pub const SELECTED_TEXT: &str = "selected_text";
    pub const SCREENSHOT_PROVIDED: &str = "screenshot_provided";
}

/// Context passed into every handler invocation.
///
/// Constructed per event and discarded once the call (and any async work
/// derived from it) completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventContext(HashMap<String, Value>);

impl EventContext {
    /// Create an empty event context.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a value under the given key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Device the event originated from, if the host provided it.
    pub fn device_id(&self) -> Option<&str> {
        self.get_str(keys::DEVICE_ID)
    }

    /// Request identifier for this event, if the host provided it.
    pub fn request_id(&self) -> Option<&str> {
        self.get_str(keys::REQUEST_ID)
    }

    /// Text selected at copy time, if any.
    pub fn selected_text(&self) -> Option<&str> {
        self.get_str(keys::SELECTED_TEXT)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<HashMap<String, Value>> for EventContext {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Query describing what context is being asked for.
///
/// Same untyped shape as [`EventContext`]; the keys are a convention between
/// extension authors, not enforced by this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextQuery(HashMap<String, Value>);

impl ContextQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a value under the given key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Value>> for ContextQuery {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_context_builder() {
        let ctx = EventContext::new()
            .with(keys::DEVICE_ID, "device-1")
            .with(keys::SELECTED_TEXT, "hello");

        assert_eq!(ctx.device_id(), Some("device-1"));
        assert_eq!(ctx.selected_text(), Some("hello"));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_event_context_missing_keys() {
        let ctx = EventContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.device_id().is_none());
        assert!(ctx.request_id().is_none());
    }

    #[test]
    fn test_event_context_non_string_value() {
        let ctx = EventContext::new().with(keys::SCREENSHOT_PROVIDED, true);
        assert!(ctx.get_str(keys::SCREENSHOT_PROVIDED).is_none());
        assert_eq!(
            ctx.get(keys::SCREENSHOT_PROVIDED),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_context_query_builder() {
        let query = ContextQuery::new().with("topic", "urls");
        assert_eq!(query.get_str("topic"), Some("urls"));
        assert!(!query.is_empty());
    }

    #[test]
    fn test_event_context_from_map() {
        let mut map = HashMap::new();
        map.insert("request_id".to_string(), Value::from("req-1"));
        let ctx = EventContext::from(map);
        assert_eq!(ctx.request_id(), Some("req-1"));
    }

    #[test]
    fn test_event_context_serialization() {
        let ctx = EventContext::new().with("session_id", "s-1");
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("session_id"));
        let back: EventContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_str("session_id"), Some("s-1"));
    }
}
