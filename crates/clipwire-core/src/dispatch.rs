//! Event dispatcher: routes copy/paste events to a target extension.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use clipwire_protocols::error::{ExtensionError, RegistryError};
use clipwire_protocols::extension::{CopyResponse, EventContext, PasteResponse};

use crate::registry::ExtensionRegistry;

/// Failure dispatching an event to an extension.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The handler itself failed; fatal to this event unless the host retries.
    #[error(transparent)]
    Handler(#[from] ExtensionError),
}

/// Routes user copy/paste events to the target extension's handler.
///
/// The event context is built by the host per event and consumed by the
/// handler call. A handler failure propagates; the host surfaces nothing or
/// an error notification, never a half-applied paste.
pub struct EventDispatcher {
    registry: Arc<ExtensionRegistry>,
}

impl EventDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self { registry }
    }

    /// Deliver a copy event to the target extension.
    pub async fn dispatch_copy(
        &self,
        extension_id: &str,
        context: EventContext,
    ) -> Result<Option<CopyResponse>, DispatchError> {
        let entry = self
            .registry
            .get(extension_id)
            .ok_or_else(|| RegistryError::NotFound(extension_id.to_string()))?;

        debug!(extension_id, "dispatching copy event");
        Ok(entry.handler.on_copy(context).await?)
    }

    /// Deliver a paste event to the target extension.
    pub async fn dispatch_paste(
        &self,
        extension_id: &str,
        context: EventContext,
    ) -> Result<Option<PasteResponse>, DispatchError> {
        let entry = self
            .registry
            .get(extension_id)
            .ok_or_else(|| RegistryError::NotFound(extension_id.to_string()))?;

        debug!(extension_id, "dispatching paste event");
        Ok(entry.handler.on_paste(context).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clipwire_protocols::extension::{
        Extension, ExtensionDescriptor, Notification, NotificationStatus,
    };

    struct UppercasePaste;

    #[async_trait]
    impl Extension for UppercasePaste {
        async fn on_copy(
            &self,
            context: EventContext,
        ) -> Result<Option<CopyResponse>, ExtensionError> {
            let request_id = context.request_id().unwrap_or("unknown");
            Ok(Some(CopyResponse::notify(Notification::new(
                request_id,
                "Captured",
                "",
                "",
                NotificationStatus::Ready,
            ))))
        }

        async fn on_paste(
            &self,
            context: EventContext,
        ) -> Result<Option<PasteResponse>, ExtensionError> {
            match context.selected_text() {
                Some(text) => Ok(Some(PasteResponse::immediate(text.to_uppercase()))),
                None => Ok(None),
            }
        }
    }

    struct BrokenExtension;

    #[async_trait]
    impl Extension for BrokenExtension {
        async fn on_paste(
            &self,
            _context: EventContext,
        ) -> Result<Option<PasteResponse>, ExtensionError> {
            Err(ExtensionError::HandlerFailed("boom".to_string()))
        }
    }

    fn dispatcher() -> EventDispatcher {
        let registry = Arc::new(ExtensionRegistry::new());
        registry
            .register(
                ExtensionDescriptor::new("upper", "Uppercases pastes"),
                Arc::new(UppercasePaste),
            )
            .unwrap();
        registry
            .register(
                ExtensionDescriptor::new("broken", "Always fails"),
                Arc::new(BrokenExtension),
            )
            .unwrap();
        EventDispatcher::new(registry)
    }

    #[tokio::test]
    async fn test_dispatch_copy() {
        let dispatcher = dispatcher();
        let ctx = EventContext::new().with("request_id", "req-1");

        let response = dispatcher.dispatch_copy("upper", ctx).await.unwrap();
        let notification = response.unwrap().notification.unwrap();
        assert_eq!(notification.request_id, "req-1");
        assert_eq!(notification.status, NotificationStatus::Ready);
    }

    #[tokio::test]
    async fn test_dispatch_paste_immediate() {
        let dispatcher = dispatcher();
        let ctx = EventContext::new().with("selected_text", "hello");

        let response = dispatcher.dispatch_paste("upper", ctx).await.unwrap();
        assert!(matches!(
            response,
            Some(PasteResponse::Paste(ref p)) if p.content == "HELLO"
        ));
    }

    #[tokio::test]
    async fn test_dispatch_paste_no_action() {
        let dispatcher = dispatcher();

        let response = dispatcher
            .dispatch_paste("upper", EventContext::new())
            .await
            .unwrap();
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_to_unknown_extension() {
        let dispatcher = dispatcher();

        let result = dispatcher.dispatch_copy("ghost", EventContext::new()).await;
        assert!(matches!(
            result,
            Err(DispatchError::Registry(RegistryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_handler_failure_propagates() {
        let dispatcher = dispatcher();

        let result = dispatcher
            .dispatch_paste("broken", EventContext::new())
            .await;
        assert!(matches!(
            result,
            Err(DispatchError::Handler(ExtensionError::HandlerFailed(_)))
        ));
    }
}
