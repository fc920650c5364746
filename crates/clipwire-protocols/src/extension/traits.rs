//! Extension trait definition.

use async_trait::async_trait;

use super::{ContextQuery, CopyResponse, EventContext, ExtensionId, OnContextResponse, PasteResponse};
use crate::error::ExtensionError;

/// Event contract every extension implements.
///
/// All three operations are asynchronous and independently optional: the
/// default implementations decline by returning `Ok(None)`. Handlers may call
/// the context aggregator, invoke a model backend, or push notifications, but
/// must not block indefinitely - the host bounds each event with an external
/// deadline and treats a hang as a handler failure.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Answer another extension's (or the host's) request for context.
    ///
    /// The caller's identity is routing information only, not a trust
    /// boundary. Return `None` when the extension has nothing relevant;
    /// `Some` with an empty context list means an explicit empty answer.
    async fn on_context_request(
        &self,
        source_extension_id: &ExtensionId,
        context_query: &ContextQuery,
    ) -> Result<Option<OnContextResponse>, ExtensionError> {
        let _ = (source_extension_id, context_query);
        Ok(None)
    }

    /// React to a copy event. Returning `None` means "no action".
    async fn on_copy(&self, context: EventContext) -> Result<Option<CopyResponse>, ExtensionError> {
        let _ = context;
        Ok(None)
    }

    /// React to a paste event.
    ///
    /// Either return content to substitute immediately or defer to a
    /// notification delivered later through the notification channel.
    async fn on_paste(
        &self,
        context: EventContext,
    ) -> Result<Option<PasteResponse>, ExtensionError> {
        let _ = context;
        Ok(None)
    }
}
