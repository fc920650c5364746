//! Context aggregator: fan-out/fan-in context brokering between extensions.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use clipwire_protocols::error::RegistryError;
use clipwire_protocols::extension::{ContextQuery, ExtensionId, OnContextResponse};

use crate::registry::ExtensionRegistry;

/// Brokers context requests between extensions.
///
/// An extension may query only the extensions it has declared as dependencies
/// in its descriptor; the target set is taken from the descriptor here,
/// before dispatch, never decided by the callee.
pub struct ContextAggregator {
    registry: Arc<ExtensionRegistry>,
}

impl ContextAggregator {
    /// Create an aggregator over the given registry.
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self { registry }
    }

    /// Query all declared dependencies of `source_id` and aggregate their
    /// context contributions.
    ///
    /// Targets are queried concurrently; the aggregated `contexts` sequence
    /// preserves declared dependency order regardless of completion order. A
    /// target that declines (`None`) contributes nothing; a target that fails
    /// is recorded and skipped without aborting its siblings. An empty
    /// dependency set yields a present-but-empty response.
    pub async fn gather(
        &self,
        source_id: &ExtensionId,
        query: &ContextQuery,
    ) -> Result<OnContextResponse, RegistryError> {
        let descriptor = self
            .registry
            .descriptor(source_id)
            .ok_or_else(|| RegistryError::NotFound(source_id.clone()))?;

        if descriptor.dependencies.is_empty() {
            return Ok(OnContextResponse::empty());
        }

        debug!(
            source = %source_id,
            targets = descriptor.dependencies.len(),
            "fanning out context request"
        );

        let queries = descriptor.dependencies.iter().map(|target| async move {
            let entry = self.registry.get(target);
            let result = match entry {
                Some(entry) => entry.handler.on_context_request(source_id, query).await,
                None => {
                    // validate() rules this out; a race with unregistration
                    // lands on the partial-failure path like any other error.
                    warn!(source = %source_id, target = %target, "context target missing");
                    Ok(None)
                }
            };
            (target, result)
        });

        // join_all preserves input order, so aggregation is deterministic
        // even when a later target answers first.
        let results = join_all(queries).await;

        let mut contexts = Vec::new();
        for (target, result) in results {
            match result {
                Ok(Some(response)) => contexts.extend(response.contexts),
                Ok(None) => {}
                Err(error) => {
                    warn!(source = %source_id, target = %target, %error, "context query failed");
                }
            }
        }

        Ok(OnContextResponse::with_contexts(contexts))
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
