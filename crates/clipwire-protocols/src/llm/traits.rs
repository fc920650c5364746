//! LLM processor trait definition.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use super::LlmRequest;
use crate::error::LlmError;

/// Lazy, single-consumption sequence of text increments.
///
/// The stream is finite and consumed by move; it cannot be restarted or
/// consumed twice. A backend failure surfaces as an `Err` item - chunks
/// already yielded before the failure are not retracted.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// Uniform call surface over a language-model backend.
#[async_trait]
pub trait LlmProcessor: Send + Sync {
    /// Process the request and return the complete response text.
    async fn process(&self, request: LlmRequest) -> Result<String, LlmError>;

    /// Process the request, yielding the response incrementally.
    async fn process_stream(&self, request: LlmRequest) -> Result<TextStream, LlmError>;
}
