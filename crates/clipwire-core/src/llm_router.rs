//! LLM router: maps model providers to registered backends.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use clipwire_protocols::error::LlmError;
use clipwire_protocols::llm::{LlmProcessor, LlmProvider, LlmRequest, TextStream};

/// Routes model invocations to the backend registered for the model's
/// provider.
///
/// The router is itself an [`LlmProcessor`], so extensions hold one opaque
/// call surface regardless of how many backends the host wired up.
pub struct LlmRouter {
    backends: DashMap<LlmProvider, Arc<dyn LlmProcessor>>,
}

impl LlmRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            backends: DashMap::new(),
        }
    }

    /// Register a backend for a provider, replacing any previous one.
    pub fn register(&self, provider: LlmProvider, backend: Arc<dyn LlmProcessor>) {
        debug!(provider = %provider, "registering llm backend");
        self.backends.insert(provider, backend);
    }

    /// Unregister a provider's backend.
    pub fn unregister(&self, provider: LlmProvider) -> bool {
        self.backends.remove(&provider).is_some()
    }

    /// List registered providers.
    pub fn providers(&self) -> Vec<LlmProvider> {
        self.backends.iter().map(|b| *b.key()).collect()
    }

    fn backend_for(&self, request: &LlmRequest) -> Result<Arc<dyn LlmProcessor>, LlmError> {
        let provider = request.model.provider();
        self.backends
            .get(&provider)
            .map(|b| b.clone())
            .ok_or_else(|| LlmError::ProviderNotFound(provider.to_string()))
    }
}

impl Default for LlmRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProcessor for LlmRouter {
    async fn process(&self, request: LlmRequest) -> Result<String, LlmError> {
        let backend = self.backend_for(&request)?;
        backend.process(request).await
    }

    async fn process_stream(&self, request: LlmRequest) -> Result<TextStream, LlmError> {
        let backend = self.backend_for(&request)?;
        backend.process_stream(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipwire_protocols::llm::LlmModel;
    use futures::StreamExt;

    struct EchoBackend {
        prefix: &'static str,
    }

    #[async_trait]
    impl LlmProcessor for EchoBackend {
        async fn process(&self, request: LlmRequest) -> Result<String, LlmError> {
            Ok(format!("{}: {}", self.prefix, request.message))
        }

        async fn process_stream(&self, request: LlmRequest) -> Result<TextStream, LlmError> {
            let chunks: Vec<Result<String, LlmError>> = vec![
                Ok(format!("{}: ", self.prefix)),
                Ok(request.message),
            ];
            Ok(Box::pin(futures::stream::iter(chunks)))
        }
    }

    #[tokio::test]
    async fn test_routes_by_model_provider() {
        let router = LlmRouter::new();
        router.register(LlmProvider::Anthropic, Arc::new(EchoBackend { prefix: "anthropic" }));
        router.register(LlmProvider::OpenAi, Arc::new(EchoBackend { prefix: "openai" }));

        let response = router
            .process(LlmRequest::new(LlmModel::AnthropicHaiku, "hi"))
            .await
            .unwrap();
        assert_eq!(response, "anthropic: hi");

        let response = router
            .process(LlmRequest::new(LlmModel::OpenAiMini, "hi"))
            .await
            .unwrap();
        assert_eq!(response, "openai: hi");
    }

    #[tokio::test]
    async fn test_unregistered_provider_is_an_error() {
        let router = LlmRouter::new();

        let result = router
            .process(LlmRequest::new(LlmModel::GeminiFlash2, "hi"))
            .await;
        assert!(matches!(result, Err(LlmError::ProviderNotFound(ref p)) if p == "gemini"));
    }

    #[tokio::test]
    async fn test_stream_matches_non_stream() {
        let router = LlmRouter::new();
        router.register(LlmProvider::Gemini, Arc::new(EchoBackend { prefix: "gemini" }));

        let request = LlmRequest::new(LlmModel::GeminiPro, "tell me");
        let full = router.process(request.clone()).await.unwrap();

        let mut stream = router.process_stream(request).await.unwrap();
        let mut collected = String::new();
        while let Some(chunk) = stream.next().await {
            collected.push_str(&chunk.unwrap());
        }
        assert_eq!(collected, full);
    }

    #[tokio::test]
    async fn test_unregister() {
        let router = LlmRouter::new();
        router.register(LlmProvider::OpenAi, Arc::new(EchoBackend { prefix: "openai" }));
        assert_eq!(router.providers().len(), 1);

        assert!(router.unregister(LlmProvider::OpenAi));
        assert!(!router.unregister(LlmProvider::OpenAi));

        let result = router
            .process(LlmRequest::new(LlmModel::OpenAiFull, "hi"))
            .await;
        assert!(matches!(result, Err(LlmError::ProviderNotFound(_))));
    }
}
