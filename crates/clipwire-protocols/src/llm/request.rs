//! Model invocation request types.

use serde::{Deserialize, Serialize};

use super::LlmModel;

/// One grounding entry supplied to the backend.
///
/// Entries are passed to the backend in the order given; callers typically
/// forward the context aggregator's output directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmContext {
    /// Text context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw image bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl LlmContext {
    /// Text-only context entry.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    /// Image-only context entry.
    pub fn image(image: Vec<u8>) -> Self {
        Self {
            text: None,
            image: Some(image),
        }
    }
}

/// Request for a model invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// Model to invoke.
    pub model: LlmModel,

    /// The main user message or query.
    pub message: String,

    /// System prompt or instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Ordered grounding material.
    #[serde(default)]
    pub contexts: Vec<LlmContext>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl LlmRequest {
    /// Create a new request.
    pub fn new(model: LlmModel, message: impl Into<String>) -> Self {
        Self {
            model,
            message: message.into(),
            system_prompt: None,
            contexts: Vec::new(),
            max_output_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
        }
    }

    /// Set the system prompt.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set the grounding contexts, in presentation order.
    pub fn with_contexts(mut self, contexts: Vec<LlmContext>) -> Self {
        self.contexts = contexts;
        self
    }

    /// Set max output tokens.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
