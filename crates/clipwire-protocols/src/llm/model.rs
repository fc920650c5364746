//! Model enumeration and provider routing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LlmError;

/// Closed enumeration of supported models, vendor-qualified.
///
/// The id strings are passed opaquely to the backend; routing only looks at
/// [`LlmModel::provider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LlmModel {
    // Top shelf models
    #[serde(rename = "claude-3-5-sonnet-latest")]
    AnthropicSonnet,
    #[serde(rename = "claude-3-7-sonnet-latest")]
    AnthropicSonnet37,
    #[serde(rename = "gemini-2.0-flash")]
    GeminiFlash2,

    // Gemini models
    #[serde(rename = "gemini-1.5-flash")]
    GeminiFlash,
    #[serde(rename = "gemini-1.5-pro")]
    GeminiPro,
    #[serde(rename = "gemini-2.0-pro-exp")]
    GeminiPro2,
    #[serde(rename = "gemini-2.5-pro-exp-03-25")]
    GeminiPro25,
    #[serde(rename = "gemini-2.0-flash-exp")]
    GeminiFlash2Exp,
    #[serde(rename = "gemini-2.0-flash-exp-image-generation")]
    GeminiFlash2ImageGen,

    // Anthropic models
    #[serde(rename = "claude-3-5-haiku-latest")]
    AnthropicHaiku,

    // OpenAI models
    #[serde(rename = "gpt-4o-mini")]
    OpenAiMini,
    #[serde(rename = "gpt-4o")]
    OpenAiFull,
}

impl LlmModel {
    /// Vendor-qualified model id string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnthropicSonnet => "claude-3-5-sonnet-latest",
            Self::AnthropicSonnet37 => "claude-3-7-sonnet-latest",
            Self::GeminiFlash2 => "gemini-2.0-flash",
            Self::GeminiFlash => "gemini-1.5-flash",
            Self::GeminiPro => "gemini-1.5-pro",
            Self::GeminiPro2 => "gemini-2.0-pro-exp",
            Self::GeminiPro25 => "gemini-2.5-pro-exp-03-25",
            Self::GeminiFlash2Exp => "gemini-2.0-flash-exp",
            Self::GeminiFlash2ImageGen => "gemini-2.0-flash-exp-image-generation",
            Self::AnthropicHaiku => "claude-3-5-haiku-latest",
            Self::OpenAiMini => "gpt-4o-mini",
            Self::OpenAiFull => "gpt-4o",
        }
    }

    /// Provider this model routes to.
    pub fn provider(&self) -> LlmProvider {
        match self {
            Self::AnthropicSonnet | Self::AnthropicSonnet37 | Self::AnthropicHaiku => {
                LlmProvider::Anthropic
            }
            Self::GeminiFlash2
            | Self::GeminiFlash
            | Self::GeminiPro
            | Self::GeminiPro2
            | Self::GeminiPro25
            | Self::GeminiFlash2Exp
            | Self::GeminiFlash2ImageGen => LlmProvider::Gemini,
            Self::OpenAiMini | Self::OpenAiFull => LlmProvider::OpenAi,
        }
    }

    /// Highest-quality models, in preference order.
    pub fn top_shelf() -> &'static [LlmModel] {
        &[
            Self::AnthropicSonnet,
            Self::AnthropicSonnet37,
            Self::GeminiFlash2,
        ]
    }
}

impl fmt::Display for LlmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude-3-5-sonnet-latest" => Ok(Self::AnthropicSonnet),
            "claude-3-7-sonnet-latest" => Ok(Self::AnthropicSonnet37),
            "gemini-2.0-flash" => Ok(Self::GeminiFlash2),
            "gemini-1.5-flash" => Ok(Self::GeminiFlash),
            "gemini-1.5-pro" => Ok(Self::GeminiPro),
            "gemini-2.0-pro-exp" => Ok(Self::GeminiPro2),
            "gemini-2.5-pro-exp-03-25" => Ok(Self::GeminiPro25),
            "gemini-2.0-flash-exp" => Ok(Self::GeminiFlash2Exp),
            "gemini-2.0-flash-exp-image-generation" => Ok(Self::GeminiFlash2ImageGen),
            "claude-3-5-haiku-latest" => Ok(Self::AnthropicHaiku),
            "gpt-4o-mini" => Ok(Self::OpenAiMini),
            "gpt-4o" => Ok(Self::OpenAiFull),
            other => Err(LlmError::ModelNotSupported(other.to_string())),
        }
    }
}

/// Model provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Anthropic,
    OpenAi,
    Gemini,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
