//! # Clipwire Protocols
//!
//! Core protocol definitions (traits) for the Clipwire extension framework.
//! Contains only interface definitions and data types - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Event contract every extension implements
//! - [`PushSender`] - Transport for asynchronous user notifications
//! - [`LlmProcessor`] - Uniform call surface over language-model backends

pub mod error;
pub mod extension;
pub mod llm;
pub mod push;

// Re-export core traits and types
pub use extension::{
    ContextQuery, CopyResponse, EventContext, Extension, ExtensionContext, ExtensionDescriptor,
    ExtensionId, ImmediatePaste, Notification, NotificationStatus, OnContextResponse,
    PasteResponse,
};
pub use llm::{LlmContext, LlmModel, LlmProcessor, LlmProvider, LlmRequest, TextStream};
pub use push::{PushSender, EXTENSION_NOTIFICATION_EVENT};
pub use error::{ExtensionError, LlmError, PushError, RegistryError, ResponseError};
