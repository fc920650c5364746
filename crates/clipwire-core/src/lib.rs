//! # Clipwire Core
//!
//! Host-side plumbing for the Clipwire extension protocol.
//!
//! ## Components
//!
//! - [`ExtensionRegistry`] - Descriptor store with registration-time validation
//! - [`ContextAggregator`] - Fan-out/fan-in context broker between extensions
//! - [`EventDispatcher`] - Routes copy/paste events to a target extension
//! - [`Notifier`] - Pushes notifications through a [`PushSender`](clipwire_protocols::PushSender)
//! - [`LlmRouter`] - Routes model invocations to registered backends

pub mod aggregator;
pub mod dispatch;
pub mod llm_router;
pub mod notifier;
pub mod registry;

pub use aggregator::ContextAggregator;
pub use dispatch::{DispatchError, EventDispatcher};
pub use llm_router::LlmRouter;
pub use notifier::{LocalPushSender, Notifier, PushEvent};
pub use registry::ExtensionRegistry;
