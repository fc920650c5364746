//! Error types for the Clipwire protocol layer.

mod extension;
mod llm;
mod push;
mod registry;
mod response;

pub use extension::*;
pub use llm::*;
pub use push::*;
pub use registry::*;
pub use response::*;
