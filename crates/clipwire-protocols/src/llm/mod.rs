//! Model invocation protocol.
//!
//! One calling convention over heterogeneous language-model backends,
//! selected by a closed model enumeration.

mod model;
mod request;
mod traits;

pub use model::*;
pub use request::*;
pub use traits::*;
