//! Extension protocol definitions.
//!
//! Extensions are pluggable units that react to copy/paste events and
//! exchange contextual information with one another.

mod context;
mod descriptor;
mod response;
mod traits;

pub use context::*;
pub use descriptor::*;
pub use response::*;
pub use traits::*;
