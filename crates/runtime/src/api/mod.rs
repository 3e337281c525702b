//! Public API surface: the store handle and the runtime error type.

mod errors;
mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::StoreHandle;
