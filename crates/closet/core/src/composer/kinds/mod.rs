//! Concrete composer transitions, one module per user operation.

mod assign;
mod layer;
mod lock;
mod offset;
mod refresh;
mod remove;

pub use assign::{AssignAction, AssignError};
pub use layer::{LayerError, RefreshLayerAction, ToggleLayerAction};
pub use lock::{LockError, ToggleLockAction};
pub use offset::SetOffsetAction;
pub use refresh::{RefreshAction, RefreshAllAction, RefreshError};
pub use remove::{RemoveAction, RemoveError};
