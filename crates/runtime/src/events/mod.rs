//! Event bus and event types.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ClosetEvent, FitEvent, SessionEvent};
