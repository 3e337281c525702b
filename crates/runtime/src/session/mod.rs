//! Backend session messaging.
//!
//! The runtime never talks to a transport directly; it sends typed
//! [`Request`]s through the [`SessionChannel`] trait and interprets the
//! uniform [`Envelope`] replies. Transport, auth, and reconnection live in
//! whatever implements the trait.

mod mock;
mod traits;
mod types;

pub use mock::MockSessionChannel;
pub use traits::{ChannelError, SessionChannel};
pub use types::{Envelope, MessageKind, Request};
