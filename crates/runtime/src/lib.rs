//! Client-side runtime for the closet application.
//!
//! The runtime hosts the authoritative application state behind a single
//! store worker task. Clients hold a cloneable [`StoreHandle`] to dispatch
//! typed actions and query snapshots, subscribe to topic-scoped events via
//! the [`EventBus`], and talk to the backend through the [`SessionChannel`]
//! abstraction. The services layer glues the pure composer/hydration logic
//! from `closet-core` to the store and the channel.

pub mod api;
pub mod events;
pub mod services;
pub mod session;
pub mod store;

mod worker;

pub use api::{Result, RuntimeError, StoreHandle};
pub use events::{ClosetEvent, Event, EventBus, FitEvent, SessionEvent, Topic};
pub use services::{ClosetService, FitSaveReceipt, FitService};
pub use session::{ChannelError, Envelope, MessageKind, MockSessionChannel, Request, SessionChannel};
pub use store::{AppState, Store, StoreAction, StoreBuilder, StoreConfig};
