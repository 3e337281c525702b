//! Services gluing the pure domain logic to the store and the backend.
//!
//! Each service owns a shared [`SessionChannel`](crate::session::SessionChannel)
//! and a [`StoreHandle`](crate::StoreHandle). The pattern is uniform: send,
//! check the envelope, and only on success dispatch the local action. A
//! rejection leaves the store untouched and surfaces on the Session topic.

mod closet;
mod fits;

pub use closet::ClosetService;
pub use fits::{FitSaveReceipt, FitService};

use crate::api::RuntimeError;
use crate::events::{Event, EventBus, SessionEvent};
use crate::session::{Envelope, MessageKind};

/// Converts a rejection envelope into an error, emitting it on the bus.
pub(crate) fn reject(bus: &EventBus, kind: MessageKind, envelope: &Envelope) -> RuntimeError {
    tracing::warn!(
        target: "runtime::session",
        %kind,
        code = envelope.code,
        description = %envelope.description,
        "request rejected by the backend"
    );
    bus.publish(Event::Session(SessionEvent::RequestFailed {
        kind,
        code: envelope.code,
        description: envelope.description.clone(),
    }));
    RuntimeError::Rejected {
        kind,
        code: envelope.code,
        description: envelope.description.clone(),
    }
}
