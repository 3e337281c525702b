//! Typed events published on the bus, grouped by topic.

use serde::{Deserialize, Serialize};

use closet_core::{FitCollId, FitId, PieceId};

use crate::session::MessageKind;

/// Events on [`super::Topic::Closet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClosetEvent {
    /// A full closet payload was hydrated into the store.
    Loaded {
        pieces: usize,
        fits: usize,
        fit_colls: usize,
    },
    PieceUpdated { id: PieceId },
    PieceArchived { id: PieceId },
    CollectionSaved { id: FitCollId },
    CollectionArchived { id: FitCollId },
    /// Another user's closet is now the active view.
    PublicClosetEntered,
    /// The viewer's own closet is the active view again.
    PublicClosetLeft,
}

/// Events on [`super::Topic::Fit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FitEvent {
    Saved { id: FitId },
    Archived { id: FitId },
}

/// Events on [`super::Topic::Session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The backend rejected a request; local state was left untouched.
    RequestFailed {
        kind: MessageKind,
        code: u16,
        description: String,
    },
}
