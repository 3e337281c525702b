//! Typed action vocabulary for store mutation.

use serde::{Deserialize, Serialize};

use closet_core::{Closet, Fit, FitColl, FitCollId, FitId, Piece, PieceId};

/// Every way the application state can change.
///
/// Actions are dispatched through [`crate::StoreHandle`] and applied by the
/// reducer on the worker task. They carry already-validated data; a fit in
/// `FitSaved` has been accepted by the backend before it gets here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreAction {
    /// Replace the viewer's closet with a freshly hydrated payload.
    ClosetLoaded { closet: Closet },
    PieceUpserted { piece: Piece },
    PieceArchived { id: PieceId },
    FitSaved { fit: Fit },
    FitArchived { id: FitId },
    FitCollSaved { coll: FitColl },
    FitCollArchived { id: FitCollId },
    /// Swap another user's hydrated closet in as the active view.
    PublicClosetEntered { closet: Closet },
    PublicClosetLeft,
}

impl StoreAction {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreAction::ClosetLoaded { .. } => "closet_loaded",
            StoreAction::PieceUpserted { .. } => "piece_upserted",
            StoreAction::PieceArchived { .. } => "piece_archived",
            StoreAction::FitSaved { .. } => "fit_saved",
            StoreAction::FitArchived { .. } => "fit_archived",
            StoreAction::FitCollSaved { .. } => "fit_coll_saved",
            StoreAction::FitCollArchived { .. } => "fit_coll_archived",
            StoreAction::PublicClosetEntered { .. } => "public_closet_entered",
            StoreAction::PublicClosetLeft => "public_closet_left",
        }
    }
}
