//! The single reducer applying actions to [`AppState`].

use crate::events::{ClosetEvent, Event, FitEvent};

use super::actions::StoreAction;
use super::state::AppState;

/// Applies one action and returns the event describing what changed.
///
/// Reduction is infallible: actions carry validated data, and archive
/// actions on already-absent entities degrade to no-ops (the backend is the
/// source of truth, so a double archive just converges).
pub(crate) fn reduce(state: &mut AppState, action: StoreAction) -> Event {
    match action {
        StoreAction::ClosetLoaded { closet } => {
            let event = ClosetEvent::Loaded {
                pieces: closet.pieces.len(),
                fits: closet.fits.len(),
                fit_colls: closet.fit_colls.len(),
            };
            state.closet = closet;
            Event::Closet(event)
        }
        StoreAction::PieceUpserted { piece } => {
            let id = piece.id;
            state.closet.upsert_piece(piece);
            Event::Closet(ClosetEvent::PieceUpdated { id })
        }
        StoreAction::PieceArchived { id } => {
            state.closet.remove_piece(id);
            Event::Closet(ClosetEvent::PieceArchived { id })
        }
        StoreAction::FitSaved { fit } => {
            let id = fit.id;
            state.closet.upsert_fit(fit);
            Event::Fit(FitEvent::Saved { id })
        }
        StoreAction::FitArchived { id } => {
            state.closet.remove_fit(id);
            Event::Fit(FitEvent::Archived { id })
        }
        StoreAction::FitCollSaved { coll } => {
            let id = coll.id;
            state.closet.upsert_fit_coll(coll);
            Event::Closet(ClosetEvent::CollectionSaved { id })
        }
        StoreAction::FitCollArchived { id } => {
            state.closet.remove_fit_coll(id);
            Event::Closet(ClosetEvent::CollectionArchived { id })
        }
        StoreAction::PublicClosetEntered { closet } => {
            state.public_closet = Some(closet);
            Event::Closet(ClosetEvent::PublicClosetEntered)
        }
        StoreAction::PublicClosetLeft => {
            state.public_closet = None;
            Event::Closet(ClosetEvent::PublicClosetLeft)
        }
    }
}
