//! Fit composition sessions, saves, and collection management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use closet_core::{
    ComposeEnv, ComposerState, Fit, FitColl, FitCollId, FitId, FitPiece, FitPieceId, FitPieces,
    PcgRng, PieceId,
};

use crate::api::{Result, RuntimeError, StoreHandle};
use crate::session::{MessageKind, Request, SessionChannel};
use crate::store::StoreAction;

use super::reject;

/// Backend reply to a fit save: the server-assigned ids, echoed in the
/// order the drafts were sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitSaveReceipt {
    pub fit_id: FitId,
    pub fit_piece_ids: Vec<FitPieceId>,
}

/// Starts composer sessions and persists their results.
///
/// Saves are optimistic without rollback: the store is only touched after
/// the backend accepts, so a rejection leaves local state exactly as it
/// was and the session stays open for a retry.
pub struct FitService {
    channel: Arc<dyn SessionChannel>,
    store: StoreHandle,
}

impl FitService {
    pub fn new(channel: Arc<dyn SessionChannel>, store: StoreHandle) -> Self {
        Self { channel, store }
    }

    /// Starts a fully randomized composer session over the active closet.
    pub async fn start_create(&self) -> Result<ComposerState> {
        let closet = self.store.query_active_closet().await?;
        let rng = PcgRng;
        let env = ComposeEnv::new(&closet.pieces, &rng);
        Ok(ComposerState::create(&env, rand::random()))
    }

    /// Starts a randomized session pinned around one piece (deep link).
    pub async fn start_create_around(&self, piece: PieceId) -> Result<ComposerState> {
        let closet = self.store.query_active_closet().await?;
        let seed_piece = closet
            .piece(piece)
            .ok_or(RuntimeError::PieceNotFound(piece))?;
        let rng = PcgRng;
        let env = ComposeEnv::new(&closet.pieces, &rng);
        Ok(ComposerState::create_around(&env, rand::random(), seed_piece))
    }

    /// Starts an edit session over an existing fit.
    pub async fn start_edit(&self, fit: FitId) -> Result<ComposerState> {
        let closet = self.store.query_closet().await?;
        let fit = closet.fit(fit).ok_or(RuntimeError::FitNotFound(fit))?;
        Ok(ComposerState::edit(fit, rand::random()))
    }

    /// Saves a composer session as a fit.
    ///
    /// Sends the occupied slots, waits for the backend to assign ids, and
    /// only then dispatches `FitSaved`. The returned fit is the store's new
    /// copy with server ids resolved in.
    pub async fn save(&self, session: &ComposerState, name: &str) -> Result<Fit> {
        let draft = session.save_request(name);
        let request = Request::with_payload(MessageKind::SaveFit, &draft)
            .map_err(crate::session::ChannelError::from)?;

        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(self.store.event_bus(), MessageKind::SaveFit, &envelope));
        }

        let receipt: FitSaveReceipt = envelope.decode().map_err(|source| RuntimeError::Decode {
            kind: MessageKind::SaveFit,
            source,
        })?;
        if receipt.fit_piece_ids.len() != draft.pieces.len() {
            return Err(RuntimeError::MalformedResponse {
                kind: MessageKind::SaveFit,
                reason: "fit piece id count does not match the sent drafts",
            });
        }

        let mut pieces = FitPieces::default();
        for (entry, id) in draft.pieces.iter().zip(receipt.fit_piece_ids) {
            let mut fit_piece = FitPiece::new(id, entry.slot)
                .with_piece(entry.piece)
                .with_offset_y(entry.offset_y);
            fit_piece.layer_piece = entry.layer_piece;
            // Cannot overflow: drafts carry at most one entry per slot.
            let _ = pieces.push(fit_piece);
        }

        let fit = Fit::new(receipt.fit_id, name).with_pieces(pieces);
        info!(
            target: "runtime::fits",
            fit = %fit.id,
            pieces = draft.pieces.len(),
            editing = session.fit_id.is_some(),
            "fit saved"
        );
        self.store
            .dispatch(StoreAction::FitSaved { fit: fit.clone() })
            .await?;
        Ok(fit)
    }

    /// Archives a fit, purging it from every collection locally.
    pub async fn archive(&self, id: FitId) -> Result<()> {
        let request = Request::with_payload(MessageKind::ArchiveFit, &json!({ "fit_id": id }))
            .map_err(crate::session::ChannelError::from)?;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(
                self.store.event_bus(),
                MessageKind::ArchiveFit,
                &envelope,
            ));
        }
        self.store.dispatch(StoreAction::FitArchived { id }).await
    }

    /// Saves a collection's name and ordered fit membership.
    pub async fn save_collection(&self, coll: FitColl) -> Result<()> {
        let request = Request::with_payload(MessageKind::SaveFitColl, &coll)
            .map_err(crate::session::ChannelError::from)?;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(
                self.store.event_bus(),
                MessageKind::SaveFitColl,
                &envelope,
            ));
        }
        self.store
            .dispatch(StoreAction::FitCollSaved { coll })
            .await
    }

    /// Archives a collection. Its fits are untouched.
    pub async fn archive_collection(&self, id: FitCollId) -> Result<()> {
        let request = Request::with_payload(MessageKind::ArchiveFitColl, &json!({ "coll_id": id }))
            .map_err(crate::session::ChannelError::from)?;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(
                self.store.event_bus(),
                MessageKind::ArchiveFitColl,
                &envelope,
            ));
        }
        self.store
            .dispatch(StoreAction::FitCollArchived { id })
            .await
    }
}
