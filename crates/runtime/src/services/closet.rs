//! Closet synchronization and piece management.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use closet_core::{Closet, Piece, PieceId, hydrate};

use crate::api::{Result, RuntimeError, StoreHandle};
use crate::session::{MessageKind, Request, SessionChannel};
use crate::store::StoreAction;

use super::reject;

/// Fetches closet payloads, hydrates them, and keeps the store in sync.
pub struct ClosetService {
    channel: Arc<dyn SessionChannel>,
    store: StoreHandle,
}

impl ClosetService {
    pub fn new(channel: Arc<dyn SessionChannel>, store: StoreHandle) -> Self {
        Self { channel, store }
    }

    /// Fetches the viewer's closet and replaces the store's copy.
    pub async fn refresh(&self) -> Result<()> {
        let closet = self
            .fetch_closet(Request::new(MessageKind::FetchCloset))
            .await?;
        self.store
            .dispatch(StoreAction::ClosetLoaded { closet })
            .await
    }

    /// Fetches another user's closet and swaps it in as the active view.
    pub async fn enter_public_closet(&self, owner: &str) -> Result<()> {
        let request = Request::with_payload(
            MessageKind::FetchPublicCloset,
            &json!({ "owner": owner }),
        )
        .map_err(crate::session::ChannelError::from)?;
        let closet = self.fetch_closet(request).await?;
        self.store
            .dispatch(StoreAction::PublicClosetEntered { closet })
            .await
    }

    /// Restores the viewer's own closet as the active view. Local only.
    pub async fn leave_public_closet(&self) -> Result<()> {
        self.store.dispatch(StoreAction::PublicClosetLeft).await
    }

    /// Persists a piece edit (favorite, garment kind, tags) and mirrors it
    /// into the store on success.
    pub async fn update_piece(&self, piece: Piece) -> Result<()> {
        let request = Request::with_payload(MessageKind::UpdatePiece, &piece)
            .map_err(crate::session::ChannelError::from)?;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(
                self.store.event_bus(),
                MessageKind::UpdatePiece,
                &envelope,
            ));
        }
        self.store
            .dispatch(StoreAction::PieceUpserted { piece })
            .await
    }

    /// Archives a piece. Fits referencing it keep a dangling reference
    /// until the next refresh hydrates it away.
    pub async fn archive_piece(&self, id: PieceId) -> Result<()> {
        let request = Request::with_payload(MessageKind::ArchivePiece, &json!({ "piece_id": id }))
            .map_err(crate::session::ChannelError::from)?;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(
                self.store.event_bus(),
                MessageKind::ArchivePiece,
                &envelope,
            ));
        }
        self.store.dispatch(StoreAction::PieceArchived { id }).await
    }

    async fn fetch_closet(&self, request: Request) -> Result<Closet> {
        let kind = request.kind;
        let envelope = self.channel.send(request).await?;
        if !envelope.is_ok() {
            return Err(reject(self.store.event_bus(), kind, &envelope));
        }

        let raw: Closet = envelope
            .decode()
            .map_err(|source| RuntimeError::Decode { kind, source })?;
        let raw_fits = raw.fits.len();

        let closet = hydrate(raw);
        debug!(
            target: "runtime::closet",
            %kind,
            pieces = closet.pieces.len(),
            fits = closet.fits.len(),
            dropped_fits = raw_fits - closet.fits.len(),
            "closet payload hydrated"
        );
        Ok(closet)
    }
}
