//! Authoritative closet state representation.
//!
//! This module owns the data structures describing pieces, fits, and
//! collections. The runtime's store clones or queries this state but mutates
//! it exclusively through its reducer; the composer works on its own session
//! state and only touches the closet via a saved fit.
pub mod types;

use std::collections::HashMap;

pub use types::{
    Fit, FitColl, FitCollId, FitId, FitPiece, FitPieceId, FitPieces, GarmentKind, LayerKind, Piece,
    PieceId, Slot, Tag,
};

/// Aggregate root holding every piece, fit, and collection for one user.
///
/// Server payloads arrive with the three wiring maps populated and fit
/// pieces unresolved; [`crate::hydrate::hydrate`] links the object graph and
/// clears the maps. A hydrated closet keeps them empty.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Closet {
    pub pieces: Vec<Piece>,
    pub fits: Vec<Fit>,
    pub fit_colls: Vec<FitColl>,

    /// Transient wiring: FitPiece id → occupying Piece id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fit_piece_id_map: HashMap<FitPieceId, PieceId>,
    /// Transient wiring: FitPiece id → layer Piece id (Top slot only).
    #[cfg_attr(feature = "serde", serde(default))]
    pub fit_layer_piece_id_map: HashMap<FitPieceId, PieceId>,
    /// Transient wiring: Collection id → ordered Fit ids.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fit_coll_fit_ids: HashMap<FitCollId, Vec<FitId>>,
}

impl Closet {
    /// Creates an empty closet with no wiring data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a reference to a piece by id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    /// Returns a mutable reference to a piece by id.
    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|piece| piece.id == id)
    }

    /// Returns a reference to a fit by id.
    pub fn fit(&self, id: FitId) -> Option<&Fit> {
        self.fits.iter().find(|fit| fit.id == id)
    }

    /// Returns a reference to a collection by id.
    pub fn fit_coll(&self, id: FitCollId) -> Option<&FitColl> {
        self.fit_colls.iter().find(|coll| coll.id == id)
    }

    /// Inserts or replaces a piece, matching on id.
    pub fn upsert_piece(&mut self, piece: Piece) {
        match self.piece_mut(piece.id) {
            Some(existing) => *existing = piece,
            None => self.pieces.push(piece),
        }
    }

    /// Removes a piece by id. Fits referencing it keep their dangling
    /// reference until the next hydration pass filters it out.
    pub fn remove_piece(&mut self, id: PieceId) {
        self.pieces.retain(|piece| piece.id != id);
    }

    /// Inserts or replaces a fit, matching on id.
    pub fn upsert_fit(&mut self, fit: Fit) {
        match self.fits.iter_mut().find(|existing| existing.id == fit.id) {
            Some(existing) => *existing = fit,
            None => self.fits.push(fit),
        }
    }

    /// Removes a fit and purges it from every collection's ordered list.
    pub fn remove_fit(&mut self, id: FitId) {
        self.fits.retain(|fit| fit.id != id);
        for coll in &mut self.fit_colls {
            coll.fits.retain(|fit_id| *fit_id != id);
        }
        self.fit_colls.retain(|coll| !coll.fits.is_empty());
    }

    /// Inserts or replaces a collection, matching on id.
    pub fn upsert_fit_coll(&mut self, coll: FitColl) {
        match self
            .fit_colls
            .iter_mut()
            .find(|existing| existing.id == coll.id)
        {
            Some(existing) => *existing = coll,
            None => self.fit_colls.push(coll),
        }
    }

    /// Removes a collection by id.
    pub fn remove_fit_coll(&mut self, id: FitCollId) {
        self.fit_colls.retain(|coll| coll.id != id);
    }

    /// True if none of the wiring maps carry data.
    pub fn wiring_is_empty(&self) -> bool {
        self.fit_piece_id_map.is_empty()
            && self.fit_layer_piece_id_map.is_empty()
            && self.fit_coll_fit_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_piece_replaces_by_id() {
        let mut closet = Closet::empty();
        closet.upsert_piece(Piece::new(PieceId(1), "img-1", GarmentKind::Top));
        closet.upsert_piece(
            Piece::new(PieceId(1), "img-1", GarmentKind::Top).with_favorite(true),
        );

        assert_eq!(closet.pieces.len(), 1);
        assert!(closet.piece(PieceId(1)).unwrap().favorite);
    }

    #[test]
    fn remove_fit_purges_collections() {
        let mut closet = Closet::empty();
        closet.upsert_fit(Fit::new(FitId(1), "monday"));
        closet.upsert_fit(Fit::new(FitId(2), "tuesday"));
        closet.upsert_fit_coll(FitColl::new(FitCollId(1), "week").with_fits(vec![FitId(1)]));
        closet.upsert_fit_coll(
            FitColl::new(FitCollId(2), "all").with_fits(vec![FitId(1), FitId(2)]),
        );

        closet.remove_fit(FitId(1));

        // The collection that only held the removed fit is dropped entirely.
        assert!(closet.fit_coll(FitCollId(1)).is_none());
        assert_eq!(closet.fit_coll(FitCollId(2)).unwrap().fits, vec![FitId(2)]);
    }
}
