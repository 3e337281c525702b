//! Fits (outfits) and fit collections.

use bounded_vector::BoundedVec;

use super::common::{FitCollId, FitId, FitPieceId, PieceId, Slot};
use crate::config::ClosetConfig;

/// Piece list of a fit: at most one entry per slot.
pub type FitPieces = BoundedVec<FitPiece, 0, { ClosetConfig::MAX_FIT_PIECES }>;

/// Association between a fit and the piece occupying one of its slots.
///
/// Raw server payloads carry these with `piece` unset; the hydrator resolves
/// the reference through the closet's wiring maps. After hydration `piece`
/// is always `Some`; unresolvable entries are dropped instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitPiece {
    pub id: FitPieceId,
    pub slot: Slot,
    /// Weak reference to the occupying piece, resolved during hydration.
    pub piece: Option<PieceId>,
    /// Outer layer piece shown over the Top slot. Only meaningful when
    /// `slot == Slot::Top`.
    pub layer_piece: Option<PieceId>,
    /// Vertical display offset in pixels.
    pub offset_y: i32,
}

impl FitPiece {
    pub fn new(id: FitPieceId, slot: Slot) -> Self {
        Self {
            id,
            slot,
            piece: None,
            layer_piece: None,
            offset_y: 0,
        }
    }

    pub fn with_piece(mut self, piece: PieceId) -> Self {
        self.piece = Some(piece);
        self
    }

    pub fn with_layer_piece(mut self, layer_piece: PieceId) -> Self {
        self.layer_piece = Some(layer_piece);
        self
    }

    pub fn with_offset_y(mut self, offset_y: i32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

/// A named outfit composed of up to four slotted pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fit {
    pub id: FitId,
    pub name: String,
    pub pieces: FitPieces,
}

impl Fit {
    pub fn new(id: FitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pieces: FitPieces::default(),
        }
    }

    pub fn with_pieces(mut self, pieces: FitPieces) -> Self {
        self.pieces = pieces;
        self
    }

    /// The fit piece occupying `slot`, if any.
    pub fn piece_in_slot(&self, slot: Slot) -> Option<&FitPiece> {
        self.pieces.iter().find(|fp| fp.slot == slot)
    }
}

/// A named ordered grouping of fits.
///
/// Fits are referenced by id; the hydrator rebuilds the list from the
/// closet's `fit_coll_fit_ids` wiring map and drops unresolved entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitColl {
    pub id: FitCollId,
    pub name: String,
    pub fits: Vec<FitId>,
}

impl FitColl {
    pub fn new(id: FitCollId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fits: Vec::new(),
        }
    }

    pub fn with_fits(mut self, fits: Vec<FitId>) -> Self {
        self.fits = fits;
        self
    }
}
