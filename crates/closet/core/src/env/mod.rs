//! Read-only environment facts for composer transitions.
//!
//! Transitions never reach into the store directly; everything they may
//! consult (the candidate piece pool and the random source) is handed in
//! through [`ComposeEnv`]. This keeps the slot state machine a pure function
//! of (state, env, action).

pub mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::state::{GarmentKind, Piece, PieceId, Slot};

/// Borrowed environment bundle passed to every composer transition.
#[derive(Clone, Copy)]
pub struct ComposeEnv<'a> {
    pieces: &'a [Piece],
    rng: &'a dyn RngOracle,
}

impl<'a> ComposeEnv<'a> {
    pub fn new(pieces: &'a [Piece], rng: &'a dyn RngOracle) -> Self {
        Self { pieces, rng }
    }

    /// The full candidate pool (the closet's piece list).
    pub fn pieces(&self) -> &'a [Piece] {
        self.pieces
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    /// Looks up a piece by id in the candidate pool.
    pub fn piece(&self, id: PieceId) -> Option<&'a Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    /// True if any piece in the pool matches the slot's garment kind.
    pub fn has_candidates(&self, slot: Slot) -> bool {
        let kind: GarmentKind = slot.garment();
        self.pieces.iter().any(|piece| piece.garment == kind)
    }
}
