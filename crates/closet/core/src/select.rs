//! Random piece selection.
//!
//! Shared by the composer's refresh transitions and the create-mode
//! initializer. Selection is uniform over the candidates that match the
//! requested garment kind, excluding the currently shown piece so a refresh
//! always makes visible progress when an alternative exists.

use crate::env::RngOracle;
use crate::state::{GarmentKind, Piece, PieceId};

/// Picks a random piece of the given garment kind.
///
/// `current` is excluded from the candidate set by id. Exactly one remaining
/// candidate is returned deterministically (not as a one-element random
/// draw), which guarantees progress when only one alternative exists. An
/// empty candidate set yields `None`; callers keep showing the previous
/// piece or render a placeholder.
pub fn select_random<'a>(
    kind: GarmentKind,
    pieces: &'a [Piece],
    current: Option<PieceId>,
    rng: &dyn RngOracle,
    seed: u64,
) -> Option<&'a Piece> {
    select_matching(pieces, current, rng, seed, |piece| piece.garment == kind)
}

/// Picks a random outer piece for the Top slot's layer.
///
/// Same contract as [`select_random`], filtering on layer kind instead of
/// garment kind.
pub fn select_random_layer<'a>(
    pieces: &'a [Piece],
    current: Option<PieceId>,
    rng: &dyn RngOracle,
    seed: u64,
) -> Option<&'a Piece> {
    select_matching(pieces, current, rng, seed, |piece| piece.is_layerable())
}

fn select_matching<'a, F>(
    pieces: &'a [Piece],
    current: Option<PieceId>,
    rng: &dyn RngOracle,
    seed: u64,
    matches: F,
) -> Option<&'a Piece>
where
    F: Fn(&Piece) -> bool,
{
    let candidates: Vec<&Piece> = pieces
        .iter()
        .filter(|piece| matches(piece) && Some(piece.id) != current)
        .collect();

    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        len => Some(candidates[rng.pick_index(seed, len)]),
    }
}
