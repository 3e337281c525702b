//! Manual piece assignment.

use crate::composer::{ComposeTransition, ComposerState, SlotState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity};
use crate::state::{GarmentKind, PieceId, Slot};

/// Assigns a deliberately chosen piece to a slot.
///
/// The slot always ends up locked: a manual pick immediately followed by a
/// whole-fit refresh must not be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignAction {
    pub slot: Slot,
    pub piece: PieceId,
}

impl AssignAction {
    pub fn new(slot: Slot, piece: PieceId) -> Self {
        Self { slot, piece }
    }
}

impl ComposeTransition for AssignAction {
    type Error = AssignError;

    fn pre_validate(&self, _state: &ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        let piece = env
            .piece(self.piece)
            .ok_or(AssignError::PieceNotFound { piece: self.piece })?;

        if piece.garment != self.slot.garment() {
            return Err(AssignError::GarmentMismatch {
                slot: self.slot,
                garment: piece.garment,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        state.slot_mut(self.slot).state = SlotState::Assigned {
            piece: self.piece,
            locked: true,
        };
        Ok(())
    }

    fn post_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        debug_assert!(
            state.slot(self.slot).state.is_locked(),
            "manual assignment must leave the slot locked"
        );
        Ok(())
    }
}

/// Errors that can occur while assigning a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("piece {piece} is not in the closet")]
    PieceNotFound { piece: PieceId },

    #[error("piece of kind {garment} cannot occupy the {slot} slot")]
    GarmentMismatch { slot: Slot, garment: GarmentKind },
}

impl ClosetError for AssignError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Piece;

    fn pool() -> Vec<Piece> {
        vec![
            Piece::new(PieceId(1), "img-1", GarmentKind::Top),
            Piece::new(PieceId(2), "img-2", GarmentKind::Bottom),
        ]
    }

    #[test]
    fn manual_pick_locks_the_slot() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 7);

        let action = AssignAction::new(Slot::Top, PieceId(1));
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();

        assert_eq!(state.slot(Slot::Top).state.piece(), Some(PieceId(1)));
        assert!(state.slot(Slot::Top).state.is_locked());
    }

    #[test]
    fn rejects_unknown_piece() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let state = ComposerState::create(&env, 7);

        let err = AssignAction::new(Slot::Top, PieceId(99))
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(err, AssignError::PieceNotFound { piece: PieceId(99) });
    }

    #[test]
    fn rejects_wrong_garment_kind() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let state = ComposerState::create(&env, 7);

        let err = AssignAction::new(Slot::Top, PieceId(2))
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(
            err,
            AssignError::GarmentMismatch {
                slot: Slot::Top,
                garment: GarmentKind::Bottom,
            }
        );
    }
}
