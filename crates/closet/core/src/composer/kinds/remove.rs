//! Slot removal.

use crate::composer::{ComposeTransition, ComposerState, SlotState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity};
use crate::state::Slot;

/// Empties a slot. The slot disappears from the rendered fit and is omitted
/// from the next save payload, which is how removal reaches the server.
///
/// The slot's vertical offset is kept; it belongs to the session, not the
/// removed piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveAction {
    pub slot: Slot,
}

impl RemoveAction {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl ComposeTransition for RemoveAction {
    type Error = RemoveError;

    fn pre_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        if state.slot(self.slot).state.is_empty() {
            return Err(RemoveError::SlotEmpty { slot: self.slot });
        }
        Ok(())
    }

    fn apply(&self, state: &mut ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        state.slot_mut(self.slot).state = SlotState::Empty;
        Ok(())
    }
}

/// Errors that can occur while removing a slot's piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoveError {
    #[error("{slot} slot is already empty")]
    SlotEmpty { slot: Slot },
}

impl ClosetError for RemoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{GarmentKind, Piece, PieceId};

    #[test]
    fn remove_empties_any_assigned_slot() {
        let pieces = vec![Piece::new(PieceId(1), "img-1", GarmentKind::Top)];
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 9);

        // Works on locked slots too.
        state.slot_mut(Slot::Top).state = SlotState::Assigned {
            piece: PieceId(1),
            locked: true,
        };

        RemoveAction::new(Slot::Top).apply(&mut state, &env).unwrap();
        assert!(state.slot(Slot::Top).state.is_empty());
    }

    #[test]
    fn remove_keeps_the_slot_offset() {
        let pieces = vec![Piece::new(PieceId(1), "img-1", GarmentKind::Top)];
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 9);
        state.slot_mut(Slot::Top).offset_y = -24;

        RemoveAction::new(Slot::Top).apply(&mut state, &env).unwrap();
        assert_eq!(state.slot(Slot::Top).offset_y, -24);
    }
}
