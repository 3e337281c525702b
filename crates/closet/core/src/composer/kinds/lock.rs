//! Slot lock toggling.

use crate::composer::{ComposeTransition, ComposerState, SlotState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity};
use crate::state::Slot;

/// Flips a slot's lock flag without touching the assigned piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLockAction {
    pub slot: Slot,
}

impl ToggleLockAction {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl ComposeTransition for ToggleLockAction {
    type Error = LockError;

    fn pre_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        if state.slot(self.slot).state.is_empty() {
            return Err(LockError::SlotEmpty { slot: self.slot });
        }
        Ok(())
    }

    fn apply(&self, state: &mut ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        let entry = state.slot_mut(self.slot);
        if let SlotState::Assigned { piece, locked } = entry.state {
            entry.state = SlotState::Assigned {
                piece,
                locked: !locked,
            };
        }
        Ok(())
    }
}

/// Errors that can occur while toggling a slot lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LockError {
    #[error("{slot} slot has no piece to lock")]
    SlotEmpty { slot: Slot },
}

impl ClosetError for LockError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
