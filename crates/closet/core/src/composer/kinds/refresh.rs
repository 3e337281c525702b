//! Slot re-randomization.

use crate::composer::{ComposeTransition, ComposerState, SlotState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity, NeverError};
use crate::state::Slot;

/// Re-randomizes a single unlocked slot, excluding its current piece.
///
/// When the selector finds no alternative the current piece stays put; the
/// slot never empties out from a refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshAction {
    pub slot: Slot,
}

impl RefreshAction {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl ComposeTransition for RefreshAction {
    type Error = RefreshError;

    fn pre_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        match state.slot(self.slot).state {
            SlotState::Empty => Err(RefreshError::SlotEmpty { slot: self.slot }),
            SlotState::Assigned { locked: true, .. } => {
                Err(RefreshError::SlotLocked { slot: self.slot })
            }
            SlotState::Assigned { locked: false, .. } => Ok(()),
        }
    }

    fn apply(&self, state: &mut ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        state.reroll_slot(self.slot, env);
        Ok(())
    }

    fn post_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        debug_assert!(
            !state.slot(self.slot).state.is_empty(),
            "refresh must never empty a slot"
        );
        Ok(())
    }
}

/// Whole-fit shuffle: refreshes every unlocked assigned slot.
///
/// Locked slots are the user's pins and are left untouched; empty slots stay
/// empty. Always valid, even on a fully locked or fully empty session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RefreshAllAction;

impl ComposeTransition for RefreshAllAction {
    type Error = NeverError;

    fn apply(&self, state: &mut ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        for slot in Slot::ALL {
            state.reroll_slot(slot, env);
        }
        Ok(())
    }
}

/// Errors that can occur while refreshing a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error("{slot} slot has no piece to refresh")]
    SlotEmpty { slot: Slot },

    #[error("{slot} slot is locked")]
    SlotLocked { slot: Slot },
}

impl ClosetError for RefreshError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
