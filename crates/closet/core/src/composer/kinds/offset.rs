//! Vertical offset adjustment.

use crate::composer::{ComposeTransition, ComposerState};
use crate::env::ComposeEnv;
use crate::error::NeverError;
use crate::state::Slot;

/// Records a slot's vertical display offset.
///
/// Valid on any slot, assigned or not. The offset is part of the session's
/// slot translation and is persisted with whatever piece ends up saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetOffsetAction {
    pub slot: Slot,
    pub offset_y: i32,
}

impl SetOffsetAction {
    pub fn new(slot: Slot, offset_y: i32) -> Self {
        Self { slot, offset_y }
    }
}

impl ComposeTransition for SetOffsetAction {
    type Error = NeverError;

    fn apply(&self, state: &mut ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        state.slot_mut(self.slot).offset_y = self.offset_y;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn offset_applies_to_empty_slots() {
        let pieces = Vec::new();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 1);

        SetOffsetAction::new(Slot::Footwear, 12)
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(state.slot(Slot::Footwear).offset_y, 12);
    }
}
