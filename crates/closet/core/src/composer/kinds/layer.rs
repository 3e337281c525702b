//! Layer piece toggling and re-randomization.
//!
//! The layer is independent of the Top slot's lock state: pinning the top
//! never pins the jacket over it.

use crate::composer::{ComposeTransition, ComposerState, LayerState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity};
use crate::select::select_random_layer;

/// Toggles the Top slot's outer layer on or off.
///
/// Turning the layer on picks a random outer piece; turning it off just
/// drops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ToggleLayerAction;

impl ComposeTransition for ToggleLayerAction {
    type Error = LayerError;

    fn pre_validate(
        &self,
        state: &ComposerState,
        env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        if !state.layer.is_on() && !env.pieces().iter().any(|piece| piece.is_layerable()) {
            return Err(LayerError::NoOuterPieces);
        }
        Ok(())
    }

    fn apply(&self, state: &mut ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        match state.layer {
            LayerState::On { .. } => {
                state.layer = LayerState::Off;
            }
            LayerState::Off => {
                let seed = state.layer_seed();
                // pre_validate guarantees at least one candidate
                if let Some(piece) = select_random_layer(env.pieces(), None, env.rng(), seed) {
                    state.layer = LayerState::On { piece: piece.id };
                }
            }
        }
        Ok(())
    }
}

/// Re-randomizes the layer piece, excluding the current one.
///
/// As with slot refresh, no alternative means the current piece stays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RefreshLayerAction;

impl ComposeTransition for RefreshLayerAction {
    type Error = LayerError;

    fn pre_validate(
        &self,
        state: &ComposerState,
        _env: &ComposeEnv<'_>,
    ) -> Result<(), Self::Error> {
        if !state.layer.is_on() {
            return Err(LayerError::LayerOff);
        }
        Ok(())
    }

    fn apply(&self, state: &mut ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        state.reroll_layer(env);
        Ok(())
    }
}

/// Errors that can occur on layer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
    /// The closet holds no outer pieces at all.
    #[error("no outer pieces available for layering")]
    NoOuterPieces,

    #[error("layer is not enabled")]
    LayerOff,
}

impl ClosetError for LayerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LayerError::NoOuterPieces => ErrorSeverity::Recoverable,
            LayerError::LayerOff => ErrorSeverity::Validation,
        }
    }
}
