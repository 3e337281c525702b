use crate::composer::ComposerState;
use crate::env::ComposeEnv;

/// Defines how a concrete composer operation mutates the slot state machine.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to the candidate pool and random source via
/// [`ComposeEnv`] and must stay free of side effects outside the session
/// state.
pub trait ComposeTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the operation by mutating the session state directly.
    /// Implementations should assume `pre_validate` has already run
    /// successfully.
    fn apply(&self, state: &mut ComposerState, env: &ComposeEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &ComposerState, _env: &ComposeEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
