//! Composer action execution pipeline.
//!
//! [`ComposerEngine`] is the authoritative reducer for [`ComposerState`]. It
//! routes every operation through the transition phases and surfaces rich
//! error information for the runtime. All session mutations, including the
//! whole-fit shuffle, flow through the same execute() pipeline.

use crate::composer::kinds::{
    AssignAction, RefreshAction, RefreshAllAction, RefreshLayerAction, RemoveAction,
    SetOffsetAction, ToggleLayerAction, ToggleLockAction,
};
use crate::composer::{ComposeTransition, ComposerState};
use crate::env::ComposeEnv;
use crate::error::{ClosetError, ErrorSeverity};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// All operations the composer screen can issue, one variant per transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerAction {
    Assign(AssignAction),
    Refresh(RefreshAction),
    RefreshAll(RefreshAllAction),
    ToggleLock(ToggleLockAction),
    Remove(RemoveAction),
    SetOffset(SetOffsetAction),
    ToggleLayer(ToggleLayerAction),
    RefreshLayer(RefreshLayerAction),
}

/// Errors surfaced while executing an action through the composer engine.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("assign failed: {0}")]
    Assign(TransitionPhaseError<<AssignAction as ComposeTransition>::Error>),

    #[error("refresh failed: {0}")]
    Refresh(TransitionPhaseError<<RefreshAction as ComposeTransition>::Error>),

    #[error("refresh all failed: {0}")]
    RefreshAll(TransitionPhaseError<<RefreshAllAction as ComposeTransition>::Error>),

    #[error("toggle lock failed: {0}")]
    ToggleLock(TransitionPhaseError<<ToggleLockAction as ComposeTransition>::Error>),

    #[error("remove failed: {0}")]
    Remove(TransitionPhaseError<<RemoveAction as ComposeTransition>::Error>),

    #[error("set offset failed: {0}")]
    SetOffset(TransitionPhaseError<<SetOffsetAction as ComposeTransition>::Error>),

    #[error("toggle layer failed: {0}")]
    ToggleLayer(TransitionPhaseError<<ToggleLayerAction as ComposeTransition>::Error>),

    #[error("refresh layer failed: {0}")]
    RefreshLayer(TransitionPhaseError<<RefreshLayerAction as ComposeTransition>::Error>),
}

impl ComposeError {
    /// The pipeline stage that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ComposeError::Assign(e) => e.phase,
            ComposeError::Refresh(e) => e.phase,
            ComposeError::RefreshAll(e) => e.phase,
            ComposeError::ToggleLock(e) => e.phase,
            ComposeError::Remove(e) => e.phase,
            ComposeError::SetOffset(e) => e.phase,
            ComposeError::ToggleLayer(e) => e.phase,
            ComposeError::RefreshLayer(e) => e.phase,
        }
    }

    /// Severity of the underlying transition error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ComposeError::Assign(e) => e.error.severity(),
            ComposeError::Refresh(e) => e.error.severity(),
            ComposeError::RefreshAll(e) => e.error.severity(),
            ComposeError::ToggleLock(e) => e.error.severity(),
            ComposeError::Remove(e) => e.error.severity(),
            ComposeError::SetOffset(e) => e.error.severity(),
            ComposeError::ToggleLayer(e) => e.error.severity(),
            ComposeError::RefreshLayer(e) => e.error.severity(),
        }
    }
}

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

macro_rules! dispatch_transition {
    ($action:expr, $state:expr, $env:expr, { $($variant:ident => $err:ident),+ $(,)? }) => {{
        match $action {
            $(
                ComposerAction::$variant(transition) => {
                    drive_transition(transition, $state, $env).map_err(ComposeError::$err)
                }
            )+
        }
    }};
}

/// Composer engine that manages slot transitions for one session.
///
/// Every operation flows through the three-phase pipeline:
/// pre_validate → apply → post_validate
///
/// A successful execute bumps the session nonce so the next random roll
/// draws a fresh seed; rejected actions leave the nonce untouched.
pub struct ComposerEngine<'a> {
    state: &'a mut ComposerState,
}

impl<'a> ComposerEngine<'a> {
    /// Creates a new engine over the given session state.
    pub fn new(state: &'a mut ComposerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ComposerState {
        self.state
    }

    /// Executes an action by routing it through the matching transition.
    pub fn execute(
        &mut self,
        env: &ComposeEnv<'_>,
        action: &ComposerAction,
    ) -> Result<(), ComposeError> {
        dispatch_transition!(action, self.state, env, {
            Assign => Assign,
            Refresh => Refresh,
            RefreshAll => RefreshAll,
            ToggleLock => ToggleLock,
            Remove => Remove,
            SetOffset => SetOffset,
            ToggleLayer => ToggleLayer,
            RefreshLayer => RefreshLayer,
        })?;

        self.state.bump_nonce();
        Ok(())
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut ComposerState,
    env: &ComposeEnv<'_>,
) -> TransitionResult<T::Error>
where
    T: ComposeTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}
