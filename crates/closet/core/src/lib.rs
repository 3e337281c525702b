//! Deterministic closet logic and data types shared across clients.
//!
//! `closet-core` defines the canonical model (pieces, fits, collections),
//! payload hydration, random piece selection, and the fit-composer slot
//! state machine, and exposes pure APIs reusable by the runtime and offline
//! tools. All composer mutation flows through [`composer::ComposerEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod composer;
pub mod config;
pub mod env;
pub mod error;
pub mod hydrate;
pub mod select;
pub mod state;

pub use composer::{
    AssignAction, ComposeError, ComposeTransition, ComposerAction, ComposerEngine, ComposerState,
    FitPieceDraft, LayerState, RefreshAction, RefreshAllAction, RefreshLayerAction, RemoveAction,
    SaveFitRequest, SetOffsetAction, SlotEntry, SlotState, ToggleLayerAction, ToggleLockAction,
    TransitionPhase,
};
pub use config::ClosetConfig;
pub use env::{ComposeEnv, PcgRng, RngOracle, compute_seed};
pub use error::{ClosetError, ErrorSeverity, NeverError};
pub use hydrate::hydrate;
pub use select::{select_random, select_random_layer};
pub use state::{
    Closet, Fit, FitColl, FitCollId, FitId, FitPiece, FitPieceId, FitPieces, GarmentKind,
    LayerKind, Piece, PieceId, Slot, Tag,
};
