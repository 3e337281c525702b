//! Fit composer: the slot state machine behind the outfit screen.
//!
//! A composer session owns four independent garment slots plus the Top
//! slot's optional layer piece. Every user operation (assign, refresh, lock,
//! remove, offset, layer toggles) is a transition driven through
//! [`ComposerEngine`]'s pre_validate → apply → post_validate pipeline, so
//! the session state can only change along the documented edges.

pub mod engine;
pub mod kinds;
pub mod save;
pub mod transition;

pub use engine::{ComposeError, ComposerAction, ComposerEngine, TransitionPhase, TransitionPhaseError};
pub use kinds::{
    AssignAction, AssignError, LayerError, LockError, RefreshAction, RefreshAllAction,
    RefreshError, RefreshLayerAction, RemoveAction, RemoveError, SetOffsetAction,
    ToggleLayerAction, ToggleLockAction,
};
pub use save::{FitPieceDraft, SaveFitRequest};
pub use transition::ComposeTransition;

use crate::config::ClosetConfig;
use crate::env::{ComposeEnv, compute_seed};
use crate::select::{select_random, select_random_layer};
use crate::state::{Fit, FitId, Piece, PieceId, Slot};

/// State of a single garment slot.
///
/// Manual picks always arrive locked; randomized picks arrive unlocked so a
/// whole-fit refresh can replace them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotState {
    /// No piece assigned; the slot is not rendered and not saved.
    #[default]
    Empty,
    /// A piece occupies the slot. `locked` shields it from `refresh_all`.
    Assigned { piece: PieceId, locked: bool },
}

impl SlotState {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotState::Empty)
    }

    /// The assigned piece, if any.
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            SlotState::Empty => None,
            SlotState::Assigned { piece, .. } => Some(*piece),
        }
    }

    /// True only for a locked assigned slot.
    pub fn is_locked(&self) -> bool {
        matches!(self, SlotState::Assigned { locked: true, .. })
    }
}

/// Per-slot session entry: the state machine plus display bookkeeping.
///
/// The vertical offset survives refreshes and removal: it is the per-fit
/// slot translation, not a property of the assigned piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotEntry {
    pub state: SlotState,
    pub offset_y: i32,
}

impl Default for SlotEntry {
    fn default() -> Self {
        Self {
            state: SlotState::Empty,
            offset_y: ClosetConfig::DEFAULT_OFFSET_Y,
        }
    }
}

/// State of the Top slot's optional outer layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerState {
    #[default]
    Off,
    On { piece: PieceId },
}

impl LayerState {
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            LayerState::Off => None,
            LayerState::On { piece } => Some(*piece),
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, LayerState::On { .. })
    }
}

/// One outfit-composition session.
///
/// Created either fully randomized (`create`), from an existing fit
/// (`edit`), or randomized around one pinned piece (`create_around`). All
/// mutation flows through [`ComposerEngine::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposerState {
    /// Seed fixed at session start; combined with the transition nonce to
    /// derive one seed per random roll.
    session_seed: u64,
    /// Transition sequence number, bumped by the engine per executed action.
    nonce: u64,
    /// Target fit when editing; `None` means the save creates a new fit.
    pub fit_id: Option<FitId>,
    slots: [SlotEntry; ClosetConfig::SLOT_COUNT],
    pub layer: LayerState,
}

/// Roll context for primary slot picks.
const ROLL_SLOT: u32 = 0;
/// Roll context for layer picks, so a layer roll in the same transition
/// never reuses the Top slot's seed.
const ROLL_LAYER: u32 = 1;

impl ComposerState {
    /// Starts a fully randomized session: every slot gets one selector call
    /// and comes up unlocked; slots without any matching piece stay empty.
    pub fn create(env: &ComposeEnv<'_>, session_seed: u64) -> Self {
        let mut slots = [SlotEntry::default(); ClosetConfig::SLOT_COUNT];
        for slot in Slot::ALL {
            let seed = compute_seed(session_seed, 0, slot.index() as u32, ROLL_SLOT);
            if let Some(piece) =
                select_random(slot.garment(), env.pieces(), None, env.rng(), seed)
            {
                slots[slot.index()].state = SlotState::Assigned {
                    piece: piece.id,
                    locked: false,
                };
            }
        }

        Self {
            session_seed,
            nonce: 1, // nonce 0 was consumed by the initial rolls
            fit_id: None,
            slots,
            layer: LayerState::Off,
        }
    }

    /// Starts a randomized session with one slot pre-assigned and locked.
    ///
    /// Backs the "create a fit from this piece" deep link: the seed piece is
    /// a deliberate choice, so it must survive the first `refresh_all`.
    /// A seed piece without a slot (accessory/unknown) degrades to a plain
    /// randomized session.
    pub fn create_around(env: &ComposeEnv<'_>, session_seed: u64, seed_piece: &Piece) -> Self {
        let mut state = Self::create(env, session_seed);
        if let Some(slot) = seed_piece.garment.slot() {
            state.slots[slot.index()].state = SlotState::Assigned {
                piece: seed_piece.id,
                locked: true,
            };
        }
        state
    }

    /// Starts an edit session seeded from an existing fit.
    ///
    /// Slots come up unlocked; editing does not pre-pin anything.
    pub fn edit(fit: &Fit, session_seed: u64) -> Self {
        let mut slots = [SlotEntry::default(); ClosetConfig::SLOT_COUNT];
        let mut layer = LayerState::Off;

        for fit_piece in fit.pieces.iter() {
            let entry = &mut slots[fit_piece.slot.index()];
            if let Some(piece) = fit_piece.piece {
                entry.state = SlotState::Assigned {
                    piece,
                    locked: false,
                };
            }
            entry.offset_y = fit_piece.offset_y;

            if fit_piece.slot == Slot::Top
                && let Some(layer_piece) = fit_piece.layer_piece
            {
                layer = LayerState::On { piece: layer_piece };
            }
        }

        Self {
            session_seed,
            nonce: 0,
            fit_id: Some(fit.id),
            slots,
            layer,
        }
    }

    pub fn slot(&self, slot: Slot) -> &SlotEntry {
        &self.slots[slot.index()]
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut SlotEntry {
        &mut self.slots[slot.index()]
    }

    pub fn session_seed(&self) -> u64 {
        self.session_seed
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub(crate) fn bump_nonce(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
    }

    /// Seed for this transition's primary roll on `slot`.
    pub(crate) fn slot_seed(&self, slot: Slot) -> u64 {
        compute_seed(self.session_seed, self.nonce, slot.index() as u32, ROLL_SLOT)
    }

    /// Seed for this transition's layer roll.
    pub(crate) fn layer_seed(&self) -> u64 {
        compute_seed(
            self.session_seed,
            self.nonce,
            Slot::Top.index() as u32,
            ROLL_LAYER,
        )
    }

    /// Re-randomizes `slot` excluding its current piece, keeping the current
    /// piece when no alternative exists.
    pub(crate) fn reroll_slot(&mut self, slot: Slot, env: &ComposeEnv<'_>) {
        let seed = self.slot_seed(slot);
        let entry = self.slot_mut(slot);
        if let SlotState::Assigned {
            piece,
            locked: false,
        } = entry.state
            && let Some(next) =
                select_random(slot.garment(), env.pieces(), Some(piece), env.rng(), seed)
        {
            entry.state = SlotState::Assigned {
                piece: next.id,
                locked: false,
            };
        }
    }

    /// Re-randomizes the layer piece excluding the current one, keeping it
    /// when no alternative exists.
    pub(crate) fn reroll_layer(&mut self, env: &ComposeEnv<'_>) {
        let seed = self.layer_seed();
        if let LayerState::On { piece } = self.layer
            && let Some(next) = select_random_layer(env.pieces(), Some(piece), env.rng(), seed)
        {
            self.layer = LayerState::On { piece: next.id };
        }
    }
}
