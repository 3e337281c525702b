//! Save payload construction.
//!
//! A save transmits only the occupied slots; removed and never-assigned
//! slots are simply omitted, which is how slot removal is realized
//! server-side. There is no tombstone entry.

use crate::composer::{ComposerState, LayerState, SlotState};
use crate::state::{FitId, PieceId, Slot};

/// One slot's contribution to a fit save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitPieceDraft {
    pub slot: Slot,
    pub piece: PieceId,
    /// Only ever set on the Top slot's entry.
    pub layer_piece: Option<PieceId>,
    pub offset_y: i32,
}

impl FitPieceDraft {
    /// Wire index of the draft's slot (0–3).
    pub fn slot_index(&self) -> usize {
        self.slot.index()
    }
}

/// Payload for a fit save request.
///
/// `fit_id` is `None` when the session creates a new fit; the server assigns
/// ids and echoes them back in the response.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveFitRequest {
    pub fit_id: Option<FitId>,
    pub name: String,
    pub pieces: Vec<FitPieceDraft>,
}

impl ComposerState {
    /// Builds the save payload for this session.
    ///
    /// Ordered by slot index. Empty slots contribute nothing; the layer
    /// piece rides on the Top entry and is dropped with it if the Top slot
    /// is empty at save time.
    pub fn save_request(&self, name: impl Into<String>) -> SaveFitRequest {
        let mut pieces = Vec::new();

        for slot in Slot::ALL {
            let entry = self.slot(slot);
            if let SlotState::Assigned { piece, .. } = entry.state {
                let layer_piece = match (slot, self.layer) {
                    (Slot::Top, LayerState::On { piece }) => Some(piece),
                    _ => None,
                };
                pieces.push(FitPieceDraft {
                    slot,
                    piece,
                    layer_piece,
                    offset_y: entry.offset_y,
                });
            }
        }

        SaveFitRequest {
            fit_id: self.fit_id,
            name: name.into(),
            pieces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::kinds::RemoveAction;
    use crate::composer::{ComposeTransition, ComposerEngine};
    use crate::env::{ComposeEnv, PcgRng};
    use crate::state::{GarmentKind, LayerKind, Piece};

    fn pool() -> Vec<Piece> {
        vec![
            Piece::new(PieceId(1), "img-1", GarmentKind::Headwear),
            Piece::new(PieceId(2), "img-2", GarmentKind::Top),
            Piece::new(PieceId(3), "img-3", GarmentKind::Bottom),
            Piece::new(PieceId(4), "img-4", GarmentKind::Footwear),
            Piece::new(PieceId(5), "img-5", GarmentKind::Top).with_layer(LayerKind::Outer),
        ]
    }

    #[test]
    fn removed_slots_are_omitted_from_the_payload() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 2);

        RemoveAction::new(Slot::Headwear)
            .apply(&mut state, &env)
            .unwrap();
        RemoveAction::new(Slot::Footwear)
            .apply(&mut state, &env)
            .unwrap();

        let request = state.save_request("rainy day");
        assert_eq!(request.pieces.len(), 2);
        let slots: Vec<_> = request.pieces.iter().map(|draft| draft.slot).collect();
        assert_eq!(slots, vec![Slot::Top, Slot::Bottom]);
        assert_eq!(request.fit_id, None);
        assert_eq!(request.name, "rainy day");
    }

    #[test]
    fn layer_piece_rides_on_the_top_entry_only() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 2);
        let mut engine = ComposerEngine::new(&mut state);
        engine
            .execute(
                &env,
                &crate::composer::ComposerAction::ToggleLayer(
                    crate::composer::kinds::ToggleLayerAction,
                ),
            )
            .unwrap();

        let request = state.save_request("layered");
        for draft in &request.pieces {
            if draft.slot == Slot::Top {
                assert_eq!(draft.layer_piece, Some(PieceId(5)));
            } else {
                assert_eq!(draft.layer_piece, None);
            }
        }
    }

    #[test]
    fn offsets_are_persisted_per_draft() {
        let pieces = pool();
        let rng = PcgRng;
        let env = ComposeEnv::new(&pieces, &rng);
        let mut state = ComposerState::create(&env, 2);
        state.slot_mut(Slot::Bottom).offset_y = 18;

        let request = state.save_request("offsets");
        let bottom = request
            .pieces
            .iter()
            .find(|draft| draft.slot == Slot::Bottom)
            .unwrap();
        assert_eq!(bottom.offset_y, 18);
    }

    #[test]
    fn edit_session_carries_the_fit_id() {
        use crate::state::{Fit, FitPiece, FitPieceId, FitPieces};

        let mut fit_pieces = FitPieces::default();
        fit_pieces
            .push(
                FitPiece::new(FitPieceId(40), Slot::Top)
                    .with_piece(PieceId(2))
                    .with_offset_y(-6),
            )
            .unwrap();
        let fit = Fit::new(FitId(9), "saved").with_pieces(fit_pieces);

        let state = ComposerState::edit(&fit, 77);
        let request = state.save_request("saved");

        assert_eq!(request.fit_id, Some(FitId(9)));
        assert_eq!(request.pieces.len(), 1);
        assert_eq!(request.pieces[0].piece, PieceId(2));
        assert_eq!(request.pieces[0].offset_y, -6);
    }
}
