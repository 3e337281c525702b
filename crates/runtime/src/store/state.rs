//! Aggregate application state owned by the store worker.

use serde::{Deserialize, Serialize};

use closet_core::Closet;

/// Everything the store worker owns.
///
/// `closet` is always the viewer's own closet. Viewing another user swaps
/// `public_closet` in as the active view and back out again without ever
/// touching `closet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub closet: Closet,
    pub public_closet: Option<Closet>,
}

impl AppState {
    /// The closet currently on screen: the public one while viewing another
    /// user, the viewer's own otherwise.
    pub fn active_closet(&self) -> &Closet {
        self.public_closet.as_ref().unwrap_or(&self.closet)
    }

    /// True while another user's closet is the active view.
    pub fn is_viewing_public(&self) -> bool {
        self.public_closet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_core::{GarmentKind, Piece, PieceId};

    #[test]
    fn active_closet_prefers_the_public_view() {
        let mut state = AppState::default();
        state
            .closet
            .upsert_piece(Piece::new(PieceId(1), "mine", GarmentKind::Top));
        assert!(!state.is_viewing_public());
        assert_eq!(state.active_closet(), &state.closet);

        let mut public = Closet::empty();
        public.upsert_piece(Piece::new(PieceId(2), "theirs", GarmentKind::Top));
        state.public_closet = Some(public.clone());

        assert!(state.is_viewing_public());
        assert_eq!(state.active_closet(), &public);
        // The viewer's own closet is untouched by the swap.
        assert!(state.closet.piece(PieceId(1)).is_some());
    }
}
