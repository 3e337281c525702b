mod common;
mod fit;
mod piece;

pub use common::{FitCollId, FitId, FitPieceId, PieceId, Slot};
pub use fit::{Fit, FitColl, FitPiece, FitPieces};
pub use piece::{GarmentKind, LayerKind, Piece, Tag};
