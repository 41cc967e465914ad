//! Common types re-exported for convenience.

pub use crate::accuracy::{score_move, AccuracyClass, MoveAccuracy};
pub use crate::board::color::Color;
pub use crate::board::piece::{Piece, PieceKind};
pub use crate::board::Board;
pub use crate::chess_move::{notation, ChessMove, MoveCandidate};
pub use crate::evaluate::{evaluate, is_checkmate, is_in_check, is_stalemate, GameEnding};
pub use crate::move_generator::{all_legal_moves, legal_moves, CheckFilter};
pub use crate::opponent::choose_move;
pub use common::Position;
