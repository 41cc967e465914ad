//! Check, checkmate and stalemate queries. Every query is recomputed from the
//! board it is given; nothing is cached between calls.

use common::Position;

use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::Board;
use crate::move_generator::{legal_moves, CheckFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

pub fn find_king(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(position, _)| position)
}

/// True when any opposing piece attacks `color`'s king. A board without that
/// king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king = match find_king(board, color) {
        Some(king) => king,
        None => return false,
    };

    board.pieces(color.opposite()).any(|(from, _)| {
        legal_moves(board, from, CheckFilter::Disabled).contains(&king)
    })
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from, CheckFilter::Enabled).is_empty())
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Returns the game ending for the side to move, or `None` if the game goes on.
/// Repetition and move-count draws are not detected.
pub fn game_ending(board: &Board, color: Color) -> Option<GameEnding> {
    if has_any_legal_move(board, color) {
        return None;
    }

    if is_in_check(board, color) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}
