use crate::board::Board;
use crate::chess_move::MoveCandidate;

/// Moves captures ahead of quiet moves, keeping generation order within each
/// group.
pub fn sort_chess_moves(moves: &mut [MoveCandidate], board: &Board) {
    // `sort_by_key` is stable, and `false` sorts before `true`
    moves.sort_by_key(|candidate| !candidate.is_capture(board));
}
