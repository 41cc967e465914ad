//! Chess move generation.
//!
//! Destinations are generated per piece from simple offset and ray tables over
//! the mailbox board. Castling, en passant and promotion are not generated.

mod targets;

#[cfg(test)]
mod tests;

use common::Position;
use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::MoveCandidate;
use crate::evaluate::game_state::is_in_check;

use self::targets::pseudo_legal_targets;

/// Destinations reachable from a single square. A queen in the open has 27.
pub type PositionList = SmallVec<[Position; 28]>;

/// Whether destinations that leave the mover's own king in check are dropped.
///
/// Check detection itself must generate with `Disabled`; the filter calls check
/// detection, so generating with `Enabled` there would never terminate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckFilter {
    Enabled,
    Disabled,
}

impl Default for CheckFilter {
    fn default() -> Self {
        CheckFilter::Enabled
    }
}

/// Destinations for the piece on `position`. An empty square yields an empty list.
pub fn legal_moves(board: &Board, position: Position, filter: CheckFilter) -> PositionList {
    let piece = match board.get(position) {
        Some(piece) => piece,
        None => return PositionList::new(),
    };

    let mut targets = pseudo_legal_targets(board, position, piece);

    if filter == CheckFilter::Enabled {
        targets.retain(|to| !is_in_check(&board.apply_move(position, *to), piece.color));
    }

    targets
}

/// Every legal `{from, to}` pair for `color`, scanning the board row by row.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<MoveCandidate> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from, CheckFilter::Enabled)
                .into_iter()
                .map(move |to| MoveCandidate::new(from, to))
        })
        .collect()
}
