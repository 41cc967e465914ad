use core::fmt;

use common::Position;

use crate::board::Board;

/// A bare `{from, to}` pair, as produced by move generation and consumed by
/// `Board::apply_move`. A game can be replayed from these pairs alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub from: Position,
    pub to: Position,
}

impl MoveCandidate {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn apply(&self, board: &Board) -> Board {
        board.apply_move(self.from, self.to)
    }

    /// A candidate is a capture when its destination is occupied. Generated
    /// candidates never target a friendly piece.
    pub fn is_capture(&self, board: &Board) -> bool {
        board.is_occupied(self.to)
    }

    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[macro_export]
macro_rules! candidate {
    ($from:expr, $to:expr) => {
        $crate::chess_move::MoveCandidate::new($from, $to)
    };
}
