use core::fmt;

use common::Position;

use crate::accuracy::{AccuracyClass, MoveAccuracy};
use crate::board::piece::Piece;
use crate::board::Board;

use super::algebraic_notation::notation;
use super::candidate::MoveCandidate;

/// A move as played in a game: the squares, snapshots of the moving and
/// captured pieces taken before the move, its display notation, and an
/// optional accuracy score attached after analysis.
#[derive(Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    pub accuracy: Option<u8>,
    pub accuracy_class: Option<AccuracyClass>,
}

impl ChessMove {
    /// Snapshots a move on `board`. Returns `None` if `from` is empty.
    pub fn record(board: &Board, from: Position, to: Position) -> Option<Self> {
        let piece = board.get(from)?;
        Some(Self {
            from,
            to,
            piece,
            captured: board.get(to),
            notation: notation(board, from, to),
            accuracy: None,
            accuracy_class: None,
        })
    }

    pub fn with_accuracy(mut self, accuracy: MoveAccuracy) -> Self {
        self.accuracy = Some(accuracy.accuracy);
        self.accuracy_class = Some(accuracy.class);
        self
    }

    pub fn candidate(&self) -> MoveCandidate {
        MoveCandidate::new(self.from, self.to)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture = match self.captured {
            Some(piece) => format!(" capturing {}", piece.kind),
            None => "".to_string(),
        };
        let accuracy = match (self.accuracy, self.accuracy_class) {
            (Some(accuracy), Some(class)) => format!(" ({}, {})", accuracy, class),
            _ => "".to_string(),
        };
        write!(
            f,
            "{} {}{}{}{}",
            self.notation, self.from, self.to, capture, accuracy
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
