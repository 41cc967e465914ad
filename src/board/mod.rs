pub mod color;
pub mod error;
pub mod piece;

mod display;
mod fen;

#[cfg(test)]
mod tests;

use color::Color;
use common::Position;
use error::BoardError;
use piece::{Piece, PieceKind};

pub use fen::STARTING_POSITION_FEN;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces. Boards are plain values: the engine never
/// mutates a caller's board, every move produces a fresh copy via `apply_move`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    #[inline(always)]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize][position.col() as usize]
    }

    #[inline(always)]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Places a piece on an empty square. Used while setting up positions.
    pub fn put(&mut self, position: Position, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(position) {
            return Err(BoardError::SquareOccupiedBoardPutError { square: position });
        }
        self.set(position, Some(piece));
        Ok(())
    }

    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        let piece = self.get(position);
        self.set(position, None);
        piece
    }

    /// Returns the board that results from moving whatever stands on `from` to `to`.
    /// Anything on `to` is replaced. If `from` is empty the board is returned unchanged.
    #[must_use = "apply_move returns a new board and leaves this one untouched"]
    pub fn apply_move(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        if let Some(piece) = next.remove(from) {
            next.set(to, Some(piece.moved()));
        }
        next
    }

    /// Iterates the occupied squares belonging to `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Iterates every occupied square in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| self.get(position).map(|piece| (position, piece)))
    }

    fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize][position.col() as usize] = piece;
    }
}
