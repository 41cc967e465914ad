use std::fmt;

use common::Position;

use super::error::BoardError;
use super::piece::Piece;
use super::Board;

impl Board {
    /// Builds a board from a 64-character grid drawn from white's point of view:
    /// the first character is a8, the last is h1. `.` marks an empty square and
    /// whitespace is ignored.
    pub fn from_grid(grid: &str) -> Result<Board, BoardError> {
        let cells: Vec<char> = grid.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::InvalidGridSize {
                square_count: cells.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in cells.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_fen(c)
                .ok_or(BoardError::InvalidPieceCharacter { invalid_character: c })?;
            // i < 64, so both coordinates are in range
            if let Some(position) = Position::new((i / 8) as u8, (i % 8) as u8) {
                board.put(position, piece)?;
            }
        }
        Ok(board)
    }

    pub fn to_ascii(&self) -> String {
        let divider = "  +---+---+---+---+---+---+---+---+\n";
        let mut out = String::with_capacity(1024);
        out.push_str(divider);
        for row in 0..8u8 {
            out.push_str(&format!("{} |", 8 - row));
            for col in 0..8u8 {
                let c = Position::new(row, col)
                    .and_then(|position| self.get(position))
                    .map(|piece| piece.to_fen())
                    .unwrap_or(' ');
                out.push_str(&format!(" {} |", c));
            }
            out.push('\n');
            out.push_str(divider);
        }
        out.push_str("    a   b   c   d   e   f   g   h\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        // The macro input is drawn from white's perspective, so the first
        // character is a8 and the last is h1.
        $crate::board::Board::from_grid(stringify!($($piece)*))
            .expect("chess_position! requires a valid 8x8 grid")
    }};
}
