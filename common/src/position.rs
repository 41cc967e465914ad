use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A cell on the 8x8 board. Row 0 is the eighth rank (black's back rank) and
/// row 7 is the first rank; column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Error, Debug, PartialEq)]
pub enum PositionParseError {
    #[error("invalid square: {input:?}")]
    InvalidSquare { input: String },
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Shifts the position by the given row and column deltas, returning `None`
    /// when the result falls off the board.
    #[inline(always)]
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Self> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 positions in row-major order, starting at a8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, PositionParseError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic)
            .ok_or_else(|| PositionParseError::InvalidSquare {
                input: algebraic.to_string(),
            })?;

        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'0';

        Ok(Self {
            row: 8 - rank,
            col: file,
        })
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file_char(), 8 - self.row)
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s.trim())
    }
}

#[rustfmt::skip]
mod squares {
    use super::Position;

    pub const A1: Position = Position { row: 7, col: 0 };
    pub const B1: Position = Position { row: 7, col: 1 };
    pub const C1: Position = Position { row: 7, col: 2 };
    pub const D1: Position = Position { row: 7, col: 3 };
    pub const E1: Position = Position { row: 7, col: 4 };
    pub const F1: Position = Position { row: 7, col: 5 };
    pub const G1: Position = Position { row: 7, col: 6 };
    pub const H1: Position = Position { row: 7, col: 7 };
    pub const A2: Position = Position { row: 6, col: 0 };
    pub const B2: Position = Position { row: 6, col: 1 };
    pub const C2: Position = Position { row: 6, col: 2 };
    pub const D2: Position = Position { row: 6, col: 3 };
    pub const E2: Position = Position { row: 6, col: 4 };
    pub const F2: Position = Position { row: 6, col: 5 };
    pub const G2: Position = Position { row: 6, col: 6 };
    pub const H2: Position = Position { row: 6, col: 7 };
    pub const A3: Position = Position { row: 5, col: 0 };
    pub const B3: Position = Position { row: 5, col: 1 };
    pub const C3: Position = Position { row: 5, col: 2 };
    pub const D3: Position = Position { row: 5, col: 3 };
    pub const E3: Position = Position { row: 5, col: 4 };
    pub const F3: Position = Position { row: 5, col: 5 };
    pub const G3: Position = Position { row: 5, col: 6 };
    pub const H3: Position = Position { row: 5, col: 7 };
    pub const A4: Position = Position { row: 4, col: 0 };
    pub const B4: Position = Position { row: 4, col: 1 };
    pub const C4: Position = Position { row: 4, col: 2 };
    pub const D4: Position = Position { row: 4, col: 3 };
    pub const E4: Position = Position { row: 4, col: 4 };
    pub const F4: Position = Position { row: 4, col: 5 };
    pub const G4: Position = Position { row: 4, col: 6 };
    pub const H4: Position = Position { row: 4, col: 7 };
    pub const A5: Position = Position { row: 3, col: 0 };
    pub const B5: Position = Position { row: 3, col: 1 };
    pub const C5: Position = Position { row: 3, col: 2 };
    pub const D5: Position = Position { row: 3, col: 3 };
    pub const E5: Position = Position { row: 3, col: 4 };
    pub const F5: Position = Position { row: 3, col: 5 };
    pub const G5: Position = Position { row: 3, col: 6 };
    pub const H5: Position = Position { row: 3, col: 7 };
    pub const A6: Position = Position { row: 2, col: 0 };
    pub const B6: Position = Position { row: 2, col: 1 };
    pub const C6: Position = Position { row: 2, col: 2 };
    pub const D6: Position = Position { row: 2, col: 3 };
    pub const E6: Position = Position { row: 2, col: 4 };
    pub const F6: Position = Position { row: 2, col: 5 };
    pub const G6: Position = Position { row: 2, col: 6 };
    pub const H6: Position = Position { row: 2, col: 7 };
    pub const A7: Position = Position { row: 1, col: 0 };
    pub const B7: Position = Position { row: 1, col: 1 };
    pub const C7: Position = Position { row: 1, col: 2 };
    pub const D7: Position = Position { row: 1, col: 3 };
    pub const E7: Position = Position { row: 1, col: 4 };
    pub const F7: Position = Position { row: 1, col: 5 };
    pub const G7: Position = Position { row: 1, col: 6 };
    pub const H7: Position = Position { row: 1, col: 7 };
    pub const A8: Position = Position { row: 0, col: 0 };
    pub const B8: Position = Position { row: 0, col: 1 };
    pub const C8: Position = Position { row: 0, col: 2 };
    pub const D8: Position = Position { row: 0, col: 3 };
    pub const E8: Position = Position { row: 0, col: 4 };
    pub const F8: Position = Position { row: 0, col: 5 };
    pub const G8: Position = Position { row: 0, col: 6 };
    pub const H8: Position = Position { row: 0, col: 7 };
}

pub use squares::*;
