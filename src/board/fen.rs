use std::str::FromStr;

use common::Position;

use super::error::BoardError;
use super::piece::Piece;
use super::Board;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

type FenResult<T> = Result<T, BoardError>;

impl Board {
    /// Serializes the piece placement field of FEN. Side to move and the other
    /// fields are not part of a board.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for row in 0..8u8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8u8 {
                match Position::new(row, col).and_then(|position| self.get(position)) {
                    Some(piece) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        ranks.join("/")
    }
}

/// Parses the piece placement field of a FEN string. Any trailing fields
/// (side to move, clocks, ...) are accepted and ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(fen: &str) -> FenResult<Board> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let mut board = Board::new();
        parse_piece_placement(&mut board, placement)?;
        Ok(board)
    }
}

fn parse_piece_placement(board: &mut Board, placement: &str) -> FenResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(BoardError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, row as u8)?;
    }

    Ok(())
}

fn parse_rank(board: &mut Board, rank: &str, row: u8) -> FenResult<()> {
    let mut col = 0u8;

    for c in rank.chars() {
        if col >= 8 {
            return Err(BoardError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            col += empty_squares as u8;
            continue;
        }

        let piece = Piece::from_fen(c).ok_or(BoardError::InvalidPieceCharacter {
            invalid_character: c,
        })?;
        let position = Position::new(row, col).ok_or_else(|| BoardError::InvalidRankLength {
            invalid_rank: rank.to_string(),
        })?;
        board.put(position, piece)?;
        col += 1;
    }

    match col {
        8 => Ok(()),
        c if c > 8 => Err(BoardError::InvalidRankLength {
            invalid_rank: rank.to_string(),
        }),
        _ => Err(BoardError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        }),
    }
}
