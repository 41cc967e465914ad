pub mod game_state;

mod evaluation_tables;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::Board;
use common::Position;

use self::evaluation_tables::{BONUS_TABLES, MATERIAL_VALUES};

pub use self::game_state::{
    find_king, game_ending, has_any_legal_move, is_checkmate, is_in_check, is_stalemate,
    GameEnding,
};

/// Static score of `board` from `perspective`'s side: material plus positional
/// bonus for each of its pieces, minus the same for each opposing piece.
///
/// The score is antisymmetric, `evaluate(b, White) == -evaluate(b, Black)`.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    board
        .occupied()
        .map(|(position, piece)| {
            let value = piece_value(position, piece);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Material plus the positional bonus for a single piece. The bonus tables are
/// shared between colors, so the lookup row is mirrored for black.
#[inline(always)]
pub fn piece_value(position: Position, piece: Piece) -> i32 {
    let row = match piece.color {
        Color::White => position.row(),
        Color::Black => 7 - position.row(),
    } as usize;
    let kind = piece.kind as usize;

    MATERIAL_VALUES[kind] + BONUS_TABLES[kind][row][position.col() as usize]
}

pub fn material_value(piece: Piece) -> i32 {
    MATERIAL_VALUES[piece.kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceKind;
    use crate::chess_position;
    use common::position::*;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(0, evaluate(&board, Color::White));
        assert_eq!(0, evaluate(&board, Color::Black));
    }

    #[test]
    fn test_starting_player_material_score() {
        let board = Board::starting_position();
        let white_score: i32 = board
            .pieces(Color::White)
            .map(|(position, piece)| piece_value(position, piece))
            .sum();
        let black_score: i32 = board
            .pieces(Color::Black)
            .map(|(position, piece)| piece_value(position, piece))
            .sum();

        // 8 pawns, 2 knights, 2 bishops, 2 rooks, queen, king, plus back-rank bonuses
        assert_eq!(23905, white_score);
        assert_eq!(white_score, black_score);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let board = chess_position! {
            r..qk..r
            ppp..ppp
            ..n.b...
            ...p....
            ..BP.n..
            ....PN..
            PP...PPP
            R..Q.RK.
        };
        println!("Testing board:\n{}", board);

        assert_eq!(evaluate(&board, Color::White), -evaluate(&board, Color::Black));
        assert_ne!(0, evaluate(&board, Color::White));
    }

    #[test]
    fn test_advanced_pawns_score_the_same_for_both_colors() {
        let board = chess_position! {
            ........
            .......P
            ........
            ........
            ........
            ........
            .......p
            ........
        };
        println!("Testing board:\n{}", board);

        assert_eq!(150, piece_value(H7, board.get(H7).unwrap()));
        assert_eq!(150, piece_value(H2, board.get(H2).unwrap()));
        assert_eq!(0, evaluate(&board, Color::White));
    }

    #[test]
    fn test_material_advantage() {
        let mut board = Board::starting_position();
        board.remove(D8);

        // the queen's 900 plus its -5 bonus on d8
        assert_eq!(895, evaluate(&board, Color::White));
        assert_eq!(-895, evaluate(&board, Color::Black));
        assert_eq!(
            900,
            material_value(Piece::new(PieceKind::Queen, Color::Black))
        );
    }
}
