use super::*;
use crate::chess_position;
use common::position::*;

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();

    assert_eq!(Some(Piece::new(PieceKind::King, Color::White)), board.get(E1));
    assert_eq!(Some(Piece::new(PieceKind::Queen, Color::Black)), board.get(D8));
    assert_eq!(Some(Piece::new(PieceKind::Pawn, Color::White)), board.get(A2));
    assert_eq!(Some(Piece::new(PieceKind::Knight, Color::Black)), board.get(G8));
    assert_eq!(None, board.get(E4));
    assert_eq!(16, board.pieces(Color::White).count());
    assert_eq!(16, board.pieces(Color::Black).count());
}

#[test]
fn test_starting_position_matches_fen() {
    let parsed: Board = STARTING_POSITION_FEN.parse().unwrap();
    assert_eq!(Board::starting_position(), parsed);
    assert_eq!(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Board::starting_position().to_fen()
    );
}

#[test]
fn test_apply_move_leaves_original_untouched() {
    let board = Board::starting_position();
    let next = board.apply_move(E2, E4);

    assert_eq!(Board::starting_position(), board);
    assert_eq!(None, next.get(E2));
    let pawn = next.get(E4).unwrap();
    assert_eq!(PieceKind::Pawn, pawn.kind);
    assert!(pawn.has_moved);
}

#[test]
fn test_apply_move_replaces_captured_piece() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ...p....
        ....P...
        ........
        ........
        ....K...
    };
    let next = board.apply_move(E4, D5);

    assert_eq!(None, next.get(E4));
    assert_eq!(Color::White, next.get(D5).unwrap().color);
    assert_eq!(3, next.occupied().count());
}

#[test]
fn test_apply_move_from_empty_square_is_a_no_op() {
    let board = Board::starting_position();
    assert_eq!(board, board.apply_move(E4, E5));
}

#[test]
fn test_put_rejects_occupied_square() {
    let mut board = Board::starting_position();
    let result = board.put(E1, Piece::new(PieceKind::Queen, Color::White));
    assert_eq!(
        Err(BoardError::SquareOccupiedBoardPutError { square: E1 }),
        result
    );
}

#[test]
fn test_fen_parse_errors() {
    assert_eq!(
        Err(BoardError::InvalidRankCount { rank_count: 7 }),
        "8/8/8/8/8/8/8".parse::<Board>()
    );
    assert_eq!(
        Err(BoardError::IncompleteRank {
            incomplete_rank: "7".to_string()
        }),
        "7/8/8/8/8/8/8/8".parse::<Board>()
    );
    assert_eq!(
        Err(BoardError::InvalidPieceCharacter {
            invalid_character: 'x'
        }),
        "x7/8/8/8/8/8/8/8".parse::<Board>()
    );
    assert!("ppppppppp/8/8/8/8/8/8/8".parse::<Board>().is_err());
}

#[test]
fn test_from_grid_requires_64_squares() {
    assert_eq!(
        Err(BoardError::InvalidGridSize { square_count: 8 }),
        Board::from_grid("........")
    );
}

#[test]
fn test_chess_position_macro() {
    let board = chess_position! {
        .......k
        ........
        ........
        ........
        ........
        ........
        ........
        K.......
    };
    println!("Testing board:\n{}", board);

    assert_eq!(Some(Piece::new(PieceKind::King, Color::Black)), board.get(H8));
    assert_eq!(Some(Piece::new(PieceKind::King, Color::White)), board.get(A1));
    assert_eq!(2, board.occupied().count());
}
