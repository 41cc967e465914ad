use super::*;
use crate::board::piece::{Piece, PieceKind};
use crate::chess_position;
use crate::evaluate::{evaluate, has_any_legal_move, is_checkmate, is_in_check, is_stalemate};
use crate::opponent::choose_move_with_rng;
use common::position::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sorted(mut positions: PositionList) -> Vec<Position> {
    positions.sort();
    positions.into_vec()
}

fn expected(mut positions: Vec<Position>) -> Vec<Position> {
    positions.sort();
    positions
}

#[test]
fn test_starting_position_has_twenty_moves() {
    let board = Board::starting_position();

    for &color in &Color::ALL {
        let moves = all_legal_moves(&board, color);
        let knight_moves = moves
            .iter()
            .filter(|m| board.get(m.from).map(|p| p.kind) == Some(PieceKind::Knight))
            .count();

        assert_eq!(20, moves.len());
        assert_eq!(4, knight_moves);
    }
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::starting_position();
    assert!(legal_moves(&board, E4, CheckFilter::Enabled).is_empty());
}

#[test]
fn test_pawn_single_and_double_step() {
    let board = Board::starting_position();
    assert_eq!(
        expected(vec![E3, E4]),
        sorted(legal_moves(&board, E2, CheckFilter::Enabled))
    );
    assert_eq!(
        expected(vec![D6, D5]),
        sorted(legal_moves(&board, D7, CheckFilter::Enabled))
    );
}

#[test]
fn test_pawn_double_step_requires_both_squares_empty() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ....n...
        ........
        ....P...
        ....K...
    };
    assert_eq!(
        expected(vec![E3]),
        sorted(legal_moves(&board, E2, CheckFilter::Enabled))
    );

    let blocked = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ....n...
        ....P...
        ....K...
    };
    assert!(legal_moves(&blocked, E2, CheckFilter::Enabled).is_empty());
}

#[test]
fn test_pawn_only_captures_diagonally_onto_enemies() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ...p.N..
        ....P...
        ....K...
    };
    assert_eq!(
        expected(vec![E3, E4, D3]),
        sorted(legal_moves(&board, E2, CheckFilter::Enabled))
    );
}

#[test]
fn test_pawn_on_final_row_has_no_moves() {
    // promotion is not modeled, so a pawn on the last row is stuck
    let board = chess_position! {
        P...k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    assert!(legal_moves(&board, A8, CheckFilter::Enabled).is_empty());
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::starting_position();
    assert_eq!(
        expected(vec![F3, H3]),
        sorted(legal_moves(&board, G1, CheckFilter::Enabled))
    );
}

#[test]
fn test_knight_in_corner() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        N...K...
    };
    assert_eq!(
        expected(vec![B3, C2]),
        sorted(legal_moves(&board, A1, CheckFilter::Enabled))
    );
}

#[test]
fn test_rook_stops_at_blockers() {
    let board = chess_position! {
        ....k...
        ........
        ...p....
        ........
        ........
        ........
        ........
        ...RK...
    };
    assert_eq!(
        expected(vec![A1, B1, C1, D2, D3, D4, D5, D6]),
        sorted(legal_moves(&board, D1, CheckFilter::Enabled))
    );
}

#[test]
fn test_bishop_rays() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        B...K...
    };
    assert_eq!(
        expected(vec![B2, C3, D4, E5, F6, G7, H8]),
        sorted(legal_moves(&board, A1, CheckFilter::Enabled))
    );
}

#[test]
fn test_queen_in_open_center() {
    let board = chess_position! {
        k.......
        ........
        ........
        ........
        ...Q....
        ........
        ........
        .......K
    };
    assert_eq!(27, legal_moves(&board, D4, CheckFilter::Enabled).len());
}

#[test]
fn test_king_cannot_step_into_check() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        r...K...
    };
    // the rook covers the whole first rank, so the king must leave it
    assert_eq!(
        expected(vec![D2, E2, F2]),
        sorted(legal_moves(&board, E1, CheckFilter::Enabled))
    );
}

#[test]
fn test_pinned_piece_cannot_leave_the_pin() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ....r...
        ........
        ........
        ....N...
        ....K...
    };
    assert!(legal_moves(&board, E2, CheckFilter::Enabled).is_empty());
    assert!(!legal_moves(&board, E2, CheckFilter::Disabled).is_empty());
}

#[test]
fn test_moves_stay_on_board_and_avoid_own_pieces() {
    let boards = vec![
        Board::starting_position(),
        chess_position! {
            r..qk..r
            ppp..ppp
            ..n.b...
            ...p....
            ..BP.n..
            ....PN..
            PP...PPP
            R..Q.RK.
        },
    ];

    for board in boards {
        for &color in &Color::ALL {
            for candidate in all_legal_moves(&board, color) {
                assert!(candidate.from.row() < 8 && candidate.from.col() < 8);
                assert!(candidate.to.row() < 8 && candidate.to.col() < 8);
                let target = board.get(candidate.to);
                assert!(
                    target.map(|piece| piece.color) != Some(color),
                    "{} lands on a friendly piece",
                    candidate
                );
                assert!(
                    !is_in_check(&candidate.apply(&board), color),
                    "{} leaves the king in check",
                    candidate
                );
            }
        }
    }
}

#[test]
fn test_fools_mate() {
    let mut board = Board::starting_position();
    for &(from, to) in &[(F2, F3), (E7, E5), (G2, G4), (D8, H4)] {
        assert!(legal_moves(&board, from, CheckFilter::Enabled).contains(&to));
        board = board.apply_move(from, to);
    }
    println!("Testing board:\n{}", board);

    assert!(is_checkmate(&board, Color::White));
    assert!(!is_stalemate(&board, Color::White));
    assert!(!has_any_legal_move(&board, Color::White));
    assert!(all_legal_moves(&board, Color::White).is_empty());
}

#[test]
fn test_has_moved_does_not_affect_generation() {
    let mut board = Board::new();
    board
        .put(E2, Piece::new(PieceKind::Pawn, Color::White).moved())
        .unwrap();
    board
        .put(E1, Piece::new(PieceKind::King, Color::White))
        .unwrap();
    board
        .put(E8, Piece::new(PieceKind::King, Color::Black))
        .unwrap();

    assert_eq!(
        expected(vec![E3, E4]),
        sorted(legal_moves(&board, E2, CheckFilter::Enabled))
    );
}

#[test]
fn test_random_games_keep_move_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut board = Board::starting_position();
        let mut color = Color::White;

        for _ in 0..60 {
            assert_eq!(
                evaluate(&board, Color::White),
                -evaluate(&board, Color::Black),
                "asymmetric evaluation for {:?}",
                board
            );

            let moves = all_legal_moves(&board, color);
            for candidate in moves.iter() {
                assert!(candidate.to.row() < 8 && candidate.to.col() < 8);
                assert_eq!(Some(color), board.get(candidate.from).map(|piece| piece.color));
                assert!(
                    board.get(candidate.to).map(|piece| piece.color) != Some(color),
                    "{} lands on a friendly piece in {:?}",
                    candidate,
                    board
                );
                assert!(
                    !is_in_check(&candidate.apply(&board), color),
                    "{} leaves the king in check in {:?}",
                    candidate,
                    board
                );
            }

            let checkmate = is_checkmate(&board, color);
            let stalemate = is_stalemate(&board, color);
            assert!(!(checkmate && stalemate));
            assert_eq!(checkmate || stalemate, !has_any_legal_move(&board, color));
            assert_eq!(moves.is_empty(), !has_any_legal_move(&board, color));

            let choice = match choose_move_with_rng(&board, 300, color, &mut rng) {
                Some(choice) => choice,
                None => break,
            };
            assert!(moves.contains(&choice));

            board = choice.apply(&board);
            color = color.opposite();
        }
    }
}
