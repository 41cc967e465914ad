use common::Position;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

use super::PositionList;

type Direction = (i8, i8);

const ROOK_DIRS: [Direction; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const BISHOP_DIRS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [Direction; 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [Direction; 8] = QUEEN_DIRS;

/// Pseudo-legal destinations for `piece` standing on `from`. Destinations may
/// leave the mover's own king in check; they never land on a friendly piece
/// and never leave the board.
pub(crate) fn pseudo_legal_targets(board: &Board, from: Position, piece: Piece) -> PositionList {
    let mut targets = PositionList::new();

    match piece.kind {
        PieceKind::Pawn => generate_pawn_targets(&mut targets, board, from, piece.color),
        PieceKind::Knight => {
            generate_step_targets(&mut targets, board, from, piece.color, &KNIGHT_OFFSETS)
        }
        PieceKind::Bishop => {
            generate_ray_targets(&mut targets, board, from, piece.color, &BISHOP_DIRS)
        }
        PieceKind::Rook => generate_ray_targets(&mut targets, board, from, piece.color, &ROOK_DIRS),
        PieceKind::Queen => {
            generate_ray_targets(&mut targets, board, from, piece.color, &QUEEN_DIRS)
        }
        PieceKind::King => {
            generate_step_targets(&mut targets, board, from, piece.color, &KING_OFFSETS)
        }
    }

    targets
}

fn generate_pawn_targets(targets: &mut PositionList, board: &Board, from: Position, color: Color) {
    let forward = color.forward();

    if let Some(single) = from.offset(forward, 0) {
        if !board.is_occupied(single) {
            targets.push(single);

            if from.row() == color.pawn_starting_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if !board.is_occupied(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for &col_delta in &[-1, 1] {
        let capture = match from.offset(forward, col_delta) {
            Some(capture) => capture,
            None => continue,
        };
        if let Some(occupant) = board.get(capture) {
            if occupant.color != color {
                targets.push(capture);
            }
        }
    }
}

fn generate_step_targets(
    targets: &mut PositionList,
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[Direction],
) {
    for &(row_delta, col_delta) in offsets {
        let to = match from.offset(row_delta, col_delta) {
            Some(to) => to,
            None => continue,
        };
        match board.get(to) {
            Some(occupant) if occupant.color == color => (),
            _ => targets.push(to),
        }
    }
}

fn generate_ray_targets(
    targets: &mut PositionList,
    board: &Board,
    from: Position,
    color: Color,
    directions: &[Direction],
) {
    for &(row_delta, col_delta) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(row_delta, col_delta) {
            match board.get(to) {
                None => targets.push(to),
                Some(occupant) => {
                    if occupant.color != color {
                        targets.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
