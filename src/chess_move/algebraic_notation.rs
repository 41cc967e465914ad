use common::Position;

use crate::board::piece::PieceKind;
use crate::board::Board;

const CAPTURE_CHAR: &str = "x";

/// Short display notation for moving `from` -> `to` on `board`: the piece letter
/// (omitted for pawns), `x` when the destination is occupied, then the
/// destination square. Purely descriptive; it is never parsed back into a move.
pub fn notation(board: &Board, from: Position, to: Position) -> String {
    let piece_letter = match board.get(from) {
        Some(piece) if piece.kind != PieceKind::Pawn => piece.kind.letter().to_string(),
        _ => String::new(),
    };
    let capture = if board.is_occupied(to) { CAPTURE_CHAR } else { "" };

    format!("{}{}{}", piece_letter, capture, to)
}
