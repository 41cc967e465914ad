use std::fmt;

use super::color::Color;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used in notation and FEN. Pawns have no notation letter,
    /// but still use `P` in FEN.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board. `has_moved` is tracked on every move but no rule reads it.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    pub fn to_fen(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }

    pub fn to_unicode_piece_char(&self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Bishop, Color::Black) => '♗',
            (PieceKind::Bishop, Color::White) => '♝',
            (PieceKind::King, Color::Black) => '♔',
            (PieceKind::King, Color::White) => '♚',
            (PieceKind::Knight, Color::Black) => '♘',
            (PieceKind::Knight, Color::White) => '♞',
            (PieceKind::Pawn, Color::Black) => '♙',
            (PieceKind::Pawn, Color::White) => '♟',
            (PieceKind::Queen, Color::Black) => '♕',
            (PieceKind::Queen, Color::White) => '♛',
            (PieceKind::Rook, Color::Black) => '♖',
            (PieceKind::Rook, Color::White) => '♜',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars() {
        assert_eq!('K', Piece::new(PieceKind::King, Color::White).to_fen());
        assert_eq!('n', Piece::new(PieceKind::Knight, Color::Black).to_fen());
        assert_eq!(
            Some(Piece::new(PieceKind::Queen, Color::Black)),
            Piece::from_fen('q')
        );
        assert_eq!(None, Piece::from_fen('x'));
    }

    #[test]
    fn test_moved_keeps_identity() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let moved = rook.moved();
        assert!(moved.has_moved);
        assert_eq!(rook.kind, moved.kind);
        assert_eq!(rook.color, moved.color);
    }
}
