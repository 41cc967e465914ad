use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;
use common::Position;
use termion::{clear, cursor};

const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h\n";

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Draws a full frame into the buffer without printing it.
    pub fn draw_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<&ChessMove>,
        stats: Option<&str>,
    ) {
        self.clear();

        self.buffer.push_str(FILE_LABELS);
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for position in Position::all() {
            let rank = 8 - position.row();
            if position.col() == 0 {
                self.buffer.push_str(&format!("{} │", rank));
            }

            let piece_str = match board.get(position) {
                Some(piece) => piece.to_unicode_piece_char().to_string(),
                None if (position.row() + position.col()) % 2 == 0 => " ".to_string(),
                None => "·".to_string(),
            };
            self.buffer.push_str(&format!(" {} │", piece_str));

            if position.col() == 7 {
                self.buffer.push_str(&format!(" {}\n", rank));
                if rank > 1 {
                    self.buffer
                        .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
                } else {
                    self.buffer
                        .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
                }
            }
        }

        self.buffer.push_str(FILE_LABELS);
        self.buffer.push('\n');

        self.buffer.push_str(&format!("Turn: {}\n", current_turn));

        if let Some(chess_move) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", chess_move));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<&ChessMove>,
        stats: Option<&str>,
    ) {
        self.draw_game_state(board, current_turn, last_move, stats);
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
