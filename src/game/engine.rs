use std::fmt;

use common::Position;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::accuracy::score_move;
use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::{ChessMove, MoveCandidate};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;
use crate::move_generator::{all_legal_moves, legal_moves, CheckFilter, PositionList};
use crate::opponent::choose_move_with_rng;

pub const DEFAULT_DIFFICULTY: u16 = 1200;

/// How a game starts and how strong the computer plays for each side.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub white_difficulty: u16,
    pub black_difficulty: u16,
    pub starting_position: Board,
    pub first_to_move: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_difficulty(DEFAULT_DIFFICULTY)
    }
}

impl EngineConfig {
    /// Standard starting position, white to move, both sides at `difficulty`.
    pub fn with_difficulty(difficulty: u16) -> Self {
        Self {
            white_difficulty: difficulty,
            black_difficulty: difficulty,
            starting_position: Board::starting_position(),
            first_to_move: Color::White,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("invalid move: {from}{to}")]
    InvalidMove { from: Position, to: Position },
    #[error("the game is over")]
    GameOver,
    #[error("no move available for {color}")]
    NoAvailableMoves { color: Color },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Post-game statistics. Average accuracies only count scored moves and are
/// `None` for a side that made none.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameSummary {
    pub move_count: usize,
    pub status: GameStatus,
    pub white_accuracy: Option<u8>,
    pub black_accuracy: Option<u8>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format_accuracy = |accuracy: Option<u8>| {
            accuracy.map_or("-".to_string(), |accuracy| format!("{}%", accuracy))
        };
        write!(
            f,
            "* Result: {}\n* Moves: {}\n* White accuracy: {}\n* Black accuracy: {}",
            self.status,
            self.move_count,
            format_accuracy(self.white_accuracy),
            format_accuracy(self.black_accuracy)
        )
    }
}

/// A game in progress: the board, whose turn it is and every move played so far.
///
/// Moves submitted by a player are checked for legality and scored for
/// accuracy. Moves chosen by the computer are recorded without a score.
pub struct Engine {
    board: Board,
    turn: Color,
    white_difficulty: u16,
    black_difficulty: u16,
    move_history: Vec<ChessMove>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: config.first_to_move,
            white_difficulty: config.white_difficulty,
            black_difficulty: config.black_difficulty,
            move_history: Vec::new(),
        }
    }

    /// Plays `moves` from the configured start, scoring each one.
    pub fn replay(config: EngineConfig, moves: &[(Position, Position)]) -> Result<Self, EngineError> {
        let mut engine = Self::with_config(config);
        for &(from, to) in moves {
            engine.make_move_by_squares(from, to)?;
        }
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn difficulty(&self, color: Color) -> u16 {
        match color {
            Color::White => self.white_difficulty,
            Color::Black => self.black_difficulty,
        }
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_history.last()
    }

    /// Every legal move for the side to move, paired with its notation.
    pub fn get_valid_moves(&self) -> Vec<(MoveCandidate, String)> {
        all_legal_moves(&self.board, self.turn)
            .into_iter()
            .map(|candidate| {
                let notation = crate::chess_move::notation(&self.board, candidate.from, candidate.to);
                (candidate, notation)
            })
            .collect()
    }

    /// Legal destinations of the piece on `from`, if it belongs to the side to move.
    pub fn legal_destinations(&self, from: Position) -> PositionList {
        match self.board.get(from) {
            Some(piece) if piece.color == self.turn => {
                legal_moves(&self.board, from, CheckFilter::Enabled)
            }
            _ => PositionList::new(),
        }
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board, self.turn)
    }

    pub fn status(&self) -> GameStatus {
        match self.check_game_over() {
            Some(GameEnding::Checkmate) => GameStatus::Checkmate {
                winner: self.turn.opposite(),
            },
            Some(GameEnding::Stalemate) => GameStatus::Stalemate,
            None if evaluate::is_in_check(&self.board, self.turn) => GameStatus::Check,
            None => GameStatus::InProgress,
        }
    }

    /// Plays a move for the side to move after checking it is legal, and
    /// attaches its accuracy score to the recorded move.
    pub fn make_move_by_squares(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<ChessMove, EngineError> {
        if self.status().is_over() {
            return Err(EngineError::GameOver);
        }

        if !self.legal_destinations(from).contains(&to) {
            return Err(EngineError::InvalidMove { from, to });
        }

        let accuracy = score_move(&self.board, MoveCandidate::new(from, to), self.turn);
        let chess_move = ChessMove::record(&self.board, from, to)
            .ok_or(EngineError::InvalidMove { from, to })?
            .with_accuracy(accuracy);

        self.apply_chess_move(chess_move.clone());
        Ok(chess_move)
    }

    /// Lets the computer play for the side to move at that side's difficulty.
    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        self.make_best_move_with_rng(&mut rand::thread_rng())
    }

    pub fn make_best_move_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ChessMove, EngineError> {
        if self.status().is_over() {
            return Err(EngineError::GameOver);
        }

        let color = self.turn;
        let candidate = choose_move_with_rng(&self.board, self.difficulty(color), color, rng)
            .ok_or(EngineError::NoAvailableMoves { color })?;
        let chess_move = ChessMove::record(&self.board, candidate.from, candidate.to)
            .ok_or(EngineError::NoAvailableMoves { color })?;

        self.apply_chess_move(chess_move.clone());
        Ok(chess_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<ChessMove, EngineError> {
        match input {
            MoveInput::Coordinate { from, to } => self.make_move_by_squares(from, to),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn summary(&self) -> GameSummary {
        let average_accuracy = |color: Color| {
            let scores: Vec<u32> = self
                .move_history
                .iter()
                .filter(|chess_move| chess_move.piece.color == color)
                .filter_map(|chess_move| chess_move.accuracy)
                .map(u32::from)
                .collect();
            if scores.is_empty() {
                return None;
            }
            let count = scores.len() as u32;
            let total: u32 = scores.iter().sum();
            Some(((total + count / 2) / count) as u8)
        };

        GameSummary {
            move_count: self.move_history.len(),
            status: self.status(),
            white_accuracy: average_accuracy(Color::White),
            black_accuracy: average_accuracy(Color::Black),
        }
    }

    fn apply_chess_move(&mut self, chess_move: ChessMove) {
        debug!("{} plays {:?}", self.turn, chess_move);
        self.board = self.board.apply_move(chess_move.from, chess_move.to);
        self.move_history.push(chess_move);
        self.turn = self.turn.opposite();

        let status = self.status();
        if status.is_over() {
            info!("game over after {} moves: {}", self.move_history.len(), status);
        }
    }
}
