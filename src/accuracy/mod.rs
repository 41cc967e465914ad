//! Move-quality scoring for post-game statistics.
//!
//! The position a played move leads to is evaluated statically and compared
//! against the best move available, which is scored with a shallow lookahead
//! (the move, then the opponent's best reply).

use std::fmt;

use log::debug;

use crate::alpha_beta_searcher::{first_best, AlphaBetaSearcher};
use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::MoveCandidate;
use crate::evaluate::evaluate;

/// Plies searched when scoring the best available move: the mover's move and
/// the opponent's reply.
pub const ACCURACY_SEARCH_DEPTH: u8 = 2;

/// (largest evaluation loss in centipawns, accuracy awarded)
const ACCURACY_STEPS: [(i32, u8); 5] = [(0, 100), (50, 95), (100, 85), (200, 70), (400, 50)];
const WORST_ACCURACY: u8 = 25;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum AccuracyClass {
    Excellent,
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl AccuracyClass {
    pub fn from_accuracy(accuracy: u8) -> Self {
        match accuracy {
            95..=u8::MAX => AccuracyClass::Excellent,
            80..=94 => AccuracyClass::Good,
            60..=79 => AccuracyClass::Inaccuracy,
            40..=59 => AccuracyClass::Mistake,
            _ => AccuracyClass::Blunder,
        }
    }
}

impl fmt::Display for AccuracyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccuracyClass::Excellent => "excellent",
            AccuracyClass::Good => "good",
            AccuracyClass::Inaccuracy => "inaccuracy",
            AccuracyClass::Mistake => "mistake",
            AccuracyClass::Blunder => "blunder",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveAccuracy {
    pub accuracy: u8,
    pub class: AccuracyClass,
}

impl MoveAccuracy {
    pub fn from_accuracy(accuracy: u8) -> Self {
        Self {
            accuracy,
            class: AccuracyClass::from_accuracy(accuracy),
        }
    }

    /// Maps how far a move fell short of the best move onto the accuracy steps.
    pub fn from_score_loss(loss: i32) -> Self {
        let accuracy = ACCURACY_STEPS
            .iter()
            .find(|(max_loss, _)| loss <= *max_loss)
            .map(|(_, accuracy)| *accuracy)
            .unwrap_or(WORST_ACCURACY);
        Self::from_accuracy(accuracy)
    }
}

/// Rates `played` against the best move `mover` had on `board_before`.
///
/// When `mover` has no legal move at all there is nothing to compare against,
/// and the move is reported as 100 / excellent.
pub fn score_move(board_before: &Board, played: MoveCandidate, mover: Color) -> MoveAccuracy {
    let mut searcher = AlphaBetaSearcher::new();
    let scored = searcher.score_root_moves(board_before, ACCURACY_SEARCH_DEPTH, mover);

    let best_score = match first_best(&scored) {
        Some(best) => best.score,
        None => return MoveAccuracy::from_accuracy(100),
    };

    let played_score = evaluate(&played.apply(board_before), mover);

    let loss = best_score - played_score;
    let accuracy = MoveAccuracy::from_score_loss(loss);
    debug!(
        "{} played {}: {} vs best {} -> {:?}",
        mover, played, played_score, best_score, accuracy
    );

    accuracy
}
