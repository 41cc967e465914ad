//! The computer opponent: picks a move for a difficulty rating.
//!
//! Selection is a pure function of the board, the rating and the random number
//! generator handed in. No opening book, no state carried between calls.

pub mod tiers;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alpha_beta_searcher::best_move;
use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::MoveCandidate;
use crate::evaluate::evaluate;
use crate::move_generator::all_legal_moves;

pub use tiers::{tier_for, DifficultyTier, SelectionPolicy, DIFFICULTY_TIERS};

/// Chooses a move for `ai_color` using the thread-local random number generator.
/// Returns `None` when `ai_color` has no legal move.
pub fn choose_move(board: &Board, difficulty: u16, ai_color: Color) -> Option<MoveCandidate> {
    choose_move_with_rng(board, difficulty, ai_color, &mut rand::thread_rng())
}

pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    difficulty: u16,
    ai_color: Color,
    rng: &mut R,
) -> Option<MoveCandidate> {
    let tier = tier_for(difficulty);
    debug!(
        "choosing move for {} at difficulty {} ({})",
        ai_color, difficulty, tier.name
    );

    let choice = match tier.policy {
        SelectionPolicy::Random { capture_bias } => {
            choose_random_move(board, ai_color, capture_bias, rng)
        }
        SelectionPolicy::NoisyEvaluation { noise, top_n } => {
            choose_noisy_move(board, ai_color, noise, top_n, rng)
        }
        SelectionPolicy::Search { depth } => {
            best_move(board, depth, ai_color).map(|scored| scored.candidate)
        }
    };

    debug!("{} chose {:?}", tier.name, choice);
    choice
}

fn choose_random_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    capture_bias: f64,
    rng: &mut R,
) -> Option<MoveCandidate> {
    let candidates = all_legal_moves(board, color);
    let captures: Vec<MoveCandidate> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.is_capture(board))
        .collect();

    if !captures.is_empty() && rng.gen_bool(capture_bias) {
        return captures.choose(rng).copied();
    }

    candidates.choose(rng).copied()
}

fn choose_noisy_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    noise: i32,
    top_n: usize,
    rng: &mut R,
) -> Option<MoveCandidate> {
    let mut scored: Vec<(MoveCandidate, i32)> = all_legal_moves(board, color)
        .into_iter()
        .map(|candidate| {
            let score = evaluate(&candidate.apply(board), color) + rng.gen_range(-noise..=noise);
            (candidate, score)
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.cmp(a));
    scored.truncate(top_n.max(1));

    scored.choose(rng).map(|(candidate, _)| *candidate)
}
