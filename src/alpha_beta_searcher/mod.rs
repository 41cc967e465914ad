//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every call builds its own `AlphaBetaSearcher`, so nothing is shared or cached
//! between searches: no transposition table, no iterative deepening and no
//! quiescence. Depth is the only knob.

mod prioritize_chess_moves;


use log::debug;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::MoveCandidate;
use crate::evaluate::{evaluate, is_in_check};
use crate::move_generator::all_legal_moves;

pub use prioritize_chess_moves::sort_chess_moves;

/// Returned for a checkmated side; larger than any material total.
pub const MATE_SCORE: i32 = 100_000;

/// Bounds for a full alpha-beta window.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// A root move together with its minimax score from the mover's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoredMove {
    pub candidate: MoveCandidate,
    pub score: i32,
}

#[derive(Default, Debug)]
pub struct AlphaBetaSearcher {
    searched_position_count: usize,
    termination_count: usize,
}

impl AlphaBetaSearcher {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    /// Minimax value of `board` for `root_color`, searching `depth` plies.
    ///
    /// At a maximizing node `root_color` is to move, otherwise its opponent is.
    /// A side with no legal moves scores `-MATE_SCORE` / `+MATE_SCORE` when it is
    /// checkmated (sign per `maximizing`) and 0 when stalemated.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root_color: Color,
    ) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 {
            return evaluate(board, root_color);
        }

        let side_to_move = if maximizing {
            root_color
        } else {
            root_color.opposite()
        };
        let mut candidates = all_legal_moves(board, side_to_move);

        if candidates.is_empty() {
            return match (is_in_check(board, side_to_move), maximizing) {
                (true, true) => -MATE_SCORE,
                (true, false) => MATE_SCORE,
                (false, _) => 0,
            };
        }

        sort_chess_moves(&mut candidates, board);

        if maximizing {
            let mut best_score = -SCORE_INFINITY;
            for candidate in candidates.iter() {
                let child = candidate.apply(board);
                let score = self.search(&child, depth - 1, alpha, beta, false, root_color);
                best_score = best_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
            best_score
        } else {
            let mut best_score = SCORE_INFINITY;
            for candidate in candidates.iter() {
                let child = candidate.apply(board);
                let score = self.search(&child, depth - 1, alpha, beta, true, root_color);
                best_score = best_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
            best_score
        }
    }

    /// Scores every legal move for `color` with a `depth`-ply search, the root
    /// move counting as the first ply. Moves come back in search order
    /// (captures first).
    pub fn score_root_moves(&mut self, board: &Board, depth: u8, color: Color) -> Vec<ScoredMove> {
        let mut candidates = all_legal_moves(board, color);
        sort_chess_moves(&mut candidates, board);

        candidates
            .into_iter()
            .map(|candidate| ScoredMove {
                candidate,
                score: self.score_root_move(board, candidate, depth, color),
            })
            .collect()
    }

    /// Score of a single root move, as `score_root_moves` would compute it.
    pub fn score_root_move(
        &mut self,
        board: &Board,
        candidate: MoveCandidate,
        depth: u8,
        color: Color,
    ) -> i32 {
        let child = candidate.apply(board);
        self.search(
            &child,
            depth.saturating_sub(1),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            false,
            color,
        )
    }

    /// The highest scoring root move; the first one wins ties.
    ///
    /// The best score so far bounds the search of later root moves, so only the
    /// returned move's score is exact. `score_root_moves` scores every move.
    pub fn best_move(&mut self, board: &Board, depth: u8, color: Color) -> Option<ScoredMove> {
        let mut candidates = all_legal_moves(board, color);
        sort_chess_moves(&mut candidates, board);

        let mut best: Option<ScoredMove> = None;
        let mut alpha = -SCORE_INFINITY;
        for candidate in candidates {
            let child = candidate.apply(board);
            let score = self.search(
                &child,
                depth.saturating_sub(1),
                alpha,
                SCORE_INFINITY,
                false,
                color,
            );
            // a later move must beat the best so far, not just match it
            if best.map_or(true, |best| score > best.score) {
                best = Some(ScoredMove { candidate, score });
                alpha = score;
            }
        }

        debug!(
            "alpha-beta depth {} for {}: {} positions, {} cutoffs, best {:?}",
            depth, color, self.searched_position_count, self.termination_count, best
        );

        best
    }
}

/// Convenience wrapper running a single search with a fresh searcher.
pub fn search(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root_color: Color,
) -> i32 {
    AlphaBetaSearcher::new().search(board, depth, alpha, beta, maximizing, root_color)
}

pub fn best_move(board: &Board, depth: u8, color: Color) -> Option<ScoredMove> {
    AlphaBetaSearcher::new().best_move(board, depth, color)
}

pub(crate) fn first_best(scored: &[ScoredMove]) -> Option<ScoredMove> {
    scored.iter().fold(None, |best: Option<ScoredMove>, &current| match best {
        Some(best) if best.score >= current.score => Some(best),
        _ => Some(current),
    })
}
