//! Shared utilities for CLI commands.

use tiered_chess::board::color::Color;
use tiered_chess::board::Board;
use tiered_chess::game::engine::EngineConfig;
use tiered_chess::game::mode::GameMode;
use tiered_chess::game::r#loop::GameLoop;
use tiered_chess::opponent::tiers::{MAX_DIFFICULTY, MIN_DIFFICULTY};

pub(crate) fn run_game_loop<M: GameMode>(mode: M, config: EngineConfig, max_moves: Option<usize>) {
    let mut game = GameLoop::new(mode, config);
    if let Some(max_moves) = max_moves {
        game = game.with_max_moves(max_moves);
    }
    game.run();
}

pub(crate) fn create_config(
    white_difficulty: u16,
    black_difficulty: u16,
    starting_position: Board,
    to_move: Color,
) -> EngineConfig {
    EngineConfig {
        white_difficulty: clamp_difficulty(white_difficulty),
        black_difficulty: clamp_difficulty(black_difficulty),
        starting_position,
        first_to_move: to_move,
    }
}

fn clamp_difficulty(difficulty: u16) -> u16 {
    let clamped = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    if clamped != difficulty {
        eprintln!(
            "Difficulty {} is out of range, using {} instead.",
            difficulty, clamped
        );
    }
    clamped
}
