use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, GameSummary};
use crate::input_handler::{InputError, MoveInput};

use super::mode::GameMode;

pub struct GameLoop<T: GameMode> {
    engine: Engine,
    ui: GameDisplay,
    mode: T,
    max_moves: Option<usize>,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            mode,
            max_moves: None,
        }
    }

    /// Stops the game unfinished after `max_moves` moves.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    pub fn run(&mut self) -> GameSummary {
        loop {
            let current_turn = self.engine.turn();
            self.mode.render(&mut self.ui, &self.engine, current_turn);

            if self.engine.status().is_over() {
                break;
            }

            if let Some(max_moves) = self.max_moves {
                if self.engine.move_history().len() >= max_moves {
                    println!("Move limit of {} reached.", max_moves);
                    break;
                }
            }

            let input = match self.mode.get_move(current_turn) {
                Ok(input) => input,
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("{}", error);
                    continue;
                }
            };

            if input == MoveInput::UseEngine {
                if let Some(delay) = self.mode.frame_delay(&self.engine, current_turn) {
                    std::thread::sleep(delay);
                }
            }

            if let Err(error) = self.engine.make_move_from_input(input) {
                println!("error: {}", error);
            }
        }

        let summary = self.engine.summary();
        println!("\n{}", summary);
        summary
    }
}
