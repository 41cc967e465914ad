use std::time::Duration;

use crate::board::color::Color;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::input_handler::{parse_move_input, InputError, MoveInput};
use crate::opponent::tier_for;

pub trait GameMode {
    fn get_move(&self, current_turn: Color) -> Result<MoveInput, InputError>;
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Color);
    /// Pause before the computer's move is shown, if any.
    fn frame_delay(&self, engine: &Engine, current_turn: Color) -> Option<Duration>;
}

pub struct HumanVsComputer {
    pub human_color: Color,
}

pub struct ComputerVsComputer {
    /// Skip the tier think time between moves.
    pub fast: bool,
}

fn computer_stats(engine: &Engine) -> String {
    let tier = |color: Color| {
        let difficulty = engine.difficulty(color);
        format!("{} ({})", difficulty, tier_for(difficulty).name)
    };
    format!(
        "* White: {}\n* Black: {}\n* Status: {}",
        tier(Color::White),
        tier(Color::Black),
        engine.status()
    )
}

impl GameMode for HumanVsComputer {
    fn get_move(&self, current_turn: Color) -> Result<MoveInput, InputError> {
        if current_turn == self.human_color {
            parse_move_input()
        } else {
            Ok(MoveInput::UseEngine)
        }
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Color) {
        let summary = engine.summary();
        let accuracy = match self.human_color {
            Color::White => summary.white_accuracy,
            Color::Black => summary.black_accuracy,
        };
        let stats_display = format!(
            "* Opponent: {}\n* Status: {}\n* Your accuracy: {}",
            engine.difficulty(self.human_color.opposite()),
            summary.status,
            accuracy.map_or("-".to_string(), |a| format!("{}%", a))
        );
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
        );
        if current_turn == self.human_color {
            println!("Enter your move (e.g. e2e4, `hint` to let the engine move, `quit` to exit):");
        }
    }

    fn frame_delay(&self, engine: &Engine, current_turn: Color) -> Option<Duration> {
        if current_turn == self.human_color {
            None
        } else {
            Some(tier_for(engine.difficulty(current_turn)).think_time)
        }
    }
}

impl GameMode for ComputerVsComputer {
    fn get_move(&self, _current_turn: Color) -> Result<MoveInput, InputError> {
        Ok(MoveInput::UseEngine)
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Color) {
        let stats_display = computer_stats(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
        );
    }

    fn frame_delay(&self, engine: &Engine, current_turn: Color) -> Option<Duration> {
        if self.fast {
            None
        } else {
            Some(tier_for(engine.difficulty(current_turn)).think_time)
        }
    }
}
