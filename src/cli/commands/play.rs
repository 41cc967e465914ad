//! Play command - play a game against the computer.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::board::{Board, STARTING_POSITION_FEN};
use tiered_chess::game::mode::HumanVsComputer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "1200")]
    pub difficulty: u16,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.difficulty,
            self.difficulty,
            self.starting_position,
            self.to_move,
        );
        run_game_loop(
            HumanVsComputer {
                human_color: self.color,
            },
            config,
            None,
        );
    }
}
