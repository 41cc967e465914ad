//! Watch command - watch the computer play against itself.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::board::{Board, STARTING_POSITION_FEN};
use tiered_chess::game::mode::ComputerVsComputer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "1200")]
    pub white: u16,
    #[structopt(short, long, default_value = "1200")]
    pub black: u16,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Color,
    #[structopt(
        long = "max-moves",
        default_value = "300",
        help = "Stop the game after this many moves, since draws by repetition are not detected"
    )]
    pub max_moves: usize,
    #[structopt(long = "fast", help = "Do not pause between moves")]
    pub fast: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.white, self.black, self.starting_position, self.to_move);
        run_game_loop(
            ComputerVsComputer { fast: self.fast },
            config,
            Some(self.max_moves),
        );
    }
}
