//! Best move command - determine the computer's move from a position.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::board::Board;
use tiered_chess::game::engine::Engine;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "2200")]
    pub difficulty: u16,
    #[structopt(long = "fen")]
    pub starting_position: Board,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Color,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = create_config(
            self.difficulty,
            self.difficulty,
            self.starting_position,
            self.to_move,
        );
        let mut engine = Engine::with_config(config);

        match engine.make_best_move() {
            Ok(best_move) => println!("{} ({})", best_move.notation, best_move.candidate().to_uci()),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
