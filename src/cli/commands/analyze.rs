//! Analyze command - score every move of a game.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::board::{Board, STARTING_POSITION_FEN};
use tiered_chess::game::engine::Engine;
use tiered_chess::input_handler::parse_move_list;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct AnalyzeArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Color,
    #[structopt(help = "Moves in coordinate notation, e.g. e2e4 e7e5")]
    pub moves: Vec<String>,
}

impl Command for AnalyzeArgs {
    fn execute(self) {
        let moves = match parse_move_list(&self.moves.join(" ")) {
            Ok(moves) => moves,
            Err(err) => {
                eprintln!("Failed to parse moves: {}", err);
                return;
            }
        };

        // difficulty does not affect scoring
        let config = create_config(1200, 1200, self.starting_position, self.to_move);
        let mut engine = Engine::with_config(config);

        for (from, to) in moves {
            let color = engine.turn();
            match engine.make_move_by_squares(from, to) {
                Ok(chess_move) => println!("{:>5}: {}", color.to_string(), chess_move),
                Err(err) => {
                    eprintln!("Stopped analysis: {}", err);
                    break;
                }
            }
        }

        println!("\n{}", engine.summary());
    }
}
