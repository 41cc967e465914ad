//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    analyze::AnalyzeArgs, best_move::BestMoveArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A chess opponent with difficulty tiers and move accuracy scoring ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (default: 1200, range 250-2800). Your starting color will be chosen at random unless you specify with `--color`. The initial position can be specified using FEN notation with `--fen` (default: starting position). Your moves are scored for accuracy and summarized when the game ends."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, with white at `--white` and black at `--black` difficulty (default: 1200 each). The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the move the computer would choose from a position given in FEN notation with `--fen` (required), for the side given with `--to-move` (default: white), at the given `--difficulty` (default: 2200)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "analyze",
        about = "Replay a list of coordinate moves (e.g. `e2e4 e7e5 g1f3`) from the starting position or `--fen`, and print the accuracy of every move followed by a summary."
    )]
    Analyze(AnalyzeArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            BestMove(cmd),
            Analyze(cmd),
        }
    }
}
