pub mod accuracy;
pub mod alpha_beta_searcher;
pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod opponent;
pub mod prelude;
