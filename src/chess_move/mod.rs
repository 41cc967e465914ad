pub mod algebraic_notation;
pub mod candidate;
pub mod chess_move;

pub use algebraic_notation::notation;
pub use candidate::MoveCandidate;
pub use chess_move::ChessMove;
