//! Tic-Tac-Toe board, winning lines and terminal outcomes

pub mod board;
pub mod lines;
pub mod outcome;

pub use board::{Board, Cell, Mark};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::Outcome;
