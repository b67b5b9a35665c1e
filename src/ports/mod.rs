//! Ports (trait boundaries) for the collaborators around a session.
//!
//! The session only knows the board and its own agent. Whoever supplies the
//! opponent's moves, and whoever watches a training run, plugs in here.

pub mod observer;
pub mod opponent;

pub use observer::Observer;
pub use opponent::Opponent;
