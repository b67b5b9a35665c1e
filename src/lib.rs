//! Tic-Tac-Toe agent that learns while it plays
//!
//! This crate provides:
//! - A 3x3 board with win/draw detection and canonical state keys
//! - A lazily grown policy table of state-action values
//! - ε-greedy action selection with an injected random source
//! - Backward, episode-end credit assignment over the agent's own moves
//! - A turn controller driven by agent triggers and opponent moves
//! - Headless pre-training against scripted opponents
//!
//! ```
//! use tabular_ttt::{AgentConfig, GameSession, Outcome, TurnState};
//!
//! let mut session = GameSession::new(AgentConfig::new().with_seed(7))?;
//! let played = session.trigger_agent_move()?;
//! assert!(played.is_some());
//! assert_eq!(session.turn(), TurnState::OpponentTurn);
//! assert_eq!(session.outcome(), None::<Outcome>);
//! # Ok::<(), tabular_ttt::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod learning;
pub mod logging;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod tictactoe;
pub mod types;

pub use app::AgentConfig;
pub use error::{Error, Result};
pub use learning::{PolicyTable, TabularAgent};
pub use session::{GameSession, TurnState};
pub use tictactoe::{Board, Cell, Mark, Outcome};
pub use types::{Coord, StateKey};
