//! Turn controller for one learning session
//!
//! A session alternates between the learning agent and an external
//! opponent. It is purely reactive: nothing happens until the caller
//! triggers the agent's move or submits an opponent move.
//!
//! ```text
//!            trigger_agent_move            apply_opponent_move
//! AgentTurn ───────────────────▶ OpponentTurn ───────────────────▶ AgentTurn
//!     │ outcome                        │ outcome
//!     ▼                                ▼
//!  Terminal ◀──────────────────────────┘
//!     │ reset
//!     ▼
//!  AgentTurn
//! ```
//!
//! The policy table belongs to the session and is not shared across
//! concurrent games.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    app::AgentConfig,
    error::Result,
    learning::TabularAgent,
    tictactoe::{Board, Mark, Outcome},
    types::Coord,
};

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    AgentTurn,
    OpponentTurn,
    Terminal,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// A learning agent playing successive episodes against an opponent
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    turn: TurnState,
    outcome: Option<Outcome>,
    agent: TabularAgent,
    rng: R,
    episodes_completed: usize,
}

impl GameSession<StdRng> {
    /// Create a session whose random source is seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for out-of-range tunables.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let rng = build_rng(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing exploration randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for out-of-range tunables.
    pub fn with_rng(config: AgentConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(),
            turn: TurnState::AgentTurn,
            outcome: None,
            agent: TabularAgent::new(&config),
            rng,
            episodes_completed: 0,
        })
    }

    /// Start a new episode.
    ///
    /// An unfinished episode is dropped without any update to the table.
    pub fn reset(&mut self) {
        self.agent.abandon_episode();
        self.board = Board::new();
        self.outcome = None;
        self.turn = TurnState::AgentTurn;
    }

    /// Play the agent's move if it is the agent's turn.
    ///
    /// Returns the cell played, or `None` when it is not the agent's turn.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] if the board is full while
    /// the game is still open, which the turn rules make unreachable.
    pub fn trigger_agent_move(&mut self) -> Result<Option<Coord>> {
        if self.turn != TurnState::AgentTurn {
            return Ok(None);
        }

        let coord = self.agent.select_move(&self.board, &mut self.rng)?;
        self.board = self.board.apply(coord, Mark::Agent)?;
        self.advance(TurnState::OpponentTurn);
        Ok(Some(coord))
    }

    /// Apply the opponent's move at (`row`, `col`).
    ///
    /// Returns `false`, leaving the session untouched, if it is not the
    /// opponent's turn or the cell is off the board or occupied.
    pub fn apply_opponent_move(&mut self, row: usize, col: usize) -> bool {
        if self.turn != TurnState::OpponentTurn {
            debug!(row, col, turn = ?self.turn, "rejected opponent move out of turn");
            return false;
        }

        let next = Coord::new(row, col).and_then(|coord| self.board.apply(coord, Mark::Opponent));
        match next {
            Ok(board) => {
                self.board = board;
                self.advance(TurnState::AgentTurn);
                true
            }
            Err(err) => {
                debug!(row, col, %err, "rejected opponent move");
                false
            }
        }
    }

    fn advance(&mut self, next_turn: TurnState) {
        match self.board.evaluate() {
            Some(outcome) => {
                self.agent.settle(outcome);
                self.outcome = Some(outcome);
                self.turn = TurnState::Terminal;
                self.episodes_completed += 1;
                debug!(
                    ?outcome,
                    episodes = self.episodes_completed,
                    table_size = self.agent.table().size(),
                    "episode finished"
                );
            }
            None => self.turn = next_turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Number of distinct states in the policy table
    pub fn table_size(&self) -> usize {
        self.agent.table().size()
    }

    /// Agent moves recorded in the episode in progress
    pub fn trajectory_len(&self) -> usize {
        self.agent.trajectory().len()
    }

    pub fn episodes_completed(&self) -> usize {
        self.episodes_completed
    }

    pub fn agent(&self) -> &TabularAgent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut TabularAgent {
        &mut self.agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy_session() -> GameSession {
        GameSession::new(AgentConfig::new().with_exploration_rate(0.0).with_seed(1)).unwrap()
    }

    #[test]
    fn test_starts_on_agent_turn() {
        let session = greedy_session();
        assert_eq!(session.turn(), TurnState::AgentTurn);
        assert_eq!(session.outcome(), None);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_agent_move_hands_turn_to_opponent() {
        let mut session = greedy_session();
        let coord = session.trigger_agent_move().unwrap();

        assert_eq!(coord, Some(Coord::new(0, 0).unwrap()));
        assert_eq!(session.turn(), TurnState::OpponentTurn);
        assert_eq!(session.trajectory_len(), 1);
    }

    #[test]
    fn test_agent_trigger_out_of_turn_is_noop() {
        let mut session = greedy_session();
        session.trigger_agent_move().unwrap();
        let board = *session.board();

        assert_eq!(session.trigger_agent_move().unwrap(), None);
        assert_eq!(session.board(), &board);
        assert_eq!(session.trajectory_len(), 1);
    }

    #[test]
    fn test_opponent_move_before_agent_is_rejected() {
        let mut session = greedy_session();
        assert!(!session.apply_opponent_move(1, 1));
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.turn(), TurnState::AgentTurn);
    }

    #[test]
    fn test_opponent_move_off_board_is_rejected() {
        let mut session = greedy_session();
        session.trigger_agent_move().unwrap();
        assert!(!session.apply_opponent_move(3, 1));
        assert_eq!(session.turn(), TurnState::OpponentTurn);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = GameSession::new(AgentConfig::new().with_learning_rate(2.0));
        assert!(matches!(
            result,
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }
}
