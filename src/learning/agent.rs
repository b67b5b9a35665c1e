//! Tabular learning agent
//!
//! Owns the policy table and the trajectory of the episode in progress. The
//! random source is supplied by the caller on every move.

use rand::Rng;
use tracing::debug;

use super::{
    episode::{CreditUpdater, Trajectory},
    policy_table::PolicyTable,
    selector::ActionSelector,
};
use crate::{
    app::AgentConfig,
    error::Result,
    tictactoe::{Board, Outcome},
    types::Coord,
};

#[derive(Debug, Clone)]
pub struct TabularAgent {
    table: PolicyTable,
    trajectory: Trajectory,
    selector: ActionSelector,
    updater: CreditUpdater,
}

impl TabularAgent {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            table: PolicyTable::new(),
            trajectory: Trajectory::new(),
            selector: ActionSelector::new(config.exploration_rate),
            updater: CreditUpdater::new(config.learning_rate, config.discount_factor),
        }
    }

    /// Pick a move on `board` and record it in the trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] if the board is full.
    pub fn select_move<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Result<Coord> {
        let key = board.serialize();
        let actions = board.available_actions();
        let action = self
            .selector
            .choose(&mut self.table, &key, actions.len(), rng)?;
        let coord = actions[action];

        debug!(state = %key, action, %coord, "agent move");
        self.trajectory.record(key, action);
        Ok(coord)
    }

    /// Credit the finished episode with the outcome's reward.
    pub fn settle(&mut self, outcome: Outcome) {
        self.updater
            .settle(&mut self.table, &mut self.trajectory, outcome.reward());
    }

    /// Forget the unfinished episode; the table is left as it is.
    pub fn abandon_episode(&mut self) {
        if !self.trajectory.is_empty() {
            debug!(steps = self.trajectory.len(), "abandoning unsettled episode");
        }
        self.trajectory.clear();
    }

    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut PolicyTable {
        &mut self.table
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn selector(&self) -> ActionSelector {
        self.selector
    }

    pub fn updater(&self) -> CreditUpdater {
        self.updater
    }

    /// Values for each available action on `board`, paired with its cell.
    ///
    /// Returns `None` for a state the agent has never visited.
    pub fn move_values(&self, board: &Board) -> Option<Vec<(Coord, f64)>> {
        let key = board.serialize();
        if !self.table.contains(&key) {
            return None;
        }
        Some(
            board
                .available_actions()
                .into_iter()
                .enumerate()
                .map(|(action, coord)| (coord, self.table.value_of(&key, action)))
                .collect(),
        )
    }
}
