//! ε-greedy action selection over a state's available actions

use rand::Rng;
use tracing::trace;

use super::policy_table::PolicyTable;
use crate::{error::Result, types::StateKey};

/// Picks an action index for a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionSelector {
    exploration_rate: f64,
}

impl ActionSelector {
    pub fn new(exploration_rate: f64) -> Self {
        Self { exploration_rate }
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Choose an index into a list of `action_count` available actions.
    ///
    /// The state's row is initialized first. With probability
    /// `exploration_rate` a uniformly random index is returned; otherwise the
    /// index with the highest value, lowest index winning ties.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] when `action_count` is zero.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        table: &mut PolicyTable,
        key: &StateKey,
        action_count: usize,
        rng: &mut R,
    ) -> Result<usize> {
        if action_count == 0 {
            return Err(crate::Error::NoAvailableActions {
                state: key.to_string(),
            });
        }

        table.ensure_state(key, action_count);

        if rng.random::<f64>() < self.exploration_rate {
            let action = rng.random_range(0..action_count);
            trace!(state = %key, action, "exploring");
            return Ok(action);
        }

        Ok(Self::greedy(table, key, action_count))
    }

    /// Highest-valued index, first occurrence on ties
    pub fn greedy(table: &PolicyTable, key: &StateKey, action_count: usize) -> usize {
        let mut best_action = 0;
        let mut best_value = f64::NEG_INFINITY;
        for action in 0..action_count {
            let value = table.value_of(key, action);
            if value > best_value {
                best_value = value;
                best_action = action;
            }
        }
        best_action
    }
}
