//! Episode trajectory and backward credit assignment

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy_table::PolicyTable;
use crate::types::StateKey;

/// One agent move: the state it was made in and its action index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub state: StateKey,
    pub action: usize,
}

/// Agent moves of the episode in progress, oldest first
///
/// Opponent moves are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    steps: Vec<Step>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: StateKey, action: usize) {
        self.steps.push(Step { state, action });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drop the recorded moves without learning from them
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

/// Applies the terminal reward to a finished trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditUpdater {
    learning_rate: f64,
    discount_factor: f64,
}

impl CreditUpdater {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Walk the trajectory newest to oldest, moving each value toward the
    /// current target and discounting the freshly written value into the
    /// target for the move before it. The trajectory is empty afterwards.
    pub fn settle(&self, table: &mut PolicyTable, trajectory: &mut Trajectory, reward: f64) {
        let mut target = reward;
        for step in trajectory.steps.iter().rev() {
            let old_value = table.value_of(&step.state, step.action);
            let new_value = old_value + self.learning_rate * (target - old_value);
            table.set_value(&step.state, step.action, new_value);
            target = new_value * self.discount_factor;
        }

        debug!(
            reward,
            steps = trajectory.len(),
            table_size = table.size(),
            "settled episode"
        );
        trajectory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StateKey {
        StateKey::parse(s).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_settle_cascades_discounted_targets() {
        let mut table = PolicyTable::new();
        let mut trajectory = Trajectory::new();
        trajectory.record(key("---------"), 0);
        trajectory.record(key("X-----O--"), 0);
        trajectory.record(key("XX----OO-"), 0);

        CreditUpdater::new(0.5, 0.9).settle(&mut table, &mut trajectory, 1.0);

        // 0 + 0.5 * (1 - 0) = 0.5, then target 0.45
        assert!(close(table.value_of(&key("XX----OO-"), 0), 0.5));
        // 0 + 0.5 * 0.45 = 0.225, then target 0.2025
        assert!(close(table.value_of(&key("X-----O--"), 0), 0.225));
        assert!(close(table.value_of(&key("---------"), 0), 0.10125));
        assert!(trajectory.is_empty());
    }

    #[test]
    fn test_settle_bootstraps_from_updated_value_not_reward() {
        let mut table = PolicyTable::new();
        let later = key("X---O----");
        let earlier = key("---------");
        table.set_value(&later, 1, 0.8);
        table.set_value(&earlier, 0, 0.1);

        let mut trajectory = Trajectory::new();
        trajectory.record(earlier.clone(), 0);
        trajectory.record(later.clone(), 1);

        CreditUpdater::new(0.5, 0.9).settle(&mut table, &mut trajectory, 0.0);

        // later: 0.8 + 0.5 * (0 - 0.8) = 0.4 -> target 0.36
        assert!(close(table.value_of(&later, 1), 0.4));
        // earlier: 0.1 + 0.5 * (0.36 - 0.1) = 0.23
        assert!(close(table.value_of(&earlier, 0), 0.23));
    }

    #[test]
    fn test_settle_empty_trajectory_is_noop() {
        let mut table = PolicyTable::new();
        let mut trajectory = Trajectory::new();
        CreditUpdater::new(0.5, 0.9).settle(&mut table, &mut trajectory, -1.0);

        assert_eq!(table.size(), 0);
        assert!(trajectory.is_empty());
    }

    #[test]
    fn test_repeated_state_in_trajectory_updates_twice() {
        let mut table = PolicyTable::new();
        let state = key("---------");
        let mut trajectory = Trajectory::new();
        trajectory.record(state.clone(), 0);
        trajectory.record(state.clone(), 0);

        CreditUpdater::new(1.0, 1.0).settle(&mut table, &mut trajectory, 1.0);

        assert!(close(table.value_of(&state, 0), 1.0));
    }
}
