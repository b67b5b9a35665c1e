//! Policy table: state key -> action index -> learned value

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Learned values for every visited state
///
/// Rows are created lazily the first time a state is visited and are never
/// removed; a stored value is only ever overwritten. Unseen (state, action)
/// pairs read as `0.0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyTable {
    rows: HashMap<StateKey, BTreeMap<usize, f64>>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a zeroed row of `action_count` actions if `key` is unseen.
    ///
    /// Existing rows are left untouched.
    pub fn ensure_state(&mut self, key: &StateKey, action_count: usize) {
        if !self.rows.contains_key(key) {
            self.rows
                .insert(key.clone(), (0..action_count).map(|i| (i, 0.0)).collect());
        }
    }

    /// Stored value, or `0.0` for an unseen pair
    pub fn value_of(&self, key: &StateKey, action: usize) -> f64 {
        self.rows
            .get(key)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrite a value, creating the row or slot if needed
    pub fn set_value(&mut self, key: &StateKey, action: usize, value: f64) {
        match self.rows.get_mut(key) {
            Some(row) => {
                row.insert(action, value);
            }
            None => {
                self.rows
                    .insert(key.clone(), BTreeMap::from([(action, value)]));
            }
        }
    }

    /// Number of distinct states visited
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.rows.contains_key(key)
    }

    /// Stored row for `key` in action-index order
    pub fn action_values(&self, key: &StateKey) -> Option<Vec<(usize, f64)>> {
        self.rows
            .get(key)
            .map(|row| row.iter().map(|(&action, &value)| (action, value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StateKey {
        StateKey::parse(s).unwrap()
    }

    #[test]
    fn test_unseen_pairs_read_zero() {
        let table = PolicyTable::new();
        assert_eq!(table.value_of(&key("---------"), 3), 0.0);
        assert_eq!(table.size(), 0);
    }

    #[test]
    fn test_ensure_state_creates_zeroed_row() {
        let mut table = PolicyTable::new();
        let empty = key("---------");
        table.ensure_state(&empty, 9);

        assert_eq!(table.size(), 1);
        let row = table.action_values(&empty).unwrap();
        assert_eq!(row.len(), 9);
        assert!(row.iter().all(|&(_, v)| v == 0.0));
    }

    #[test]
    fn test_ensure_state_is_idempotent() {
        let mut table = PolicyTable::new();
        let state = key("X---O----");
        table.ensure_state(&state, 7);
        table.set_value(&state, 2, 0.75);
        table.ensure_state(&state, 7);

        assert_eq!(table.value_of(&state, 2), 0.75);
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_set_value_auto_inserts() {
        let mut table = PolicyTable::new();
        let state = key("XO-------");
        table.set_value(&state, 4, -0.5);

        assert_eq!(table.size(), 1);
        assert_eq!(table.value_of(&state, 4), -0.5);
        assert_eq!(table.value_of(&state, 0), 0.0);
        assert_eq!(table.action_values(&state), Some(vec![(4, -0.5)]));
    }
}
