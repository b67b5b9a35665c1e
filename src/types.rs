//! Newtype wrappers for board coordinates and policy table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Cell;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A (row, column) coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a new coordinate, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either component is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Coord { row, col })
        } else {
            Err(crate::Error::OutOfBounds { row, col })
        }
    }

    /// Coordinate for a row-major cell index (0-8).
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Coord {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8).
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical serialization of a board, used as the policy table key.
///
/// Nine characters in row-major order: `X` for the agent, `O` for the
/// opponent and `-` for an empty cell. Two boards share a key exactly when
/// their cells are identical.
///
/// # Examples
///
/// ```
/// use tabular_ttt::types::StateKey;
///
/// let key = StateKey::parse("X---O----").unwrap();
/// assert_eq!(key.as_str(), "X---O----");
/// assert!(StateKey::parse("X--").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if the key is not exactly nine
    /// characters drawn from `X`, `O` and `-`.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let count = s.chars().count();
        if count != CELL_COUNT {
            return Err(crate::Error::InvalidStateKey {
                key: s.to_string(),
                reason: format!("expected {CELL_COUNT} cells, got {count}"),
            });
        }
        if let Some((position, character)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| Cell::from_symbol(c).is_none())
        {
            return Err(crate::Error::InvalidStateKey {
                key: s.to_string(),
                reason: format!("invalid character '{character}' at position {position}"),
            });
        }
        Ok(StateKey(s.to_string()))
    }

    /// Build from cells known to be valid.
    pub(crate) fn from_cells(cells: &[Cell; CELL_COUNT]) -> Self {
        StateKey(cells.iter().map(|&c| c.symbol()).collect())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
