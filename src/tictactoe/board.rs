//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, outcome::Outcome};
use crate::types::{CELL_COUNT, Coord, StateKey};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Agent,
    Opponent,
}

impl Cell {
    /// Symbol used in state keys and board rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Agent => 'X',
            Cell::Opponent => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::Agent),
            'O' => Some(Cell::Opponent),
            _ => None,
        }
    }

    /// Mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Agent => Some(Mark::Agent),
            Cell::Opponent => Some(Mark::Opponent),
            Cell::Empty => None,
        }
    }
}

/// A mark a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Agent,
    Opponent,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::Agent => Mark::Opponent,
            Mark::Opponent => Mark::Agent,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Agent => Cell::Agent,
            Mark::Opponent => Cell::Opponent,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}

/// A 3x3 grid of cells
///
/// `Board` is `Copy`: every move produces a fresh snapshot, so a board held
/// by the caller is never changed behind its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Rebuild the board a state key was serialized from
    ///
    /// # Examples
    ///
    /// ```
    /// use tabular_ttt::{tictactoe::Board, types::StateKey};
    ///
    /// let key = StateKey::parse("XO--X---O").unwrap();
    /// assert_eq!(Board::from_key(&key).serialize(), key);
    /// ```
    pub fn from_key(key: &StateKey) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(key.as_str().chars()) {
            // StateKey guarantees every symbol is valid
            *cell = Cell::from_symbol(symbol).unwrap_or(Cell::Empty);
        }
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cell(coord) == Cell::Empty
    }

    /// Number of marks placed so far
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `mark` on an empty cell and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOccupied`] if the cell already holds a mark.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, coord: Coord, mark: Mark) -> Result<Board, crate::Error> {
        if !self.is_empty_at(coord) {
            return Err(crate::Error::CellOccupied {
                row: coord.row(),
                col: coord.col(),
            });
        }

        let mut next = *self;
        next.cells[coord.index()] = mark.to_cell();
        Ok(next)
    }

    /// Empty cells in row-major order (row ascending, then column).
    ///
    /// Action indices stored in the policy table are positions in this list,
    /// so the order must depend on nothing but the cell contents.
    pub fn available_actions(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Terminal outcome, or `None` while the game continues
    pub fn evaluate(&self) -> Option<Outcome> {
        if let Some((_, mark)) = LineAnalyzer::completed_line(&self.cells) {
            return Some(Outcome::win_for(mark));
        }
        if self.cells.contains(&Cell::Empty) {
            None
        } else {
            Some(Outcome::Draw)
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.evaluate().is_some()
    }

    /// Canonical row-major key for the policy table
    pub fn serialize(&self) -> StateKey {
        StateKey::from_cells(&self.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.symbol())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
