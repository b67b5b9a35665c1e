//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};
use crate::types::CELL_COUNT;

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a mark holds three in a row
    pub fn has_won(cells: &[Cell; CELL_COUNT], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First completed line in scan order, with the mark that completed it.
    ///
    /// Alternating single-cell moves cannot complete lines for both marks at
    /// once, so the first line found decides the winner.
    pub fn completed_line(cells: &[Cell; CELL_COUNT]) -> Option<([usize; 3], Mark)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match cells[a].mark() {
                Some(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some((line, mark)),
                _ => None,
            }
        })
    }

    /// Cells that would complete a line for `mark` if it played there
    pub fn winning_moves(cells: &[Cell; CELL_COUNT], mark: Mark) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    fn winning_move_in_line(
        cells: &[Cell; CELL_COUNT],
        mark: Mark,
        line: &[usize; 3],
    ) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Agent;
        cells[1] = Cell::Agent;
        cells[2] = Cell::Agent;

        assert!(LineAnalyzer::has_won(&cells, Mark::Agent));
        assert!(!LineAnalyzer::has_won(&cells, Mark::Opponent));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::Opponent;
        cells[4] = Cell::Opponent;
        cells[6] = Cell::Opponent;

        assert!(LineAnalyzer::has_won(&cells, Mark::Opponent));
        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([2, 4, 6], Mark::Opponent))
        );
    }

    #[test]
    fn test_completed_line_none_for_mixed_lines() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Agent;
        cells[1] = Cell::Opponent;
        cells[2] = Cell::Agent;

        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX-
        // X--
        // ---
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Agent;
        cells[1] = Cell::Agent;
        cells[3] = Cell::Agent;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Mark::Agent), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Mark::Opponent).is_empty());
    }
}
