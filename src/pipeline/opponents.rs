//! Scripted opponents for headless play

use std::{collections::HashMap, fmt, str::FromStr};

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Opponent,
    tictactoe::{Board, LineAnalyzer, Mark},
    types::{Coord, StateKey},
};

fn no_actions(board: &Board) -> Error {
    Error::NoAvailableActions {
        state: board.serialize().into_string(),
    }
}

/// Plays a uniformly random empty cell
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Opponent for RandomOpponent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        board
            .available_actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| no_actions(board))
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always plays the first empty cell in row-major order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailableOpponent;

impl Opponent for FirstAvailableOpponent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        board
            .available_actions()
            .first()
            .copied()
            .ok_or_else(|| no_actions(board))
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Perfect play for the opponent mark, solved with memoised negamax
///
/// Scores prefer faster wins and slower losses. Among equally scored moves
/// the first in row-major order is played, so the opponent is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MinimaxOpponent {
    memo: HashMap<(StateKey, Mark), i32>,
}

impl MinimaxOpponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `board` for `to_move`, positive when `to_move` can force a win
    fn negamax(&mut self, board: &Board, to_move: Mark) -> i32 {
        if let Some(outcome) = board.evaluate() {
            let margin = 1 + board.available_actions().len() as i32;
            return match outcome.winner() {
                Some(mark) if mark == to_move => margin,
                Some(_) => -margin,
                None => 0,
            };
        }

        let key = (board.serialize(), to_move);
        if let Some(&value) = self.memo.get(&key) {
            return value;
        }

        let mut best = i32::MIN;
        for coord in board.available_actions() {
            if let Ok(next) = board.apply(coord, to_move) {
                best = best.max(-self.negamax(&next, to_move.other()));
            }
        }

        self.memo.insert(key, best);
        best
    }

    /// Optimal cell for the opponent mark, `None` on a full board
    pub fn best_move(&mut self, board: &Board) -> Option<Coord> {
        // Any immediate win scores highest; the lowest index is the one negamax would pick
        if let Some(&index) = LineAnalyzer::winning_moves(board.cells(), Mark::Opponent).first() {
            return Some(Coord::from_index(index));
        }

        let mut best: Option<(Coord, i32)> = None;
        for coord in board.available_actions() {
            let Ok(next) = board.apply(coord, Mark::Opponent) else {
                continue;
            };
            let score = -self.negamax(&next, Mark::Agent);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((coord, score));
            }
        }
        best.map(|(coord, _)| coord)
    }
}

impl Opponent for MinimaxOpponent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        self.best_move(board).ok_or_else(|| no_actions(board))
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Opponent selectable by name on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Random,
    First,
    Minimax,
}

impl OpponentKind {
    const EXPECTED: &'static str = "random, first, minimax";

    /// Build the opponent; `seed` only affects [`OpponentKind::Random`]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Opponent> {
        match self {
            OpponentKind::Random => Box::new(RandomOpponent::new(seed)),
            OpponentKind::First => Box::new(FirstAvailableOpponent),
            OpponentKind::Minimax => Box::new(MinimaxOpponent::new()),
        }
    }
}

impl FromStr for OpponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "uniform" => Ok(OpponentKind::Random),
            "first" | "first-available" => Ok(OpponentKind::First),
            "minimax" | "optimal" | "perfect" => Ok(OpponentKind::Minimax),
            _ => Err(Error::InvalidOpponent {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpponentKind::Random => "random",
            OpponentKind::First => "first",
            OpponentKind::Minimax => "minimax",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(key: &str) -> Board {
        Board::from_key(&StateKey::parse(key).unwrap())
    }

    #[test]
    fn test_first_available_is_row_major() {
        let mut opponent = FirstAvailableOpponent;
        let coord = opponent.select_move(&board("XO-------")).unwrap();
        assert_eq!(coord, Coord::new(0, 2).unwrap());
    }

    #[test]
    fn test_random_stays_on_empty_cells() {
        let mut opponent = RandomOpponent::new(Some(9));
        let position = board("XOX-O-X--");
        for _ in 0..50 {
            let coord = opponent.select_move(&position).unwrap();
            assert!(position.is_empty_at(coord));
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let full = board("XOXXOXOXO");
        assert!(FirstAvailableOpponent.select_move(&full).is_err());
        assert!(RandomOpponent::new(Some(1)).select_move(&full).is_err());
        assert!(MinimaxOpponent::new().select_move(&full).is_err());
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        // X X -
        // O O -
        // X - -
        let mut opponent = MinimaxOpponent::new();
        let coord = opponent.select_move(&board("XX-OO-X--")).unwrap();
        assert_eq!(coord, Coord::new(1, 2).unwrap());
    }

    #[test]
    fn test_minimax_blocks_open_line() {
        // X X -
        // - O -
        // - - -
        let mut opponent = MinimaxOpponent::new();
        let coord = opponent.select_move(&board("XX--O----")).unwrap();
        assert_eq!(coord, Coord::new(0, 2).unwrap());
    }

    #[test]
    fn test_minimax_answers_corner_with_center() {
        let mut opponent = MinimaxOpponent::new();
        let coord = opponent.select_move(&board("X--------")).unwrap();
        assert_eq!(coord, Coord::new(1, 1).unwrap());
    }

    #[test]
    fn test_parse_opponent_kind() {
        assert_eq!(
            "Random".parse::<OpponentKind>().unwrap(),
            OpponentKind::Random
        );
        assert_eq!(
            "optimal".parse::<OpponentKind>().unwrap(),
            OpponentKind::Minimax
        );
        let err = "human".parse::<OpponentKind>().unwrap_err();
        assert!(err.to_string().contains("random, first, minimax"));
    }
}
