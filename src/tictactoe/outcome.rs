//! Terminal outcomes and the reward each one pays the agent

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Mark;

/// Outcome of a finished episode, always from the agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    AgentWin,
    OpponentWin,
    Draw,
}

impl Outcome {
    /// Outcome for a completed line of `mark`
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Agent => Outcome::AgentWin,
            Mark::Opponent => Outcome::OpponentWin,
        }
    }

    /// Terminal reward: +1 win, 0 draw, -1 loss
    pub fn reward(self) -> f64 {
        match self {
            Outcome::AgentWin => 1.0,
            Outcome::Draw => 0.0,
            Outcome::OpponentWin => -1.0,
        }
    }

    /// Winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::AgentWin => Some(Mark::Agent),
            Outcome::OpponentWin => Some(Mark::Opponent),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(mark) => write!(f, "Winner: {}", mark.symbol()),
            None => f.write_str("It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_follow_agent_perspective() {
        assert_eq!(Outcome::AgentWin.reward(), 1.0);
        assert_eq!(Outcome::Draw.reward(), 0.0);
        assert_eq!(Outcome::OpponentWin.reward(), -1.0);
    }

    #[test]
    fn banner_text() {
        assert_eq!(Outcome::AgentWin.to_string(), "Winner: X");
        assert_eq!(Outcome::win_for(Mark::Opponent).to_string(), "Winner: O");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
