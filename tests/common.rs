//! Shared helpers for the integration tests.

#![allow(dead_code)]

use tabular_ttt::{AgentConfig, GameSession, StateKey, TurnState};

pub const EPS: f64 = 1e-12;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn key(s: &str) -> StateKey {
    StateKey::parse(s).expect("valid state key")
}

/// Session that never explores, so the agent plays the first cell of the
/// best-valued actions.
pub fn greedy_session(seed: u64) -> GameSession {
    GameSession::new(AgentConfig::new().with_exploration_rate(0.0).with_seed(seed))
        .expect("valid config")
}

/// Alternate agent triggers with the given opponent moves until the moves
/// run out or the episode ends.
pub fn play_against(session: &mut GameSession, opponent_moves: &[(usize, usize)]) {
    let mut moves = opponent_moves.iter();
    loop {
        match session.turn() {
            TurnState::AgentTurn => {
                session.trigger_agent_move().expect("agent move");
            }
            TurnState::OpponentTurn => {
                let Some(&(row, col)) = moves.next() else {
                    return;
                };
                assert!(
                    session.apply_opponent_move(row, col),
                    "opponent move ({row}, {col}) should be legal"
                );
            }
            TurnState::Terminal => return,
        }
    }
}
