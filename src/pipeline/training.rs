//! Training pipeline: headless episodes against a scripted opponent

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Observer, Opponent},
    session::{GameSession, TurnState},
    tictactoe::Outcome,
};

/// Default number of pre-training episodes
pub const DEFAULT_PRETRAIN_EPISODES: usize = 50;

/// Upper bound on pre-training episodes accepted from the command line
pub const MAX_PRETRAIN_EPISODES: usize = 1000;

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of complete episodes to play
    pub episodes: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: DEFAULT_PRETRAIN_EPISODES,
        }
    }
}

/// Result of a training run, counted from the agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    /// Policy table size once the run finished
    pub table_size: usize,
}

impl TrainingResult {
    pub fn new(wins: usize, draws: usize, losses: usize, table_size: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            table_size,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays complete episodes on a session, learning from each one
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run `config.episodes` episodes of `session` against `opponent`.
    ///
    /// Each episode starts with a reset, so an episode left open on the
    /// session is abandoned. The session is left in the terminal state of the
    /// last episode.
    pub fn run<R: Rng>(
        &mut self,
        session: &mut GameSession<R>,
        opponent: &mut dyn Opponent,
    ) -> Result<TrainingResult> {
        let total = self.config.episodes;
        info!(
            episodes = total,
            opponent = opponent.name(),
            table_size = session.table_size(),
            "training started"
        );

        for observer in &mut self.observers {
            observer.on_training_start(total)?;
        }

        let (mut wins, mut draws, mut losses) = (0, 0, 0);
        for game_num in 0..total {
            let outcome = play_episode(session, opponent)?;
            match outcome {
                Outcome::AgentWin => wins += 1,
                Outcome::Draw => draws += 1,
                Outcome::OpponentWin => losses += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome, session.table_size())?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(wins, draws, losses, session.table_size());
        info!(
            wins = result.wins,
            draws = result.draws,
            losses = result.losses,
            table_size = result.table_size,
            "training finished"
        );
        Ok(result)
    }
}

/// Reset `session` and play it to a terminal outcome.
///
/// # Errors
///
/// Returns [`Error::RejectedMove`] if the opponent proposes a move the session
/// refuses, and propagates errors from the agent or opponent.
pub fn play_episode<R: Rng>(
    session: &mut GameSession<R>,
    opponent: &mut dyn Opponent,
) -> Result<Outcome> {
    session.reset();
    let outcome = loop {
        match session.turn() {
            TurnState::AgentTurn => {
                session.trigger_agent_move()?;
            }
            TurnState::OpponentTurn => {
                let coord = opponent.select_move(session.board())?;
                if !session.apply_opponent_move(coord.row(), coord.col()) {
                    return Err(Error::RejectedMove {
                        row: coord.row(),
                        col: coord.col(),
                        opponent: opponent.name().to_string(),
                    });
                }
            }
            TurnState::Terminal => match session.outcome() {
                Some(outcome) => break outcome,
                None => unreachable!("terminal session without an outcome"),
            },
        }
    };

    debug!(?outcome, table_size = session.table_size(), "episode played");
    Ok(outcome)
}
