//! Observer implementations for training pipelines

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Result, ports::Observer, tictactoe::Outcome};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn message(&self, table_size: usize) -> String {
        format!(
            "W:{} D:{} L:{} table:{}",
            self.wins, self.draws, self.losses, table_size
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome, table_size: usize) -> Result<()> {
        match outcome {
            Outcome::AgentWin => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::OpponentWin => self.losses += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message(table_size));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish();
        }
        Ok(())
    }
}

/// Metrics summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Wins over the most recent `window` games
    pub recent_win_rate: f64,
    /// Losses over the most recent `window` games
    pub recent_loss_rate: f64,
    pub table_size: usize,
}

/// Tracks outcomes and policy table growth across a run
pub struct MetricsObserver {
    window: usize,
    outcomes: Vec<Outcome>,
    table_sizes: Vec<usize>,
}

impl MetricsObserver {
    /// `window` is the number of recent games used for the recent rates
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            outcomes: Vec::new(),
            table_sizes: Vec::new(),
        }
    }

    /// Table size after each game, in game order
    pub fn table_sizes(&self) -> &[usize] {
        &self.table_sizes
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    fn recent_rate(&self, target: Outcome) -> f64 {
        let start = self.outcomes.len().saturating_sub(self.window);
        let recent = &self.outcomes[start..];
        if recent.is_empty() {
            0.0
        } else {
            recent.iter().filter(|&&o| o == target).count() as f64 / recent.len() as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        let count = |target: Outcome| self.outcomes.iter().filter(|&&o| o == target).count();
        MetricsSummary {
            total_games: self.outcomes.len(),
            wins: count(Outcome::AgentWin),
            draws: count(Outcome::Draw),
            losses: count(Outcome::OpponentWin),
            recent_win_rate: self.recent_rate(Outcome::AgentWin),
            recent_loss_rate: self.recent_rate(Outcome::OpponentWin),
            table_size: self.table_sizes.last().copied().unwrap_or(0),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Observer for MetricsObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.outcomes.reserve(total_games);
        self.table_sizes.reserve(total_games);
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: Outcome, table_size: usize) -> Result<()> {
        self.outcomes.push(outcome);
        self.table_sizes.push(table_size);
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        let summary = self.summary();
        info!(
            window = self.window,
            recent_win_rate = summary.recent_win_rate,
            recent_loss_rate = summary.recent_loss_rate,
            table_size = summary.table_size,
            "recent performance"
        );
        Ok(())
    }
}
