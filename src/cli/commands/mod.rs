//! Subcommands and the arguments they share

pub mod play;
pub mod train;

use clap::Args;

use crate::app::{
    AgentConfig,
    config::{DEFAULT_DISCOUNT_FACTOR, DEFAULT_EXPLORATION_RATE, DEFAULT_LEARNING_RATE},
};

/// Learning tunables accepted by every subcommand
#[derive(Args, Debug, Clone)]
pub struct TunableArgs {
    /// Probability of a random move, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_EXPLORATION_RATE)]
    pub exploration_rate: f64,

    /// Step size toward the update target, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Discount applied when crediting earlier moves, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_DISCOUNT_FACTOR)]
    pub discount_factor: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TunableArgs {
    pub fn agent_config(&self) -> AgentConfig {
        let config = AgentConfig::new()
            .with_exploration_rate(self.exploration_rate)
            .with_learning_rate(self.learning_rate)
            .with_discount_factor(self.discount_factor);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Seed for the scripted opponent, kept distinct from the agent's stream
    pub fn opponent_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(1))
    }
}
