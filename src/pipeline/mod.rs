//! Headless play: scripted opponents, the training loop and its observers
//!
//! Pre-training runs the same session, recorder and credit update that
//! interactive play uses; it just supplies the opponent's moves itself.

pub mod observers;
pub mod opponents;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use opponents::{FirstAvailableOpponent, MinimaxOpponent, OpponentKind, RandomOpponent};
pub use training::{
    DEFAULT_PRETRAIN_EPISODES, MAX_PRETRAIN_EPISODES, TrainingConfig, TrainingPipeline,
    TrainingResult, play_episode,
};

pub use crate::ports::{Observer, Opponent};
