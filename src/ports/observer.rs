//! Observer port - watching a training run
//!
//! Observers are called in this order:
//! 1. `on_training_start(total_games)` - once
//! 2. `on_game_end(game_num, outcome, table_size)` - after each episode
//! 3. `on_training_end()` - once

use crate::{Result, tictactoe::Outcome};

/// Observer trait for monitoring training
///
/// # Examples
///
/// ```no_run
/// use tabular_ttt::{ports::Observer, tictactoe::Outcome};
///
/// struct CountWins {
///     wins: usize,
/// }
///
/// impl Observer for CountWins {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         outcome: Outcome,
///         _table_size: usize,
///     ) -> tabular_ttt::Result<()> {
///         if outcome == Outcome::AgentWin {
///             self.wins += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after an episode has been settled.
    ///
    /// * `game_num` - Index of the completed game (0-based)
    /// * `outcome` - Final outcome from the agent's perspective
    /// * `table_size` - Policy table size after the update
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome, _table_size: usize) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
