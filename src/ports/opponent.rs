//! Opponent port - the player the agent learns against

use crate::{Result, tictactoe::Board, types::Coord};

/// Supplies the opponent's moves during headless play
///
/// Interactive front ends do not need this trait; they call
/// [`crate::session::GameSession::apply_opponent_move`] directly. Training
/// pipelines use it to drive complete episodes.
///
/// # Examples
///
/// ```
/// use tabular_ttt::{Result, ports::Opponent, tictactoe::Board, types::Coord};
///
/// struct LastCell;
///
/// impl Opponent for LastCell {
///     fn select_move(&mut self, board: &Board) -> Result<Coord> {
///         board
///             .available_actions()
///             .last()
///             .copied()
///             .ok_or_else(|| tabular_ttt::Error::NoAvailableActions {
///                 state: board.serialize().into_string(),
///             })
///     }
///
///     fn name(&self) -> &str {
///         "last-cell"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Select an empty cell on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty cell.
    fn select_move(&mut self, board: &Board) -> Result<Coord>;

    /// Name used in logs and summaries
    fn name(&self) -> &str;
}
