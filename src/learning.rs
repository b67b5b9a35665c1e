//! Tabular learning engine
//!
//! The agent keeps a table of values keyed by serialized board and by the
//! position of a move within that board's available-actions list. Moves are
//! chosen ε-greedily, recorded for the current episode, and credited all at
//! once when the episode ends:
//!
//! ```text
//! target ← reward
//! for (state, action) in trajectory, newest first:
//!     Q(s,a) ← Q(s,a) + α (target − Q(s,a))
//!     target ← γ Q(s,a)
//! ```
//!
//! Earlier moves never see the terminal reward directly, only the discounted
//! echo of the value just written for the move after them.

pub mod agent;
pub mod episode;
pub mod policy_table;
pub mod selector;

pub use agent::TabularAgent;
pub use episode::{CreditUpdater, Step, Trajectory};
pub use policy_table::PolicyTable;
pub use selector::ActionSelector;
