//! Application-level configuration.
//!
//! ```
//! use tabular_ttt::{app::AgentConfig, session::GameSession};
//!
//! let config = AgentConfig::new().with_seed(42);
//! let session = GameSession::new(config)?;
//! assert_eq!(session.table_size(), 0);
//! # Ok::<(), tabular_ttt::Error>(())
//! ```

pub mod config;

pub use config::AgentConfig;
