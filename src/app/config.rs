//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

/// Default probability of a random move.
pub const DEFAULT_EXPLORATION_RATE: f64 = 0.2;
/// Default step size toward the update target.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
/// Default discount applied when propagating values backward.
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

/// Tunables for a learning session.
///
/// # Examples
///
/// ```
/// use tabular_ttt::app::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_exploration_rate(0.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.learning_rate, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Probability of a uniformly random move, in [0, 1]
    pub exploration_rate: f64,
    /// Step size α, in (0, 1]
    pub learning_rate: f64,
    /// Discount γ, in (0, 1]
    pub discount_factor: f64,
    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the default tunables.
    pub fn new() -> Self {
        Self {
            exploration_rate: DEFAULT_EXPLORATION_RATE,
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            seed: None,
        }
    }

    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_discount_factor(mut self, factor: f64) -> Self {
        self.discount_factor = factor;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every tunable is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        check_range(
            "exploration_rate",
            self.exploration_rate,
            0.0,
            true,
            "[0, 1]",
        )?;
        check_range("learning_rate", self.learning_rate, 0.0, false, "(0, 1]")?;
        check_range(
            "discount_factor",
            self.discount_factor,
            0.0,
            false,
            "(0, 1]",
        )?;
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(
    name: &str,
    value: f64,
    lower: f64,
    lower_inclusive: bool,
    range: &str,
) -> Result<(), crate::Error> {
    let above_lower = if lower_inclusive {
        value >= lower
    } else {
        value > lower
    };
    if value.is_finite() && above_lower && value <= 1.0 {
        Ok(())
    } else {
        Err(crate::Error::InvalidConfiguration {
            message: format!("{name} must be in {range}, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AgentConfig::default();
        assert_eq!(config.exploration_rate, 0.2);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.discount_factor, 0.9);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let config = AgentConfig::new()
            .with_exploration_rate(0.0)
            .with_learning_rate(1.0)
            .with_discount_factor(1.0);
        assert!(config.validate().is_ok());
        assert!(
            AgentConfig::new()
                .with_exploration_rate(1.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = AgentConfig::new()
            .with_learning_rate(0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("learning_rate"));

        assert!(
            AgentConfig::new()
                .with_exploration_rate(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            AgentConfig::new()
                .with_discount_factor(1.5)
                .validate()
                .is_err()
        );
        assert!(
            AgentConfig::new()
                .with_exploration_rate(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
