//! Trainer configuration.
//!
//! Every field has a default, so a JSON file only needs to name the values it
//! changes:
//!
//! ```
//! use reversi_training::config::TrainerConfig;
//!
//! let config: TrainerConfig = serde_json::from_str(r#"{ "epsilon": 0.2, "seed": 7 }"#).unwrap();
//! assert_eq!(config.epsilon, 0.2);
//! assert_eq!(config.learning_rate, 0.01);
//! config.validate().unwrap();
//! ```

use reversi_engine::Player;
use reversi_evaluator::linear_evaluator::WeightVector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("learning rate must be positive and finite, got {value}")]
    LearningRate { value: f32 },
    #[display("epsilon must be within [0, 1], got {value}")]
    Epsilon { value: f64 },
    #[display("initial weight range must be non-negative and finite, got {value}")]
    InitialWeightRange { value: f32 },
    #[display("log interval must be at least 1")]
    LogInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Step size `α` of the TD(0) update.
    pub learning_rate: f32,
    /// Probability of playing a uniformly random move on the learner's turn.
    pub epsilon: f64,
    /// Initial weights are drawn uniformly from `[-range, range]`.
    pub initial_weight_range: f32,
    /// Starting weights; overrides the random initialization when present.
    pub initial_weights: Option<WeightVector>,
    /// Side played by the learner in every training game.
    pub learner: Player,
    /// Epochs between two progress snapshots.
    pub log_interval: usize,
    /// Seed of the trainer's random source. Unseeded runs are not reproducible.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epsilon: 0.1,
            initial_weight_range: 0.1,
            initial_weights: None,
            learner: Player::Black,
            log_interval: 1000,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::LearningRate {
                value: self.learning_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::Epsilon {
                value: self.epsilon,
            });
        }
        if !(self.initial_weight_range.is_finite() && self.initial_weight_range >= 0.0) {
            return Err(ConfigError::InitialWeightRange {
                value: self.initial_weight_range,
            });
        }
        if self.log_interval == 0 {
            return Err(ConfigError::LogInterval);
        }
        Ok(())
    }
}
