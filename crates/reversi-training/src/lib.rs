//! Training system for the linear evaluator using temporal-difference learning.
//!
//! The learner plays complete games against fixed opponents and, after each
//! game, pulls the value estimate of every position it faced toward the value
//! of the position it reached next (TD(0)), with the final result as the last
//! target.
//!
//! # How Training Works
//!
//! 1. **Initialize** - Draw small random weights (or take them from the configuration)
//! 2. **Play** - The learner plays epsilon-greedily, recording a feature vector before each move
//! 3. **Score** - The final disc count gives a reward of `+1`, `0` or `-1`
//! 4. **Update** - Walk the recorded positions backwards applying the TD(0) rule
//! 5. **Repeat** - Continue for the configured number of games, stage by stage
//!
//! # Architecture
//!
//! ```text
//! TD Trainer
//!     ↓ updates
//! Weight Vector
//!     ↓ used by
//! Learned Agent (reversi-evaluator)
//!     ↓ plays against
//! Curriculum opponents (corner-first, move-cell, ...)
//! ```
//!
//! See the [`td_trainer`] module for the exact per-game protocol and [`config`]
//! for the tunable parameters.
//!
//! # Example
//!
//! ```
//! use reversi_evaluator::random_agent::RandomAgent;
//! use reversi_training::{config::TrainerConfig, td_trainer::TdTrainer};
//!
//! let config = TrainerConfig {
//!     seed: Some(42),
//!     ..TrainerConfig::default()
//! };
//! let mut trainer = TdTrainer::new(config).unwrap();
//! let weights = trainer.run(20, &mut RandomAgent::seeded(7));
//! assert_eq!(&weights, trainer.learner().weights());
//! ```
//!
//! # Current Limitations
//!
//! - **Single learner side**: The learner keeps the same color for a whole run.
//! - **Linear model**: Feature interactions cannot be represented.
//! - **Sequential**: Games are played one after another on a single thread.

pub mod config;
pub mod progress;
pub mod td_trainer;
pub mod trajectory;
pub mod weights;
