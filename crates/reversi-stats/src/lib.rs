//! Statistics helpers for summarizing self-play results.
//!
//! - [`descriptive`]: min/max/mean/standard deviation of a sample
//! - [`record`]: win/loss/draw tallies of a series of games
//!
//! # Examples
//!
//! ```
//! use reversi_stats::{descriptive::DescriptiveStats, record::GameRecord};
//!
//! let stats = DescriptiveStats::new([1.0, -1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(stats.mean, 0.5);
//!
//! let mut record = GameRecord::default();
//! record.push_reward(1.0);
//! record.push_reward(0.0);
//! assert_eq!(record.win_rate(), Some(0.5));
//! ```

pub mod descriptive;
pub mod record;
