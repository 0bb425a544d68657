//! Position evaluation and move selection for Reversi.
//!
//! This crate implements the strategy layer on top of [`reversi_engine`]:
//!
//! 1. **Position Evaluation** ([`position_evaluator`]) - Scores a single position for one
//!    player. Two families exist: the learned [`linear_evaluator`] and the fixed
//!    [`heuristic_evaluator`] presets built on the static [`position_table`].
//!
//! 2. **Move Selection** ([`agent`]) - Picks a move for the side to play. Greedy agents
//!    ([`greedy_agent`], [`learned_agent`]) look one ply ahead, [`search`] runs a
//!    depth-limited minimax, [`random_agent`] plays (mostly) at random.
//!
//! # Architecture
//!
//! ```text
//! Agent (choose a move)
//!     ↓ uses
//! Position Evaluator (score a position)
//!     ↓ uses
//! Board Analysis / Board Features (measure a position)
//! ```
//!
//! # Supporting Modules
//!
//! - [`board_analysis`] - Lazily cached metrics (mobility, frontier discs, corners)
//!   shared by features and heuristics
//! - [`board_feature`] - The fixed-length feature vector consumed by the linear evaluator
//!
//! # Example
//!
//! ```
//! use reversi_engine::{Board, Player};
//! use reversi_evaluator::{agent::Agent, search::MinimaxAgent};
//!
//! let mut agent = MinimaxAgent::with_depth(3);
//! let choice = agent.choose_move(&Board::INITIAL, Player::Black).unwrap();
//! assert!(Board::INITIAL.is_legal_move(choice, Player::Black));
//! ```

pub mod agent;
pub mod board_analysis;
pub mod board_feature;
pub mod greedy_agent;
pub mod heuristic_evaluator;
pub mod learned_agent;
pub mod linear_evaluator;
pub mod position_evaluator;
pub mod position_table;
pub mod random_agent;
pub mod search;
