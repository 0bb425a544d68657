//! Game flow on top of the core board rules.
//!
//! - [`GameSession`] - board plus side to move; skips a side that cannot move
//! - [`GameOutcome`] - final piece counts, winner and terminal reward
//!
//! # Game Flow
//!
//! 1. Start from [`GameSession::new`] (initial position, Black to move)
//! 2. If the side to move has legal moves, pick one and [`GameSession::play`] it
//! 3. Otherwise [`GameSession::pass`]
//! 4. Repeat until [`GameSession::is_finished`] (neither side can move)
//!
//! # Example
//!
//! ```
//! use reversi_engine::GameSession;
//!
//! let mut session = GameSession::new();
//! while !session.is_finished() {
//!     match session.legal_moves().first() {
//!         Some(square) => {
//!             session.play(*square).unwrap();
//!         }
//!         None => session.pass(),
//!     }
//! }
//! let outcome = session.outcome();
//! assert!(outcome.black() + outcome.white() <= 64);
//! ```

pub use self::{game_outcome::*, game_session::*};

mod game_outcome;
mod game_session;
