//! Reversi (Othello) board engine.
//!
//! This crate provides the game rules consumed by the agents and the trainer:
//!
//! - [`Board`] - 8×8 grid of [`Cell`]s with legal-move enumeration and move application
//! - [`Player`] / [`Cell`] - side tags and cell states
//! - [`Square`] - validated zero-based `(row, col)` coordinate
//! - [`GameSession`] - board plus side to move, with pass handling
//! - [`GameOutcome`] - final piece counts and terminal reward
//! - [`TurnError`] - an illegal square or a pass while a move was available
//!
//! # Example
//!
//! ```
//! use reversi_engine::{Board, Player};
//!
//! let mut board = Board::INITIAL;
//! let moves = board.legal_moves(Player::Black);
//! assert_eq!(moves.len(), 4);
//!
//! let flipped = board.apply_move(moves[0], Player::Black).unwrap();
//! assert_eq!(flipped, 1);
//! assert_eq!(board.piece_count(Player::Black), 4);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("square ({row}, {col}) is outside the 8x8 board")]
pub struct SquareOutOfRangeError {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{square} is not a legal move for {player}")]
pub struct IllegalMoveError {
    pub square: Square,
    pub player: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{player} cannot pass while a legal move is available")]
pub struct IllegalPassError {
    pub player: Player,
}

/// Rejected turn in a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TurnError {
    #[display("{_0}")]
    IllegalMove(IllegalMoveError),
    #[display("{_0}")]
    IllegalPass(IllegalPassError),
}

impl From<IllegalMoveError> for TurnError {
    fn from(err: IllegalMoveError) -> Self {
        Self::IllegalMove(err)
    }
}

impl From<IllegalPassError> for TurnError {
    fn from(err: IllegalPassError) -> Self {
        Self::IllegalPass(err)
    }
}
