use std::cmp::Ordering;

use crate::{Board, Player};

/// Final piece counts of a game.
///
/// The winner is the side with more discs; equal counts are a draw.
///
/// # Example
///
/// ```
/// use reversi_engine::{Board, GameOutcome, Player};
///
/// let outcome = GameOutcome::from_board(&Board::INITIAL);
/// assert_eq!(outcome.winner(), None);
/// assert_eq!(outcome.reward(Player::Black), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    black: u32,
    white: u32,
}

impl GameOutcome {
    #[must_use]
    pub const fn new(black: u32, white: u32) -> Self {
        Self { black, white }
    }

    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self::new(
            board.piece_count(Player::Black),
            board.piece_count(Player::White),
        )
    }

    #[must_use]
    pub const fn black(&self) -> u32 {
        self.black
    }

    #[must_use]
    pub const fn white(&self) -> u32 {
        self.white
    }

    #[must_use]
    pub const fn count(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Piece differential from `player`'s perspective.
    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub const fn margin(&self, player: Player) -> i32 {
        self.count(player) as i32 - self.count(player.opponent()) as i32
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }

    /// Terminal reward for `player`: `1.0` win, `-1.0` loss, `0.0` draw.
    #[must_use]
    pub fn reward(&self, player: Player) -> f32 {
        match self.count(player).cmp(&self.count(player.opponent())) {
            Ordering::Greater => 1.0,
            Ordering::Less => -1.0,
            Ordering::Equal => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_follows_piece_differential() {
        let outcome = GameOutcome::new(40, 24);
        assert_eq!(outcome.winner(), Some(Player::Black));
        assert_eq!(outcome.margin(Player::Black), 16);
        assert_eq!(outcome.margin(Player::White), -16);
        assert_eq!(outcome.reward(Player::Black), 1.0);
        assert_eq!(outcome.reward(Player::White), -1.0);

        let draw = GameOutcome::new(32, 32);
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.reward(Player::Black), 0.0);
        assert_eq!(draw.reward(Player::White), 0.0);
    }
}
