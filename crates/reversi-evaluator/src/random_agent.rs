//! Randomized agents.
//!
//! Each agent owns its random source, so two agents never share a stream and
//! a seeded agent always replays the same game against a deterministic
//! opponent.

use rand::{Rng, SeedableRng, seq::IndexedRandom};
use rand_pcg::Pcg64Mcg;
use reversi_engine::{Board, Player, Square};

use crate::agent::Agent;

/// Random source used by agents and the trainer.
pub type AgentRng = Pcg64Mcg;

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent<R = AgentRng> {
    rng: R,
}

impl RandomAgent {
    /// Seeds from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(AgentRng::from_rng(&mut rand::rng()))
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(AgentRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RandomAgent<R>
where
    R: Rng,
{
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Agent for RandomAgent<R>
where
    R: Rng + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        board.legal_moves(player).choose(&mut self.rng).copied()
    }
}

/// Takes a corner whenever one is legal, otherwise plays randomly.
///
/// Corners are tried in the order (0, 0), (0, 7), (7, 0), (7, 7).
#[derive(Debug, Clone)]
pub struct CornerFirstAgent<R = AgentRng> {
    rng: R,
}

impl CornerFirstAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(AgentRng::from_rng(&mut rand::rng()))
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(AgentRng::seed_from_u64(seed))
    }
}

impl Default for CornerFirstAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CornerFirstAgent<R>
where
    R: Rng,
{
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Agent for CornerFirstAgent<R>
where
    R: Rng + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        "corner"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        let moves = board.legal_moves(player);
        if let Some(corner) = Square::CORNERS.into_iter().find(|c| moves.contains(c)) {
            return Some(corner);
        }
        moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use reversi_engine::Cell;

    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_random_agent_covers_all_moves() {
        let legal = Board::INITIAL.legal_moves(Player::Black);
        let mut agent = RandomAgent::seeded(42);
        let seen: HashSet<_> = (0..200)
            .map(|_| agent.choose_move(&Board::INITIAL, Player::Black).unwrap())
            .collect();
        assert_eq!(seen.len(), legal.len());
        assert!(seen.iter().all(|m| legal.contains(m)));
    }

    #[test]
    fn test_seeded_agents_repeat() {
        let mut a = RandomAgent::seeded(3);
        let mut b = RandomAgent::seeded(3);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&Board::INITIAL, Player::White),
                b.choose_move(&Board::INITIAL, Player::White)
            );
        }
    }

    #[test]
    fn test_corner_first_takes_corner() {
        // Black can take (7, 7) through (6, 6), or play (3, 5).
        let mut board = Board::EMPTY;
        board.set_cell(sq(6, 6), Cell::White);
        board.set_cell(sq(5, 5), Cell::Black);
        board.set_cell(sq(3, 4), Cell::White);
        board.set_cell(sq(3, 3), Cell::Black);

        let mut agent = CornerFirstAgent::seeded(0);
        for _ in 0..10 {
            assert_eq!(agent.choose_move(&board, Player::Black), Some(sq(7, 7)));
        }
    }

    #[test]
    fn test_corner_first_falls_back_to_random() {
        let legal = Board::INITIAL.legal_moves(Player::Black);
        let mut agent = CornerFirstAgent::seeded(9);
        let choice = agent.choose_move(&Board::INITIAL, Player::Black).unwrap();
        assert!(legal.contains(&choice));
    }

    #[test]
    fn test_no_move_returns_none() {
        let mut random = RandomAgent::seeded(0);
        let mut corner = CornerFirstAgent::seeded(0);
        assert_eq!(random.choose_move(&Board::EMPTY, Player::Black), None);
        assert_eq!(corner.choose_move(&Board::EMPTY, Player::Black), None);
    }
}
