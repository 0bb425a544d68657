//! Lazily evaluated board metrics from one player's perspective.
//!
//! [`BoardAnalysis`] wraps a board, a perspective player and optionally the
//! square that was just played. Metrics that need a full board scan (legal
//! moves, frontier discs) are computed on first use and cached, so features
//! and heuristic terms can share them without recomputation.
//!
//! ```
//! use reversi_engine::{Board, Player};
//! use reversi_evaluator::board_analysis::BoardAnalysis;
//!
//! let board = Board::INITIAL;
//! let analysis = BoardAnalysis::new(&board, Player::Black);
//! assert_eq!(analysis.piece_differential(), 0);
//! assert_eq!(analysis.own_mobility(), 4);
//! ```

use std::cell::OnceCell;

use reversi_engine::{Board, MoveList, Player, Square};

#[derive(Debug)]
pub struct BoardAnalysis<'a> {
    board: &'a Board,
    player: Player,
    last_move: Option<Square>,
    own_moves: OnceCell<MoveList>,
    opp_moves: OnceCell<MoveList>,
    own_frontier: OnceCell<u32>,
    opp_frontier: OnceCell<u32>,
}

impl<'a> BoardAnalysis<'a> {
    #[must_use]
    pub fn new(board: &'a Board, player: Player) -> Self {
        Self {
            board,
            player,
            last_move: None,
            own_moves: OnceCell::new(),
            opp_moves: OnceCell::new(),
            own_frontier: OnceCell::new(),
            opp_frontier: OnceCell::new(),
        }
    }

    /// Records the square whose placement produced this board.
    #[must_use]
    pub fn with_last_move(mut self, square: Square) -> Self {
        self.last_move = Some(square);
        self
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn opponent(&self) -> Player {
        self.player.opponent()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    #[must_use]
    pub fn own_pieces(&self) -> u32 {
        self.board.piece_count(self.player)
    }

    #[must_use]
    pub fn opp_pieces(&self) -> u32 {
        self.board.piece_count(self.opponent())
    }

    #[must_use]
    pub fn own_moves(&self) -> &MoveList {
        self.own_moves
            .get_or_init(|| self.board.legal_moves(self.player))
    }

    #[must_use]
    pub fn opp_moves(&self) -> &MoveList {
        self.opp_moves
            .get_or_init(|| self.board.legal_moves(self.opponent()))
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn own_mobility(&self) -> u32 {
        self.own_moves().len() as u32
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn opp_mobility(&self) -> u32 {
        self.opp_moves().len() as u32
    }

    #[must_use]
    pub fn own_frontier(&self) -> u32 {
        *self
            .own_frontier
            .get_or_init(|| self.board.frontier_count(self.player))
    }

    #[must_use]
    pub fn opp_frontier(&self) -> u32 {
        *self
            .opp_frontier
            .get_or_init(|| self.board.frontier_count(self.opponent()))
    }

    /// Own minus opponent disc count.
    #[must_use]
    pub fn piece_differential(&self) -> i32 {
        signed_diff(self.own_pieces(), self.opp_pieces())
    }

    /// Own minus opponent legal-move count.
    #[must_use]
    pub fn mobility_differential(&self) -> i32 {
        signed_diff(self.own_mobility(), self.opp_mobility())
    }

    /// Own minus opponent frontier discs (positive means more exposed).
    #[must_use]
    pub fn frontier_differential(&self) -> i32 {
        signed_diff(self.own_frontier(), self.opp_frontier())
    }

    /// Own minus opponent corner discs, in `-4..=4`.
    #[must_use]
    pub fn corner_differential(&self) -> i32 {
        Square::CORNERS.iter().map(|sq| self.occupancy(*sq)).sum()
    }

    /// `+1` if `square` holds an own disc, `-1` for an opponent disc, `0` if empty.
    #[must_use]
    pub fn occupancy(&self, square: Square) -> i32 {
        match self.board.cell(square).owner() {
            Some(owner) if owner == self.player => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

#[expect(clippy::cast_possible_wrap)]
fn signed_diff(own: u32, opp: u32) -> i32 {
    own as i32 - opp as i32
}

#[cfg(test)]
mod tests {
    use reversi_engine::Cell;

    use super::*;

    #[test]
    fn test_metrics_are_relative_to_player() {
        let mut board = Board::INITIAL;
        board
            .apply_move(Square::new(2, 3).unwrap(), Player::Black)
            .unwrap();

        let black = BoardAnalysis::new(&board, Player::Black);
        let white = BoardAnalysis::new(&board, Player::White);
        assert_eq!(black.piece_differential(), 3);
        assert_eq!(white.piece_differential(), -3);
        assert_eq!(
            black.mobility_differential(),
            -white.mobility_differential()
        );
        assert_eq!(
            black.frontier_differential(),
            -white.frontier_differential()
        );
    }

    #[test]
    fn test_corner_and_occupancy() {
        let mut board = Board::EMPTY;
        board.set_cell(Square::CORNERS[0], Cell::Black);
        board.set_cell(Square::CORNERS[1], Cell::Black);
        board.set_cell(Square::CORNERS[2], Cell::White);

        let analysis = BoardAnalysis::new(&board, Player::Black);
        assert_eq!(analysis.corner_differential(), 1);
        assert_eq!(analysis.occupancy(Square::CORNERS[0]), 1);
        assert_eq!(analysis.occupancy(Square::CORNERS[2]), -1);
        assert_eq!(analysis.occupancy(Square::CORNERS[3]), 0);
    }
}
