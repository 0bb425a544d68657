//! Depth-limited minimax search with optional alpha-beta pruning.
//!
//! The root enumerates the mover's legal moves and searches each child with a
//! full `(-∞, +∞)` window, the opponent to move and `depth − 1` plies left.
//! Inside the tree:
//!
//! - at depth 0 the position is scored from the root player's perspective;
//! - if the side to move has no legal move the position is scored right away.
//!   Passes are not searched, so a forced pass ends the line early;
//! - otherwise children are expanded with the role flipped. The maximizer
//!   raises `alpha`, the minimizer lowers `beta`, and remaining siblings are
//!   skipped once `beta ≤ alpha`.
//!
//! Bounds are passed by value and every child is searched on its own board
//! copy, so a search never touches the caller's board.
//!
//! Pruning only changes how many nodes are visited. With pruning disabled the
//! search is plain minimax and reports the same move and value.

use reversi_engine::{Board, Player, Square};

use crate::{
    agent::Agent, board_analysis::BoardAnalysis, heuristic_evaluator::HeuristicEvaluator,
    position_evaluator::PositionEvaluator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Maximizer => Self::Minimizer,
            Self::Minimizer => Self::Maximizer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` when the root player has no legal move.
    pub best_move: Option<Square>,
    pub value: f32,
    /// Positions visited, root children included.
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct MinimaxAgent<E = HeuristicEvaluator> {
    depth: usize,
    evaluator: E,
    pruning: bool,
}

impl MinimaxAgent {
    /// Searches with the [`HeuristicEvaluator::search`] blend at the leaves.
    #[must_use]
    pub fn with_depth(depth: usize) -> Self {
        Self::new(depth, HeuristicEvaluator::search())
    }
}

impl<E> MinimaxAgent<E>
where
    E: PositionEvaluator,
{
    /// Alpha-beta search of `depth` plies. A depth of 0 is treated as 1.
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self {
            depth: depth.max(1),
            evaluator,
            pruning: true,
        }
    }

    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `board` for `player`.
    ///
    /// Root ties keep the first move in row-major order. Without a legal move
    /// the result carries the static value of `board`.
    #[must_use]
    pub fn search(&self, board: &Board, player: Player) -> SearchResult {
        let mut nodes = 0;
        let mut best: Option<(Square, f32)> = None;

        for (square, child) in board.successors(player) {
            let value = self.minimax(
                &child,
                player,
                player.opponent(),
                self.depth - 1,
                Role::Minimizer,
                f32::NEG_INFINITY,
                f32::INFINITY,
                &mut nodes,
            );
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((square, value));
            }
        }

        match best {
            Some((square, value)) => SearchResult {
                best_move: Some(square),
                value,
                nodes,
            },
            None => SearchResult {
                best_move: None,
                value: self.evaluate(board, player),
                nodes,
            },
        }
    }

    fn evaluate(&self, board: &Board, root: Player) -> f32 {
        self.evaluator
            .evaluate_position(&BoardAnalysis::new(board, root))
    }

    #[expect(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        root: Player,
        to_move: Player,
        depth: usize,
        role: Role,
        mut alpha: f32,
        mut beta: f32,
        nodes: &mut u64,
    ) -> f32 {
        *nodes += 1;
        if depth == 0 || !board.has_legal_move(to_move) {
            return self.evaluate(board, root);
        }

        let mut best = match role {
            Role::Maximizer => f32::NEG_INFINITY,
            Role::Minimizer => f32::INFINITY,
        };
        for (_, child) in board.successors(to_move) {
            let value = self.minimax(
                &child,
                root,
                to_move.opponent(),
                depth - 1,
                role.flip(),
                alpha,
                beta,
                nodes,
            );
            match role {
                Role::Maximizer => {
                    best = best.max(value);
                    alpha = alpha.max(best);
                }
                Role::Minimizer => {
                    best = best.min(value);
                    beta = beta.min(best);
                }
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }
}

impl<E> Agent for MinimaxAgent<E>
where
    E: PositionEvaluator,
{
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.search(board, player).best_move
    }
}

#[cfg(test)]
mod tests {
    use reversi_engine::{Cell, GameSession};

    use super::*;
    use crate::random_agent::RandomAgent;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    /// Midgame positions reached by seeded random play.
    fn sample_positions() -> Vec<(Board, Player)> {
        let mut positions = vec![(Board::INITIAL, Player::Black)];
        for seed in 0..4 {
            let mut agent = RandomAgent::seeded(seed);
            let mut session = GameSession::new();
            for _ in 0..(10 + seed * 5) {
                if session.is_finished() {
                    break;
                }
                let player = session.to_move();
                let choice = agent.choose_move(session.board(), player);
                session.play_turn(choice).unwrap();
            }
            if session.legal_moves().is_empty() && !session.is_finished() {
                session.pass();
            }
            positions.push((*session.board(), session.to_move()));
        }
        positions
    }

    #[test]
    fn test_single_legal_move_is_returned() {
        let mut board = Board::EMPTY;
        board.set_cell(sq(0, 0), Cell::Black);
        board.set_cell(sq(0, 1), Cell::White);
        assert_eq!(board.legal_moves(Player::Black).as_slice(), [sq(0, 2)]);

        let mut agent = MinimaxAgent::with_depth(1);
        assert_eq!(agent.choose_move(&board, Player::Black), Some(sq(0, 2)));
    }

    #[test]
    fn test_no_legal_move() {
        let agent = MinimaxAgent::with_depth(3);
        let result = agent.search(&Board::EMPTY, Player::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        for depth in 1..=4 {
            let pruned = MinimaxAgent::with_depth(depth);
            let full = MinimaxAgent::with_depth(depth).without_pruning();
            for (board, player) in sample_positions() {
                let a = pruned.search(&board, player);
                let b = full.search(&board, player);
                assert_eq!(a.best_move, b.best_move, "depth {depth}\n{board}");
                assert_eq!(a.value, b.value, "depth {depth}\n{board}");
                assert!(a.nodes <= b.nodes);
            }
        }
    }

    #[test]
    fn test_pruning_skips_nodes() {
        let pruned = MinimaxAgent::with_depth(4).search(&Board::INITIAL, Player::Black);
        let full = MinimaxAgent::with_depth(4)
            .without_pruning()
            .search(&Board::INITIAL, Player::Black);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn test_search_does_not_modify_board() {
        let (board, player) = sample_positions()[1];
        let copy = board;
        let mut agent = MinimaxAgent::with_depth(3);
        let choice = agent.choose_move(&board, player).unwrap();
        assert_eq!(board, copy);
        assert!(board.is_legal_move(choice, player));

        let after = board.after_move(choice, player).unwrap();
        assert_ne!(after, board);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        assert_eq!(MinimaxAgent::with_depth(0).depth(), 1);
    }
}
