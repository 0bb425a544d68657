use reversi_engine::{Board, Player, Square};

use crate::{
    agent::{self, Agent},
    heuristic_evaluator::HeuristicEvaluator,
    position_evaluator::PositionEvaluator,
};

/// One-ply agent: plays the move whose resulting position scores highest.
#[derive(Debug, Clone)]
pub struct GreedyAgent<E = HeuristicEvaluator> {
    name: String,
    evaluator: E,
}

impl<E> GreedyAgent<E>
where
    E: PositionEvaluator,
{
    pub fn new(name: impl Into<String>, evaluator: E) -> Self {
        Self {
            name: name.into(),
            evaluator,
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl GreedyAgent {
    /// Scores positions with the static table only.
    #[must_use]
    pub fn positional() -> Self {
        Self::new("positional", HeuristicEvaluator::positional())
    }

    /// Scores moves by the played square's table value plus own disc count.
    #[must_use]
    pub fn move_cell() -> Self {
        Self::new("move-cell", HeuristicEvaluator::move_cell())
    }

    /// Scores positions with the full disc/mobility/positional/frontier blend.
    #[must_use]
    pub fn blend() -> Self {
        Self::new("blend", HeuristicEvaluator::search())
    }
}

impl<E> Agent for GreedyAgent<E>
where
    E: PositionEvaluator,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        agent::select_best_move(&self.evaluator, board, player).map(|(square, _)| square)
    }
}

#[cfg(test)]
mod tests {
    use reversi_engine::Cell;

    use super::*;

    #[test]
    fn test_opening_move_is_legal() {
        let legal = Board::INITIAL.legal_moves(Player::Black);
        for mut agent in [GreedyAgent::positional(), GreedyAgent::move_cell(), GreedyAgent::blend()] {
            let choice = agent.choose_move(&Board::INITIAL, Player::Black).unwrap();
            assert!(legal.contains(&choice), "{} chose {choice}", agent.name());
        }
    }

    #[test]
    fn test_no_move_returns_none() {
        let mut board = Board::EMPTY;
        board.set_cell(Square::from_index(0), Cell::Black);
        let mut agent = GreedyAgent::positional();
        assert_eq!(agent.choose_move(&board, Player::White), None);
        assert_eq!(agent.choose_move(&board, Player::Black), None);
    }

    #[test]
    fn test_board_is_not_modified() {
        let board = Board::INITIAL;
        let mut agent = GreedyAgent::blend();
        let _ = agent.choose_move(&board, Player::Black);
        assert_eq!(board, Board::INITIAL);
    }
}
