//! Move selection: the one capability every strategy provides.
//!
//! An [`Agent`] picks a move for a side on a board, or `None` when the side
//! has no legal move. Fixed heuristics, random play, minimax search and the
//! learned evaluator all implement it, so a game loop or the trainer can mix
//! them freely.
//!
//! # One-ply selection
//!
//! [`select_best_move`] is the shared greedy step: every legal move is applied
//! to a private copy of the board, the resulting position is scored by a
//! [`PositionEvaluator`] from the mover's perspective, and the strictly
//! greatest score wins. Ties keep the first move in row-major order.
//!
//! # Usage
//!
//! ```
//! use reversi_evaluator::{agent, greedy_agent::GreedyAgent, random_agent::CornerFirstAgent};
//!
//! let mut black = GreedyAgent::positional();
//! let mut white = CornerFirstAgent::seeded(7);
//! let outcome = agent::play_game(&mut black, &mut white).unwrap();
//! assert!(outcome.black() + outcome.white() <= 64);
//! ```

use std::fmt;

use reversi_engine::{Board, GameOutcome, GameSession, Player, Square, TurnError};

use crate::{board_analysis::BoardAnalysis, position_evaluator::PositionEvaluator};

/// A move-choosing strategy.
pub trait Agent: fmt::Debug {
    /// Short display name.
    fn name(&self) -> &str;

    /// Chooses a move for `player`, or `None` when `player` has no legal move.
    ///
    /// The returned square is always one of `board.legal_moves(player)`.
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square>;
}

impl<A> Agent for Box<A>
where
    A: Agent + ?Sized,
{
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.as_mut().choose_move(board, player)
    }
}

impl<A> Agent for &mut A
where
    A: Agent + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        (**self).choose_move(board, player)
    }
}

/// Greedy one-ply selection.
///
/// Returns the best move together with its score, or `None` if `player` has
/// no legal move. `board` itself is never modified.
#[must_use]
pub fn select_best_move<E>(evaluator: &E, board: &Board, player: Player) -> Option<(Square, f32)>
where
    E: PositionEvaluator + ?Sized,
{
    let mut best: Option<(Square, f32)> = None;
    for (square, after) in board.successors(player) {
        let analysis = BoardAnalysis::new(&after, player).with_last_move(square);
        let score = evaluator.evaluate_position(&analysis);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((square, score));
        }
    }
    best
}

/// Plays a full game from the initial position.
///
/// A side with no legal move passes. The game ends when neither side can move.
///
/// # Errors
///
/// Returns [`TurnError`] if an agent answers with a square that is not a
/// legal move, or with `None` while it still has one.
pub fn play_game(black: &mut dyn Agent, white: &mut dyn Agent) -> Result<GameOutcome, TurnError> {
    play_session(GameSession::new(), black, white)
}

/// Plays `session` to the end. See [`play_game`].
///
/// # Errors
///
/// Returns [`TurnError`] if an agent answers with an illegal turn.
pub fn play_session(
    mut session: GameSession,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
) -> Result<GameOutcome, TurnError> {
    while !session.is_finished() {
        let player = session.to_move();
        if !session.board().has_legal_move(player) {
            session.pass();
            continue;
        }
        let choice = match player {
            Player::Black => black.choose_move(session.board(), player),
            Player::White => white.choose_move(session.board(), player),
        };
        session.play_turn(choice)?;
    }
    Ok(session.outcome())
}

#[cfg(test)]
mod tests {
    use reversi_engine::{Cell, IllegalMoveError, IllegalPassError};

    use super::*;
    use crate::{
        greedy_agent::GreedyAgent, heuristic_evaluator::HeuristicEvaluator,
        random_agent::RandomAgent,
    };

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[derive(Debug)]
    struct LastMove;

    impl Agent for LastMove {
        fn name(&self) -> &'static str {
            "last"
        }

        fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
            board.legal_moves(player).last().copied()
        }
    }

    #[derive(Debug)]
    struct Cheater;

    impl Agent for Cheater {
        fn name(&self) -> &'static str {
            "cheater"
        }

        fn choose_move(&mut self, _board: &Board, _player: Player) -> Option<Square> {
            Some(Square::from_index(0))
        }
    }

    #[derive(Debug)]
    struct Refuser;

    impl Agent for Refuser {
        fn name(&self) -> &'static str {
            "refuser"
        }

        fn choose_move(&mut self, _board: &Board, _player: Player) -> Option<Square> {
            None
        }
    }

    #[test]
    fn test_select_best_move_returns_none_without_moves() {
        let evaluator = HeuristicEvaluator::positional();
        assert_eq!(select_best_move(&evaluator, &Board::EMPTY, Player::Black), None);
    }

    #[test]
    fn test_select_best_move_prefers_corner() {
        // Black can take (0, 0) by flanking (1, 1), or play (3, 5).
        let mut board = Board::EMPTY;
        board.set_cell(sq(1, 1), Cell::White);
        board.set_cell(sq(2, 2), Cell::Black);
        board.set_cell(sq(3, 4), Cell::White);
        board.set_cell(sq(3, 3), Cell::Black);
        let before = board;

        let evaluator = HeuristicEvaluator::move_cell();
        let (best, score) = select_best_move(&evaluator, &board, Player::Black).unwrap();
        assert_eq!(best, sq(0, 0));
        assert_eq!(score, 4.0 + 100.0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_select_best_move_breaks_ties_by_order() {
        // All four opening moves are symmetric for the positional table.
        let evaluator = HeuristicEvaluator::positional();
        let (best, _) = select_best_move(&evaluator, &Board::INITIAL, Player::Black).unwrap();
        assert_eq!(best, Board::INITIAL.legal_moves(Player::Black)[0]);
    }

    #[test]
    fn test_play_game_ends_with_full_count() {
        let mut black = LastMove;
        let mut white = GreedyAgent::positional();
        let outcome = play_game(&mut black, &mut white).unwrap();
        assert!(outcome.black() + outcome.white() <= 64);
        assert!(outcome.black() + outcome.white() > 4);
    }

    #[test]
    fn test_play_game_rejects_illegal_move() {
        let mut black = Cheater;
        let mut white = RandomAgent::seeded(1);
        let err = play_game(&mut black, &mut white).unwrap_err();
        assert_eq!(
            err,
            TurnError::IllegalMove(IllegalMoveError {
                square: Square::from_index(0),
                player: Player::Black,
            })
        );
    }

    #[test]
    fn test_play_game_rejects_pass_with_legal_moves() {
        let mut black = RandomAgent::seeded(1);
        let mut white = Refuser;
        let err = play_game(&mut black, &mut white).unwrap_err();
        assert_eq!(
            err,
            TurnError::IllegalPass(IllegalPassError {
                player: Player::White
            })
        );
    }

    #[test]
    fn test_play_session_from_finished_position() {
        let mut board = Board::EMPTY;
        board.set_cell(sq(0, 0), Cell::Black);
        board.set_cell(sq(7, 7), Cell::Black);
        board.set_cell(sq(4, 4), Cell::White);
        let session = GameSession::from_board(board, Player::White);
        let outcome = play_session(session, &mut LastMove, &mut LastMove).unwrap();
        assert_eq!(outcome.winner(), Some(Player::Black));
        assert_eq!(outcome.reward(Player::Black), 1.0);
        assert_eq!(outcome.reward(Player::White), -1.0);
    }
}
