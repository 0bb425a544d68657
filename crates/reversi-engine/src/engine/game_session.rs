use crate::{
    Board, GameOutcome, IllegalMoveError, IllegalPassError, MoveList, Player, Square, TurnError,
};

/// A game in progress: board, side to move and turn counters.
///
/// Turns alternate strictly. A side with no legal move passes; the game is
/// finished only when both sides are without a legal move at the same time.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    move_count: usize,
    pass_count: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session at the initial position with Black to move.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_board(Board::INITIAL, Player::Black)
    }

    #[must_use]
    pub const fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            move_count: 0,
            pass_count: 0,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of discs placed so far.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    #[must_use]
    pub const fn pass_count(&self) -> usize {
        self.pass_count
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.to_move)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// Plays `square` for the side to move and hands the turn over.
    ///
    /// Returns the number of flipped discs. On error the session is unchanged.
    pub fn play(&mut self, square: Square) -> Result<u32, IllegalMoveError> {
        let flipped = self.board.apply_move(square, self.to_move)?;
        self.move_count += 1;
        self.to_move = self.to_move.opponent();
        Ok(flipped)
    }

    /// Hands the turn over without placing a disc.
    ///
    /// Unchecked; see [`GameSession::try_pass`].
    pub fn pass(&mut self) {
        self.pass_count += 1;
        self.to_move = self.to_move.opponent();
    }

    /// Passes, provided the side to move has no legal move.
    pub fn try_pass(&mut self) -> Result<(), IllegalPassError> {
        if self.board.has_legal_move(self.to_move) {
            return Err(IllegalPassError {
                player: self.to_move,
            });
        }
        self.pass();
        Ok(())
    }

    /// Plays `Some(square)` or passes on `None`.
    ///
    /// On error the session is unchanged.
    pub fn play_turn(&mut self, square: Option<Square>) -> Result<(), TurnError> {
        match square {
            Some(square) => {
                self.play(square)?;
            }
            None => self.try_pass()?,
        }
        Ok(())
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_board(&self.board)
    }
}
