use arrayvec::ArrayVec;

use crate::{Cell, IllegalMoveError, Player, Square};

/// Legal moves of one side, in row-major order.
///
/// At most 60 cells can ever be empty, so the list never spills to the heap.
pub type MoveList = ArrayVec<Square, { Board::CELL_COUNT }>;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 8×8 Reversi board.
///
/// `Board` is a plain `Copy` value. Callers that want to look at a hypothetical
/// move take a copy (see [`Board::after_move`]) so the position under
/// evaluation is never mutated.
///
/// # Layout
///
/// Cells are stored row-major; `(row, col)` maps to index `row * 8 + col`.
/// The initial position has White on `(3, 3)` and `(4, 4)`, Black on `(3, 4)`
/// and `(4, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; Board::CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Board {
    pub const SIZE: usize = Square::SIZE;
    pub const CELL_COUNT: usize = Self::SIZE * Self::SIZE;

    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; Self::CELL_COUNT],
    };

    pub const INITIAL: Self = {
        let mut cells = [Cell::Empty; Self::CELL_COUNT];
        cells[3 * Self::SIZE + 3] = Cell::White;
        cells[3 * Self::SIZE + 4] = Cell::Black;
        cells[4 * Self::SIZE + 3] = Cell::Black;
        cells[4 * Self::SIZE + 4] = Cell::White;
        Self { cells }
    };

    /// Resets the board to the canonical four-disc opening.
    pub fn initialize(&mut self) {
        *self = Self::INITIAL;
    }

    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(|sq| (sq, self.cell(sq)))
    }

    #[must_use]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.count_cells(player.cell())
    }

    #[must_use]
    pub fn empty_count(&self) -> u32 {
        self.count_cells(Cell::Empty)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn count_cells(&self, cell: Cell) -> u32 {
        self.cells.iter().filter(|c| **c == cell).count() as u32
    }

    /// Number of opposing discs that a disc placed on `square` would flip in
    /// direction `(dr, dc)`.
    ///
    /// Only counts a run that is closed by one of `player`'s own discs.
    fn bracketed_run(&self, square: Square, player: Player, (dr, dc): (isize, isize)) -> usize {
        let own = player.cell();
        let opp = player.opponent().cell();
        let mut run = 0;
        let mut cursor = square.offset(dr, dc);
        while let Some(sq) = cursor {
            match self.cell(sq) {
                c if c == opp => run += 1,
                c if c == own => return run,
                _ => return 0,
            }
            cursor = sq.offset(dr, dc);
        }
        0
    }

    /// Returns whether `player` may place a disc on `square`.
    ///
    /// The cell must be empty and the disc must bracket at least one opposing
    /// run in some direction.
    #[must_use]
    pub fn is_legal_move(&self, square: Square, player: Player) -> bool {
        self.cell(square).is_empty()
            && DIRECTIONS
                .iter()
                .any(|dir| self.bracketed_run(square, player, *dir) > 0)
    }

    #[must_use]
    pub fn legal_moves(&self, player: Player) -> MoveList {
        Square::all()
            .filter(|sq| self.is_legal_move(*sq, player))
            .collect()
    }

    #[must_use]
    pub fn has_legal_move(&self, player: Player) -> bool {
        Square::all().any(|sq| self.is_legal_move(sq, player))
    }

    /// Returns `true` when neither side has a legal move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Player::ALL.iter().all(|p| !self.has_legal_move(*p))
    }

    /// Places a disc for `player` on `square` and flips every bracketed run.
    ///
    /// Returns the number of flipped discs. The board is left untouched when
    /// the move is illegal.
    pub fn apply_move(&mut self, square: Square, player: Player) -> Result<u32, IllegalMoveError> {
        if !self.cell(square).is_empty() {
            return Err(IllegalMoveError { square, player });
        }

        let mut flipped = 0;
        for (dr, dc) in DIRECTIONS {
            let run = self.bracketed_run(square, player, (dr, dc));
            let mut cursor = square;
            for _ in 0..run {
                // bracketed_run guarantees `run` on-board steps
                let Some(next) = cursor.offset(dr, dc) else {
                    break;
                };
                self.set_cell(next, player.cell());
                cursor = next;
                flipped += 1;
            }
        }

        if flipped == 0 {
            return Err(IllegalMoveError { square, player });
        }
        self.set_cell(square, player.cell());
        Ok(flipped)
    }

    /// Returns a copy of the board with the move applied.
    pub fn after_move(&self, square: Square, player: Player) -> Result<Self, IllegalMoveError> {
        let mut board = *self;
        board.apply_move(square, player)?;
        Ok(board)
    }

    /// Iterates over `player`'s legal moves, each paired with the resulting board.
    ///
    /// Moves come in the same row-major order as [`Board::legal_moves`]; every
    /// yielded board is an independent copy.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Square, Board)> + '_ {
        Square::all().filter_map(move |sq| self.after_move(sq, player).ok().map(|b| (sq, b)))
    }

    /// Returns whether any of the 8 neighbours of `square` is empty.
    #[must_use]
    pub fn touches_empty(&self, square: Square) -> bool {
        DIRECTIONS.iter().any(|(dr, dc)| {
            square
                .offset(*dr, *dc)
                .is_some_and(|n| self.cell(n).is_empty())
        })
    }

    /// Number of `player`'s frontier discs: own discs adjacent to an empty cell.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn frontier_count(&self, player: Player) -> u32 {
        self.cells()
            .filter(|(sq, cell)| cell.is_owned_by(player) && self.touches_empty(*sq))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_board() {
        let board = Board::INITIAL;
        assert_eq!(board.piece_count(Player::Black), 2);
        assert_eq!(board.piece_count(Player::White), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.cell(sq(3, 3)), Cell::White);
        assert_eq!(board.cell(sq(3, 4)), Cell::Black);

        let mut cleared = Board::EMPTY;
        cleared.initialize();
        assert_eq!(cleared, Board::INITIAL);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::INITIAL;
        let black = board.legal_moves(Player::Black);
        assert_eq!(
            black.as_slice(),
            &[sq(2, 3), sq(3, 2), sq(4, 5), sq(5, 4)]
        );
        let white = board.legal_moves(Player::White);
        assert_eq!(
            white.as_slice(),
            &[sq(2, 4), sq(3, 5), sq(4, 2), sq(5, 3)]
        );
    }

    #[test]
    fn test_apply_move_flips_bracketed_disc() {
        let mut board = Board::INITIAL;
        let flipped = board.apply_move(sq(2, 3), Player::Black).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.cell(sq(2, 3)), Cell::Black);
        assert_eq!(board.cell(sq(3, 3)), Cell::Black);
        assert_eq!(board.piece_count(Player::Black), 4);
        assert_eq!(board.piece_count(Player::White), 1);
    }

    #[test]
    fn test_apply_move_flips_in_several_directions() {
        // White ring around (3, 3) closed by black discs two steps away.
        let mut board = Board::EMPTY;
        let center = sq(3, 3);
        for (dr, dc) in DIRECTIONS {
            let near = center.offset(dr, dc).unwrap();
            let far = near.offset(dr, dc).unwrap();
            board.set_cell(near, Cell::White);
            board.set_cell(far, Cell::Black);
        }
        let flipped = board.apply_move(center, Player::Black).unwrap();
        assert_eq!(flipped, 8);
        assert_eq!(board.piece_count(Player::White), 0);
        assert_eq!(board.piece_count(Player::Black), 17);
    }

    #[test]
    fn test_apply_move_rejects_illegal_moves() {
        let mut board = Board::INITIAL;
        // occupied
        assert_eq!(
            board.apply_move(sq(3, 3), Player::Black),
            Err(IllegalMoveError {
                square: sq(3, 3),
                player: Player::Black
            })
        );
        // empty but flips nothing
        assert!(board.apply_move(sq(0, 0), Player::Black).is_err());
        assert_eq!(board, Board::INITIAL);
    }

    #[test]
    fn test_after_move_leaves_original_untouched() {
        let board = Board::INITIAL;
        let copy = board.after_move(sq(2, 3), Player::Black).unwrap();
        assert_eq!(board, Board::INITIAL);
        assert_ne!(copy, board);
    }

    #[test]
    fn test_successors_match_legal_moves() {
        let mut board = Board::INITIAL;
        board.apply_move(sq(2, 3), Player::Black).unwrap();
        for player in Player::ALL {
            let moves: Vec<_> = board.successors(player).map(|(sq, _)| sq).collect();
            assert_eq!(moves.as_slice(), board.legal_moves(player).as_slice());
            for (sq, next) in board.successors(player) {
                assert_eq!(next.cell(sq), player.cell());
                assert_eq!(next.empty_count(), board.empty_count() - 1);
            }
        }
    }

    #[test]
    fn test_unclosed_run_is_not_legal() {
        let mut board = Board::EMPTY;
        board.set_cell(sq(0, 1), Cell::White);
        board.set_cell(sq(0, 2), Cell::White);
        assert!(!board.is_legal_move(sq(0, 0), Player::Black));
        board.set_cell(sq(0, 3), Cell::Black);
        assert!(board.is_legal_move(sq(0, 0), Player::Black));
    }

    #[test]
    fn test_frontier_count() {
        let board = Board::INITIAL;
        // every opening disc touches an empty cell
        assert_eq!(board.frontier_count(Player::Black), 2);
        assert_eq!(board.frontier_count(Player::White), 2);

        let mut full = Board::EMPTY;
        for sq in Square::all() {
            full.set_cell(sq, Cell::Black);
        }
        assert_eq!(full.frontier_count(Player::Black), 0);
        assert!(full.is_game_over());
    }

    #[test]
    fn test_game_over_when_only_one_color_remains() {
        let mut board = Board::EMPTY;
        board.set_cell(sq(0, 0), Cell::Black);
        board.set_cell(sq(7, 7), Cell::Black);
        assert!(!board.has_legal_move(Player::Black));
        assert!(!board.has_legal_move(Player::White));
        assert!(board.is_game_over());
        assert!(!Board::INITIAL.is_game_over());
    }
}
