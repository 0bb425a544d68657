use reversi_engine::{Board, Player, Square};

/// Static 8×8 table of positional values.
///
/// Corners are worth the most, the squares next to them are penalized because
/// they hand the corner to the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionWeightTable {
    values: [[i32; Board::SIZE]; Board::SIZE],
}

impl PositionWeightTable {
    pub const CLASSIC: Self = Self::new([
        [100, -20, 10, 5, 5, 10, -20, 100],
        [-20, -50, -2, -2, -2, -2, -50, -20],
        [10, -2, 2, 2, 2, 2, -2, 10],
        [5, -2, 2, 0, 0, 2, -2, 5],
        [5, -2, 2, 0, 0, 2, -2, 5],
        [10, -2, 2, 2, 2, 2, -2, 10],
        [-20, -50, -2, -2, -2, -2, -50, -20],
        [100, -20, 10, 5, 5, 10, -20, 100],
    ]);

    #[must_use]
    pub const fn new(values: [[i32; Board::SIZE]; Board::SIZE]) -> Self {
        Self { values }
    }

    #[must_use]
    pub const fn value(&self, square: Square) -> i32 {
        self.values[square.row()][square.col()]
    }

    /// `Σ table[own cells] − Σ table[opponent cells]`.
    #[must_use]
    pub fn positional_score(&self, board: &Board, player: Player) -> i32 {
        board
            .cells()
            .map(|(sq, cell)| match cell.owner() {
                Some(owner) if owner == player => self.value(sq),
                Some(_) => -self.value(sq),
                None => 0,
            })
            .sum()
    }
}
