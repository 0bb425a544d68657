use crate::SquareOutOfRangeError;

/// Zero-based `(row, col)` coordinate of a board cell.
///
/// A `Square` is always on the board: construction from raw coordinates goes
/// through [`Square::new`], which rejects anything outside `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const SIZE: usize = 8;

    /// The four corner squares in row-major order.
    pub const CORNERS: [Self; 4] = [
        Self::from_index(0),
        Self::from_index(7),
        Self::from_index(56),
        Self::from_index(63),
    ];

    #[expect(clippy::cast_possible_truncation)]
    pub fn new(row: usize, col: usize) -> Result<Self, SquareOutOfRangeError> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return Err(SquareOutOfRangeError { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Builds a square from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 64`.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::SIZE * Self::SIZE);
        Self {
            row: (index / Self::SIZE) as u8,
            col: (index % Self::SIZE) as u8,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::SIZE * Self::SIZE).map(Self::from_index)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * Self::SIZE + self.col()
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Returns the neighbouring square in direction `(dr, dc)`, or `None` off the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Self::new(row, col).ok()
    }
}
