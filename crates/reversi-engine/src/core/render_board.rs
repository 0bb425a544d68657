use std::fmt;

use crate::{Board, Cell};

impl Cell {
    /// Single-character glyph used when rendering a board as text.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..Board::SIZE {
            write!(f, " {col}")?;
        }
        for (sq, cell) in self.cells() {
            if sq.col() == 0 {
                write!(f, "\n{}", sq.row())?;
            }
            write!(f, " {}", cell.glyph())?;
        }
        Ok(())
    }
}
