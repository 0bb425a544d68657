pub use self::{board::*, cell::*, square::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod render_board;
pub(crate) mod square;
