//! Hand-written position heuristics expressed as weighted integer terms.
//!
//! Every fixed-strategy agent shares this one evaluator and differs only by
//! its [`HeuristicWeights`] preset:
//!
//! | preset | terms |
//! |--------|-------|
//! | [`HeuristicWeights::POSITIONAL`] | positional table score |
//! | [`HeuristicWeights::MOVE_CELL`] | own disc count + table value of the played square |
//! | [`HeuristicWeights::SEARCH`] | 10·discs + 5·mobility + 80·positional − 50·frontier |

use reversi_engine::{Board, Player};
use serde::{Deserialize, Serialize};

use crate::{
    board_analysis::BoardAnalysis, position_evaluator::PositionEvaluator,
    position_table::PositionWeightTable,
};

/// Coefficients of the heuristic terms.
///
/// Differential terms are `own − opponent`. A zero coefficient skips the
/// term entirely, so presets never pay for metrics they do not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub own_pieces: i32,
    pub piece_differential: i32,
    pub mobility: i32,
    pub positional: i32,
    pub frontier: i32,
    pub played_cell: i32,
}

impl HeuristicWeights {
    pub const POSITIONAL: Self = Self {
        own_pieces: 0,
        piece_differential: 0,
        mobility: 0,
        positional: 1,
        frontier: 0,
        played_cell: 0,
    };

    pub const MOVE_CELL: Self = Self {
        own_pieces: 1,
        piece_differential: 0,
        mobility: 0,
        positional: 0,
        frontier: 0,
        played_cell: 1,
    };

    pub const SEARCH: Self = Self {
        own_pieces: 0,
        piece_differential: 10,
        mobility: 5,
        positional: 80,
        frontier: -50,
        played_cell: 0,
    };
}

#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    table: &'static PositionWeightTable,
    weights: HeuristicWeights,
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self::search()
    }
}

impl HeuristicEvaluator {
    #[must_use]
    pub const fn new(table: &'static PositionWeightTable, weights: HeuristicWeights) -> Self {
        Self { table, weights }
    }

    /// Static-table evaluator.
    #[must_use]
    pub const fn positional() -> Self {
        Self::new(&PositionWeightTable::CLASSIC, HeuristicWeights::POSITIONAL)
    }

    /// Played-square value plus own disc count.
    #[must_use]
    pub const fn move_cell() -> Self {
        Self::new(&PositionWeightTable::CLASSIC, HeuristicWeights::MOVE_CELL)
    }

    /// Blend used at minimax leaves.
    #[must_use]
    pub const fn search() -> Self {
        Self::new(&PositionWeightTable::CLASSIC, HeuristicWeights::SEARCH)
    }

    #[must_use]
    pub const fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    #[must_use]
    pub const fn table(&self) -> &PositionWeightTable {
        self.table
    }

    /// Integer score of the analysed position.
    #[must_use]
    pub fn score(&self, analysis: &BoardAnalysis<'_>) -> i32 {
        let w = &self.weights;
        let mut score = 0;
        if w.own_pieces != 0 {
            score += w.own_pieces * count(analysis.own_pieces());
        }
        if w.piece_differential != 0 {
            score += w.piece_differential * analysis.piece_differential();
        }
        if w.mobility != 0 {
            score += w.mobility * analysis.mobility_differential();
        }
        if w.positional != 0 {
            score += w.positional * self.positional_score(analysis);
        }
        if w.frontier != 0 {
            score += w.frontier * analysis.frontier_differential();
        }
        if w.played_cell != 0
            && let Some(square) = analysis.last_move()
        {
            score += w.played_cell * self.table.value(square);
        }
        score
    }

    fn positional_score(&self, analysis: &BoardAnalysis<'_>) -> i32 {
        self.table
            .positional_score(analysis.board(), analysis.player())
    }

    /// Convenience wrapper scoring `board` for `player` without a played square.
    #[must_use]
    pub fn score_board(&self, board: &Board, player: Player) -> i32 {
        self.score(&BoardAnalysis::new(board, player))
    }
}

#[expect(clippy::cast_possible_wrap)]
fn count(n: u32) -> i32 {
    n as i32
}

impl PositionEvaluator for HeuristicEvaluator {
    #[expect(clippy::cast_precision_loss)]
    fn evaluate_position(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        self.score(analysis) as f32
    }
}
