//! Feature source types for extracting normalized values from positions.
//!
//! Each type implements [`BoardFeatureSource`] and fills one slot of the
//! [`FeatureVector`](super::FeatureVector). Values are roughly in `[-1, 1]`
//! and always expressed from the analysis player's perspective.

use std::fmt;

use reversi_engine::{Board, Square};

use crate::board_analysis::BoardAnalysis;

#[expect(clippy::cast_precision_loss)]
const CELL_COUNT: f32 = Board::CELL_COUNT as f32;

pub trait BoardFeatureSource: fmt::Debug + Send + Sync {
    #[must_use]
    fn id(&self) -> &str;
    #[must_use]
    fn name(&self) -> &str;
    #[must_use]
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32;
}

#[expect(clippy::cast_precision_loss)]
fn scaled(value: i32, scale: f32) -> f32 {
    value as f32 / scale
}

/// Disc-count differential.
///
/// `(own discs − opponent discs) / 64`
#[derive(Debug, Clone)]
pub struct PieceDifferential;

impl BoardFeatureSource for PieceDifferential {
    fn id(&self) -> &'static str {
        "piece_differential"
    }
    fn name(&self) -> &'static str {
        "Piece Differential"
    }
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        scaled(analysis.piece_differential(), CELL_COUNT)
    }
}

/// Legal-move-count differential.
///
/// `(own legal moves − opponent legal moves) / 64`
#[derive(Debug, Clone)]
pub struct MobilityDifferential;

impl BoardFeatureSource for MobilityDifferential {
    fn id(&self) -> &'static str {
        "mobility_differential"
    }
    fn name(&self) -> &'static str {
        "Mobility Differential"
    }
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        scaled(analysis.mobility_differential(), CELL_COUNT)
    }
}

/// Corner ownership.
///
/// `(own corners − opponent corners) / 4`
#[derive(Debug, Clone)]
pub struct CornerControl;

impl BoardFeatureSource for CornerControl {
    fn id(&self) -> &'static str {
        "corner_control"
    }
    fn name(&self) -> &'static str {
        "Corner Control"
    }
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        scaled(analysis.corner_differential(), 4.0)
    }
}

/// Frontier-disc differential, oriented so that fewer own frontier discs is positive.
///
/// A frontier disc is an own disc with at least one empty neighbour; it can
/// still be flipped from that side.
///
/// `(opponent frontier − own frontier) / 64`
#[derive(Debug, Clone)]
pub struct FrontierDifferential;

impl BoardFeatureSource for FrontierDifferential {
    fn id(&self) -> &'static str {
        "frontier_differential"
    }
    fn name(&self) -> &'static str {
        "Frontier Differential"
    }
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        scaled(-analysis.frontier_differential(), CELL_COUNT)
    }
}

/// Occupancy indicator of a single near-corner square.
///
/// `+1` own disc, `-1` opponent disc, `0` empty.
#[derive(Debug, Clone)]
pub struct Occupancy {
    id: &'static str,
    name: &'static str,
    square: Square,
}

impl Occupancy {
    /// The square diagonally inward from the top-left corner.
    pub const ROW1_COL1: Self = Self {
        id: "occupancy_1_1",
        name: "Occupancy (1, 1)",
        square: Square::from_index(9),
    };
    pub const ROW1_COL2: Self = Self {
        id: "occupancy_1_2",
        name: "Occupancy (1, 2)",
        square: Square::from_index(10),
    };

    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }
}

impl BoardFeatureSource for Occupancy {
    fn id(&self) -> &str {
        self.id
    }
    fn name(&self) -> &str {
        self.name
    }
    fn extract(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        scaled(analysis.occupancy(self.square), 1.0)
    }
}

/// Unused slot, always `0.0`.
#[derive(Debug, Clone)]
pub struct Reserved {
    id: &'static str,
}

impl Reserved {
    pub const SLOT6: Self = Self { id: "reserved_6" };
    pub const SLOT7: Self = Self { id: "reserved_7" };
    pub const SLOT8: Self = Self { id: "reserved_8" };
    pub const SLOT9: Self = Self { id: "reserved_9" };
}

impl BoardFeatureSource for Reserved {
    fn id(&self) -> &str {
        self.id
    }
    fn name(&self) -> &'static str {
        "Reserved"
    }
    fn extract(&self, _analysis: &BoardAnalysis<'_>) -> f32 {
        0.0
    }
}
