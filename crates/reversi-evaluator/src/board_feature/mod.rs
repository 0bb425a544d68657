//! Board features for the linear evaluator.
//!
//! A position is summarized as a fixed-length [`FeatureVector`] relative to a
//! perspective player. Every slot is produced by one [`BoardFeatureSource`]:
//!
//! | idx | source | value |
//! |-----|--------|-------|
//! | 0 | [`source::PieceDifferential`] | (own − opp discs) / 64 |
//! | 1 | [`source::MobilityDifferential`] | (own − opp legal moves) / 64 |
//! | 2 | [`source::CornerControl`] | (own − opp corners) / 4 |
//! | 3 | [`source::FrontierDifferential`] | (opp − own frontier discs) / 64 |
//! | 4 | [`source::Occupancy`] (1, 1) | +1 own, −1 opp, 0 empty |
//! | 5 | [`source::Occupancy`] (1, 2) | +1 own, −1 opp, 0 empty |
//! | 6–9 | [`source::Reserved`] | always 0 |
//!
//! Reserved slots keep the vector length stable so weight vectors stay
//! compatible when features are added later.
//!
//! # Example
//!
//! ```
//! use reversi_engine::{Board, Player};
//! use reversi_evaluator::board_feature;
//!
//! let features = board_feature::extract_features(&Board::INITIAL, Player::Black);
//! assert_eq!(features[0], 0.0);
//! assert_eq!(features.as_array()[6..], [0.0; 4]);
//! ```

use std::ops::Index;

use reversi_engine::{Board, Player};

use crate::board_analysis::BoardAnalysis;

pub use self::source::BoardFeatureSource;

pub mod source;

/// Length of every feature and weight vector.
pub const FEATURE_COUNT: usize = 10;

/// Feature sources in slot order.
pub static ALL_BOARD_FEATURES: [&dyn BoardFeatureSource; FEATURE_COUNT] = [
    &source::PieceDifferential,
    &source::MobilityDifferential,
    &source::CornerControl,
    &source::FrontierDifferential,
    &source::Occupancy::ROW1_COL1,
    &source::Occupancy::ROW1_COL2,
    &source::Reserved::SLOT6,
    &source::Reserved::SLOT7,
    &source::Reserved::SLOT8,
    &source::Reserved::SLOT9,
];

/// Immutable snapshot of a position's features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub const ZERO: Self = Self([0.0; FEATURE_COUNT]);

    #[must_use]
    pub const fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn from_analysis(analysis: &BoardAnalysis<'_>) -> Self {
        Self(ALL_BOARD_FEATURES.map(|f| f.extract(analysis)))
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for FeatureVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

/// Extracts the feature vector of `board` from `player`'s perspective.
#[must_use]
pub fn extract_features(board: &Board, player: Player) -> FeatureVector {
    FeatureVector::from_analysis(&BoardAnalysis::new(board, player))
}
