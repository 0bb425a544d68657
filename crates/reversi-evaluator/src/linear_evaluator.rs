//! Linear value function over board features.
//!
//! The learned evaluator estimates the value of a position as the dot product
//! of its [`FeatureVector`] with a [`WeightVector`]:
//!
//! ```text
//! V(s) = w₀·f₀(s) + w₁·f₁(s) + ... + w₉·f₉(s)
//! ```
//!
//! Both vectors have the fixed length [`FEATURE_COUNT`]. A weight vector built
//! from a slice of any other length is rejected with [`WeightLengthError`], so
//! a mismatch can never reach [`estimate_value`].
//!
//! # Example
//!
//! ```
//! use reversi_engine::{Board, Player};
//! use reversi_evaluator::linear_evaluator::{LinearEvaluator, WeightVector};
//!
//! let evaluator = LinearEvaluator::new(WeightVector::HAND_TUNED);
//! let features = evaluator.extract_features(&Board::INITIAL, Player::Black);
//! assert_eq!(evaluator.estimate(&features), 0.0);
//!
//! assert!(WeightVector::try_from(&[1.0, 2.0][..]).is_err());
//! ```

use std::iter;

use reversi_engine::{Board, Player};
use serde::{Deserialize, Serialize};

use crate::{
    board_analysis::BoardAnalysis,
    board_feature::{self, FEATURE_COUNT, FeatureVector},
    position_evaluator::PositionEvaluator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("weight vector must have {expected} components, got {actual}")]
pub struct WeightLengthError {
    pub expected: usize,
    pub actual: usize,
}

/// Weights of the linear evaluator, one per feature slot.
///
/// Serializes as a plain JSON array; deserializing checks the length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct WeightVector([f32; FEATURE_COUNT]);

impl WeightVector {
    pub const ZERO: Self = Self([0.0; FEATURE_COUNT]);

    /// Hand-picked starting point, before any training.
    pub const HAND_TUNED: Self = Self([0.5, 1.5, 4.0, -2.0, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0]);

    #[must_use]
    pub const fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }

    /// `w[j] += step · feature[j]` for every component.
    pub fn add_scaled(&mut self, features: &FeatureVector, step: f32) {
        for (w, f) in iter::zip(&mut self.0, features.iter()) {
            *w += step * f;
        }
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::HAND_TUNED
    }
}

impl TryFrom<&[f32]> for WeightVector {
    type Error = WeightLengthError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let values = values.try_into().map_err(|_| WeightLengthError {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self(values))
    }
}

impl TryFrom<Vec<f32>> for WeightVector {
    type Error = WeightLengthError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<WeightVector> for Vec<f32> {
    fn from(weights: WeightVector) -> Self {
        weights.0.to_vec()
    }
}

/// Dot product of a feature vector with a weight vector.
#[must_use]
pub fn estimate_value(features: &FeatureVector, weights: &WeightVector) -> f32 {
    iter::zip(features.iter(), weights.iter())
        .map(|(f, w)| f * w)
        .sum()
}

/// Learned position evaluator.
///
/// Holds its own copy of the weights; the trainer pushes new weights in with
/// [`LinearEvaluator::set_weights`] after every game.
#[derive(Debug, Clone, Default)]
pub struct LinearEvaluator {
    weights: WeightVector,
}

impl LinearEvaluator {
    #[must_use]
    pub const fn new(weights: WeightVector) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
    }

    #[must_use]
    pub fn extract_features(&self, board: &Board, player: Player) -> FeatureVector {
        board_feature::extract_features(board, player)
    }

    #[must_use]
    pub fn estimate(&self, features: &FeatureVector) -> f32 {
        estimate_value(features, &self.weights)
    }
}

impl PositionEvaluator for LinearEvaluator {
    fn evaluate_position(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        self.estimate(&FeatureVector::from_analysis(analysis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_is_dot_product() {
        let mut features = [0.0; FEATURE_COUNT];
        features[0] = 0.5;
        features[2] = -1.0;
        let mut weights = [0.0; FEATURE_COUNT];
        weights[0] = 2.0;
        weights[1] = 100.0;
        weights[2] = 3.0;
        let value = estimate_value(&FeatureVector::new(features), &WeightVector::new(weights));
        assert!((value - (1.0 - 3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let short = vec![0.1; FEATURE_COUNT - 1];
        assert_eq!(
            WeightVector::try_from(short),
            Err(WeightLengthError {
                expected: FEATURE_COUNT,
                actual: FEATURE_COUNT - 1,
            })
        );
        assert!(WeightVector::try_from(vec![0.1; FEATURE_COUNT + 1]).is_err());
        assert!(WeightVector::try_from(vec![0.1; FEATURE_COUNT]).is_ok());
    }

    #[test]
    fn test_json_length_is_checked() {
        let json = serde_json::to_string(&WeightVector::HAND_TUNED).unwrap();
        let parsed: WeightVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, WeightVector::HAND_TUNED);

        let err = serde_json::from_str::<WeightVector>("[1.0, 2.0]").unwrap_err();
        assert!(err.to_string().contains("must have 10 components"));
    }

    #[test]
    fn test_add_scaled() {
        let mut weights = WeightVector::ZERO;
        let features = FeatureVector::new([1.0, -1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        weights.add_scaled(&features, 0.1);
        assert_eq!(weights.as_array()[..3], [0.1, -0.1, 0.05]);
        assert_eq!(weights.as_array()[3..], [0.0; 7]);
    }

    #[test]
    fn test_set_weights_changes_estimate() {
        let mut evaluator = LinearEvaluator::new(WeightVector::ZERO);
        let board = Board::INITIAL
            .after_move(reversi_engine::Square::new(2, 3).unwrap(), Player::Black)
            .unwrap();
        let features = evaluator.extract_features(&board, Player::Black);
        assert_eq!(evaluator.estimate(&features), 0.0);

        let mut weights = [0.0; FEATURE_COUNT];
        weights[0] = 64.0;
        evaluator.set_weights(WeightVector::new(weights));
        assert!((evaluator.estimate(&features) - 3.0).abs() < 1e-6);
    }
}
