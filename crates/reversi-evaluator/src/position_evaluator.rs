//! Position evaluation: scoring a single position for one player.
//!
//! This is the leaf of the evaluator architecture. Agents score candidate
//! positions through [`PositionEvaluator`]; the greedy agents call it on the
//! position after each legal move, the minimax search at its depth cutoff.
//!
//! Implementations:
//!
//! - [`LinearEvaluator`](crate::linear_evaluator::LinearEvaluator) - learned
//!   weights dotted with the [`FeatureVector`](crate::board_feature::FeatureVector)
//! - [`HeuristicEvaluator`](crate::heuristic_evaluator::HeuristicEvaluator) -
//!   fixed integer blend of piece, mobility, positional and frontier terms

use std::fmt;

use crate::board_analysis::BoardAnalysis;

/// Scores positions from the analysis player's perspective (higher is better).
pub trait PositionEvaluator: fmt::Debug + Send + Sync {
    #[must_use]
    fn evaluate_position(&self, analysis: &BoardAnalysis<'_>) -> f32;
}

impl<E> PositionEvaluator for &E
where
    E: PositionEvaluator + ?Sized,
{
    fn evaluate_position(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        (**self).evaluate_position(analysis)
    }
}

impl<E> PositionEvaluator for Box<E>
where
    E: PositionEvaluator + ?Sized,
{
    fn evaluate_position(&self, analysis: &BoardAnalysis<'_>) -> f32 {
        self.as_ref().evaluate_position(analysis)
    }
}
