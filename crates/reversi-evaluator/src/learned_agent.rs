use reversi_engine::{Board, Player, Square};

use crate::{
    agent::{self, Agent},
    board_feature::FeatureVector,
    linear_evaluator::{LinearEvaluator, WeightVector},
};

/// Greedy agent driven by trained linear weights.
///
/// Exploration is not part of the agent; the trainer decides when to play a
/// random move and otherwise asks [`LearnedAgent::best_move`].
#[derive(Debug, Clone, Default)]
pub struct LearnedAgent {
    evaluator: LinearEvaluator,
}

impl LearnedAgent {
    #[must_use]
    pub const fn new(weights: WeightVector) -> Self {
        Self {
            evaluator: LinearEvaluator::new(weights),
        }
    }

    #[must_use]
    pub const fn evaluator(&self) -> &LinearEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub const fn weights(&self) -> &WeightVector {
        self.evaluator.weights()
    }

    pub fn set_weights(&mut self, weights: WeightVector) {
        self.evaluator.set_weights(weights);
    }

    #[must_use]
    pub fn extract_features(&self, board: &Board, player: Player) -> FeatureVector {
        self.evaluator.extract_features(board, player)
    }

    #[must_use]
    pub fn estimate_value(&self, features: &FeatureVector) -> f32 {
        self.evaluator.estimate(features)
    }

    /// The legal move whose resulting position has the highest estimate.
    #[must_use]
    pub fn best_move(&self, board: &Board, player: Player) -> Option<Square> {
        agent::select_best_move(&self.evaluator, board, player).map(|(square, _)| square)
    }
}

impl Agent for LearnedAgent {
    fn name(&self) -> &'static str {
        "learned"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.best_move(board, player)
    }
}
