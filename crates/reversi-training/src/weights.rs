//! Weight vector operations used by the TD trainer.
//!
//! - **Initialization**: [`random`] draws every weight uniformly from `[-range, range]`
//! - **Update**: [`td_update`] moves the weights along the feature vector by the TD error

use rand::Rng;
use rand_distr::Uniform;
use reversi_evaluator::{
    board_feature::{FEATURE_COUNT, FeatureVector},
    linear_evaluator::WeightVector,
};

/// Generates a random weight vector with every component in `[-range, range]`.
///
/// A zero (or invalid) range yields [`WeightVector::ZERO`].
pub fn random<R>(rng: &mut R, range: f32) -> WeightVector
where
    R: Rng + ?Sized,
{
    let Ok(dist) = Uniform::new_inclusive(-range, range) else {
        return WeightVector::ZERO;
    };
    let mut values = [0.0; FEATURE_COUNT];
    for v in &mut values {
        *v = rng.sample(dist);
    }
    WeightVector::new(values)
}

/// One TD(0) step: `w[j] += learning_rate · error · feature[j]`.
///
/// A zero error leaves the weights untouched.
pub fn td_update(
    weights: &mut WeightVector,
    features: &FeatureVector,
    error: f32,
    learning_rate: f32,
) {
    if error == 0.0 {
        return;
    }
    weights.add_scaled(features, learning_rate * error);
}
