use reversi_evaluator::board_feature::FeatureVector;

/// Feature vectors of the positions the learner faced, in play order.
///
/// Each entry is recorded before the learner chooses its move.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    states: Vec<FeatureVector>,
}

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, features: FeatureVector) {
        self.states.push(features);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[FeatureVector] {
        &self.states
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl FromIterator<FeatureVector> for Trajectory {
    fn from_iter<T: IntoIterator<Item = FeatureVector>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
