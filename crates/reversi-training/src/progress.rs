//! Periodic training snapshots.

use reversi_evaluator::linear_evaluator::WeightVector;
use reversi_stats::{descriptive::DescriptiveStats, record::GameRecord};

/// Summary of the games played since the previous snapshot.
#[derive(Debug, Clone)]
pub struct TrainingProgress {
    /// Name of the current training stage.
    pub stage: String,
    /// 1-based epoch number, counted across all stages.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Learner results over the window.
    pub record: GameRecord,
    /// Summed absolute TD error per game over the window.
    pub td_error: Option<DescriptiveStats>,
    /// Disc margin of the learner per game over the window.
    pub margin: Option<DescriptiveStats>,
    pub weights: WeightVector,
}

impl TrainingProgress {
    pub(crate) fn log(&self) {
        tracing::info!(
            stage = %self.stage,
            epoch = self.epoch,
            total = self.total_epochs,
            wins = self.record.wins,
            losses = self.record.losses,
            draws = self.record.draws,
            win_rate = self.record.win_rate().unwrap_or(0.0),
            mean_td_error = self.td_error.as_ref().map_or(0.0, |s| s.mean),
            mean_margin = self.margin.as_ref().map_or(0.0, |s| s.mean),
            weights = ?self.weights.as_array(),
            "training progress"
        );
    }
}

/// Accumulates per-game results until the next snapshot.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProgressWindow {
    record: GameRecord,
    td_errors: Vec<f32>,
    margins: Vec<f32>,
}

impl ProgressWindow {
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn push(&mut self, reward: f32, td_error: f32, margin: i32) {
        self.record.push_reward(reward);
        self.td_errors.push(td_error);
        self.margins.push(margin as f32);
    }

    pub(crate) fn take_snapshot(
        &mut self,
        stage: &str,
        epoch: usize,
        total_epochs: usize,
        weights: WeightVector,
    ) -> TrainingProgress {
        let window = std::mem::take(self);
        TrainingProgress {
            stage: stage.to_owned(),
            epoch,
            total_epochs,
            record: window.record,
            td_error: DescriptiveStats::new(window.td_errors),
            margin: DescriptiveStats::new(window.margins),
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_resets_window() {
        let mut window = ProgressWindow::default();
        window.push(1.0, 0.5, 10);
        window.push(-1.0, 1.5, -4);
        window.push(0.0, 1.0, 0);

        let progress = window.take_snapshot("dumb", 3, 10, WeightVector::ZERO);
        assert_eq!(progress.record.games(), 3);
        assert_eq!(progress.record.wins, 1);
        assert_eq!(progress.td_error.unwrap().mean, 1.0);
        assert_eq!(progress.margin.unwrap().max, 10.0);

        let empty = window.take_snapshot("dumb", 4, 10, WeightVector::ZERO);
        assert_eq!(empty.record.games(), 0);
        assert!(empty.td_error.is_none());
    }
}
