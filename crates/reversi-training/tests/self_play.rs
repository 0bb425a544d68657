//! End-to-end self-play training runs.

use reversi_engine::Player;
use reversi_evaluator::{
    greedy_agent::GreedyAgent,
    random_agent::{CornerFirstAgent, RandomAgent},
};
use reversi_training::{
    config::TrainerConfig,
    td_trainer::{TdTrainer, TrainingStage},
};

fn seeded_config(seed: u64) -> TrainerConfig {
    TrainerConfig {
        seed: Some(seed),
        log_interval: 10,
        ..TrainerConfig::default()
    }
}

fn curriculum(epochs: usize) -> Vec<TrainingStage> {
    vec![
        TrainingStage::new("corner", epochs, Box::new(CornerFirstAgent::seeded(11))),
        TrainingStage::new("move-cell", epochs, Box::new(GreedyAgent::move_cell())),
        TrainingStage::new("blend", epochs, Box::new(GreedyAgent::blend())),
    ]
}

#[test]
fn test_seeded_training_is_deterministic() {
    let mut a = TdTrainer::new(seeded_config(2024)).unwrap();
    let mut b = TdTrainer::new(seeded_config(2024)).unwrap();
    assert_eq!(a.weights(), b.weights());

    let wa = a.run_curriculum(&mut curriculum(15));
    let wb = b.run_curriculum(&mut curriculum(15));
    assert_eq!(wa, wb);
    assert_eq!(a.epochs_played(), 45);
}

#[test]
fn test_different_seeds_diverge() {
    let a = TdTrainer::new(seeded_config(1)).unwrap();
    let b = TdTrainer::new(seeded_config(2)).unwrap();
    assert_ne!(a.weights(), b.weights());
}

#[test]
fn test_training_changes_weights_and_refreshes_learner() {
    let mut trainer = TdTrainer::new(seeded_config(5)).unwrap();
    let initial = *trainer.weights();
    let trained = trainer.run(30, &mut RandomAgent::seeded(6));
    assert_ne!(trained, initial);
    assert_eq!(trainer.learner().weights(), &trained);
    assert!(trained.iter().all(f32::is_finite));
}

#[test]
fn test_every_game_ends_with_matching_reward() {
    let mut trainer = TdTrainer::new(seeded_config(9)).unwrap();
    let mut opponent = CornerFirstAgent::seeded(10);
    for _ in 0..20 {
        let report = trainer.play_game(&mut opponent).unwrap();
        let expected = match report.outcome.winner() {
            Some(Player::Black) => 1.0,
            Some(Player::White) => -1.0,
            None => 0.0,
        };
        assert_eq!(report.reward, expected);
        let own = report.outcome.count(Player::Black);
        let opp = report.outcome.count(Player::White);
        assert_eq!(report.reward > 0.0, own > opp);
        assert_eq!(report.reward < 0.0, own < opp);
    }
}

#[test]
fn test_progress_snapshots_cover_all_games() {
    let mut trainer = TdTrainer::new(seeded_config(3)).unwrap();
    let mut games = 0;
    let mut last_epoch = 0;
    trainer.run_curriculum_with(&mut curriculum(12), |progress| {
        games += progress.record.games();
        assert!(progress.epoch > last_epoch);
        last_epoch = progress.epoch;
        assert_eq!(progress.total_epochs, 36);
    });
    assert_eq!(games, 36);
    assert_eq!(last_epoch, 36);
}
