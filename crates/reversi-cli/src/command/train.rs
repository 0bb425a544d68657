use std::{
    io::{self, Write as _},
    iter,
    path::PathBuf,
};

use anyhow::Context;
use reversi_evaluator::board_feature::ALL_BOARD_FEATURES;
use reversi_training::{
    config::TrainerConfig,
    td_trainer::{TdTrainer, TrainingStage},
};

use crate::util::{self, AgentKind, AgentOptions};

/// Games per curriculum stage.
const EPOCHS_PER_STAGE: usize = 10_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Trainer configuration file (JSON). Flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Games per stage
    #[arg(long, default_value_t = EPOCHS_PER_STAGE)]
    epochs: usize,
    /// Opponents of the curriculum stages, in order
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "corner,move-cell,blend"
    )]
    stages: Vec<AgentKind>,
    /// Seed of the trainer and of randomized opponents
    #[arg(long)]
    seed: Option<u64>,
    /// Exploration probability
    #[arg(long)]
    epsilon: Option<f64>,
    /// TD(0) step size
    #[arg(long)]
    learning_rate: Option<f32>,
    /// Search depth of minimax opponents
    #[arg(long, default_value_t = 3)]
    depth: usize,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        config,
        epochs,
        stages,
        seed,
        epsilon,
        learning_rate,
        depth,
    } = arg;

    let mut trainer_config = match config {
        Some(path) => util::read_json_file::<TrainerConfig, _>("trainer config", path)?,
        None => TrainerConfig::default(),
    };
    if let Some(seed) = seed {
        trainer_config.seed = Some(*seed);
    }
    if let Some(epsilon) = epsilon {
        trainer_config.epsilon = *epsilon;
    }
    if let Some(learning_rate) = learning_rate {
        trainer_config.learning_rate = *learning_rate;
    }

    let mut trainer = TdTrainer::new(trainer_config).context("Invalid trainer configuration")?;

    let options = AgentOptions {
        depth: *depth,
        seed: trainer.config().seed,
        weights: *trainer.weights(),
    };
    let mut stages = stages
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let options = AgentOptions {
                seed: options.seed.map(|s| s.wrapping_add(i as u64 + 1)),
                ..options
            };
            TrainingStage::new(
                format!("stage {} ({kind:?})", i + 1),
                *epochs,
                kind.build(&options),
            )
        })
        .collect::<Vec<_>>();

    tracing::info!(
        stages = stages.len(),
        epochs_per_stage = epochs,
        learner = %trainer.config().learner,
        "starting TD training"
    );
    let weights = trainer.run_curriculum(&mut stages);

    let mut stdout = io::stdout().lock();
    for (feature, weight) in iter::zip(&ALL_BOARD_FEATURES, weights.iter()) {
        writeln!(stdout, "{}\t{weight:.6}", feature.id()).context("Failed to write weights")?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
