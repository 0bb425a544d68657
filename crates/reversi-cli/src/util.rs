use std::{fs::File, io, path::Path};

use anyhow::Context;
use reversi_evaluator::{
    agent::Agent,
    greedy_agent::GreedyAgent,
    learned_agent::LearnedAgent,
    linear_evaluator::WeightVector,
    random_agent::{CornerFirstAgent, RandomAgent},
    search::MinimaxAgent,
};

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Agents selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    /// Uniformly random legal move
    Random,
    /// A corner when one is legal, otherwise random
    Corner,
    /// Greedy on the static position table
    Positional,
    /// Greedy on played-square value plus own disc count
    MoveCell,
    /// Greedy on the disc/mobility/positional/frontier blend
    Blend,
    /// Alpha-beta search with the blend at the leaves
    Minimax,
    /// Greedy on learned linear weights
    Learned,
}

/// Options shared by every agent built for one run.
#[derive(Debug, Clone, Copy)]
pub struct AgentOptions {
    pub depth: usize,
    pub seed: Option<u64>,
    pub weights: WeightVector,
}

impl AgentKind {
    pub fn build(self, options: &AgentOptions) -> Box<dyn Agent> {
        match self {
            Self::Random => Box::new(match options.seed {
                Some(seed) => RandomAgent::seeded(seed),
                None => RandomAgent::new(),
            }),
            Self::Corner => Box::new(match options.seed {
                Some(seed) => CornerFirstAgent::seeded(seed),
                None => CornerFirstAgent::new(),
            }),
            Self::Positional => Box::new(GreedyAgent::positional()),
            Self::MoveCell => Box::new(GreedyAgent::move_cell()),
            Self::Blend => Box::new(GreedyAgent::blend()),
            Self::Minimax => Box::new(MinimaxAgent::with_depth(options.depth)),
            Self::Learned => Box::new(LearnedAgent::new(options.weights)),
        }
    }
}

/// Builds a weight vector from a `--weights` list such as `0.5,1.5,4,-2,0.1,0.1,0,0,0,0`.
pub fn parse_weights(values: &[f32]) -> anyhow::Result<WeightVector> {
    WeightVector::try_from(values).context("Invalid --weights")
}
