use std::io::{self, Write as _};

use anyhow::Context;
use reversi_engine::Player;
use reversi_evaluator::{agent, linear_evaluator::WeightVector};
use reversi_stats::{descriptive::DescriptiveStats, record::GameRecord};

use crate::util::{self, AgentKind, AgentOptions};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Agent playing Black (moves first)
    #[arg(long, value_enum)]
    black: AgentKind,
    /// Agent playing White
    #[arg(long, value_enum)]
    white: AgentKind,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Search depth of minimax agents
    #[arg(long, default_value_t = 3)]
    depth: usize,
    /// Seed of randomized agents
    #[arg(long)]
    seed: Option<u64>,
    /// Weights of the learned agent, one per feature (defaults to the hand-tuned set)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    weights: Option<Vec<f32>>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        black,
        white,
        games,
        depth,
        seed,
        weights,
    } = arg;

    let weights = match weights {
        Some(values) => util::parse_weights(values)?,
        None => WeightVector::HAND_TUNED,
    };
    let options = |offset: u64| AgentOptions {
        depth: *depth,
        seed: seed.map(|s| s.wrapping_add(offset)),
        weights,
    };
    let mut black_agent = black.build(&options(0));
    let mut white_agent = white.build(&options(1));

    let mut record = GameRecord::default();
    let mut margins = Vec::with_capacity(*games);
    for game in 0..*games {
        let outcome = agent::play_game(black_agent.as_mut(), white_agent.as_mut())
            .with_context(|| format!("Game #{game} aborted"))?;
        tracing::debug!(
            game,
            black = outcome.black(),
            white = outcome.white(),
            "game finished"
        );
        record.push_reward(outcome.reward(Player::Black));
        #[expect(clippy::cast_precision_loss)]
        let margin = outcome.margin(Player::Black) as f32;
        margins.push(margin);
    }

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "{} (Black) vs {} (White): {} games",
        black_agent.name(),
        white_agent.name(),
        record.games()
    )?;
    writeln!(stdout, "  Black wins: {}", record.wins)?;
    writeln!(stdout, "  White wins: {}", record.losses)?;
    writeln!(stdout, "  Draws:      {}", record.draws)?;
    if let Some(stats) = DescriptiveStats::new(margins) {
        writeln!(stdout, "  Black disc margin:")?;
        writeln!(stdout, "    Min:  {:.1}", stats.min)?;
        writeln!(stdout, "    Max:  {:.1}", stats.max)?;
        writeln!(stdout, "    Mean: {:.2}", stats.mean)?;
        writeln!(stdout, "    Std:  {:.2}", stats.std_dev)?;
    }
    stdout.flush()?;

    Ok(())
}
