//! TD(0) self-play trainer for the linear evaluator.
//!
//! # Per-game protocol
//!
//! 1. Start from the initial position with an empty [`Trajectory`].
//! 2. Alternate turns. A side without a legal move is skipped; the game ends
//!    when neither side can move.
//! 3. On the learner's turn, record the [`FeatureVector`] of the current
//!    position first, then pick a move epsilon-greedily: with probability `ε`
//!    a uniformly random legal move, otherwise the move whose resulting
//!    position the current weights value most.
//! 4. On the opponent's turn, ask the opponent [`Agent`].
//! 5. Score the final position: `+1` learner ahead, `-1` behind, `0` tie.
//!
//! # Backward update
//!
//! The trajectory is walked from the last recorded state to the first with a
//! running target that starts at the terminal reward:
//!
//! ```text
//! estimate = V(s)
//! error    = target − estimate
//! w[j]    += α · error · s[j]
//! target   = estimate
//! ```
//!
//! `V` always uses the weights as updated so far. After the walk the learner's
//! evaluator receives the new weights, so the next game already plays with them.

use rand::{Rng, SeedableRng as _, seq::IndexedRandom};
use reversi_engine::{Board, GameOutcome, GameSession, Player, Square, TurnError};
use reversi_evaluator::{
    agent::Agent,
    board_feature::FeatureVector,
    learned_agent::LearnedAgent,
    linear_evaluator::{self, WeightVector},
    random_agent::AgentRng,
};

use crate::{
    config::{ConfigError, TrainerConfig},
    progress::{ProgressWindow, TrainingProgress},
    trajectory::Trajectory,
    weights,
};

/// One stage of a curriculum: a fixed opponent for a fixed number of games.
#[derive(Debug)]
pub struct TrainingStage {
    pub name: String,
    pub epochs: usize,
    pub opponent: Box<dyn Agent>,
}

impl TrainingStage {
    pub fn new(name: impl Into<String>, epochs: usize, opponent: Box<dyn Agent>) -> Self {
        Self {
            name: name.into(),
            epochs,
            opponent,
        }
    }
}

/// Result of a single training game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// Terminal reward from the learner's perspective.
    pub reward: f32,
    /// Number of positions recorded for the learner.
    pub recorded_states: usize,
    /// Sum of `|error|` over the backward update.
    pub td_error: f32,
    /// Learner moves chosen at random.
    pub explored_moves: usize,
}

/// How the learner chose a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Explore(Square),
    Exploit(Square),
}

impl MoveChoice {
    #[must_use]
    pub fn square(self) -> Square {
        match self {
            Self::Explore(square) | Self::Exploit(square) => square,
        }
    }

    #[must_use]
    pub fn is_exploration(self) -> bool {
        matches!(self, Self::Explore(_))
    }
}

#[derive(Debug)]
pub struct TdTrainer<R = AgentRng> {
    config: TrainerConfig,
    weights: WeightVector,
    learner: LearnedAgent,
    rng: R,
    epochs_played: usize,
}

impl TdTrainer {
    /// Creates a trainer from a validated configuration.
    ///
    /// The random source is seeded from `config.seed` when present.
    pub fn new(config: TrainerConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => AgentRng::seed_from_u64(seed),
            None => AgentRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R> TdTrainer<R>
where
    R: Rng,
{
    pub fn with_rng(config: TrainerConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let weights = config
            .initial_weights
            .unwrap_or_else(|| weights::random(&mut rng, config.initial_weight_range));
        Ok(Self {
            config,
            weights,
            learner: LearnedAgent::new(weights),
            rng,
            epochs_played: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    #[must_use]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    #[must_use]
    pub fn learner(&self) -> &LearnedAgent {
        &self.learner
    }

    /// Games played so far across all stages.
    #[must_use]
    pub fn epochs_played(&self) -> usize {
        self.epochs_played
    }

    /// Replaces the weights and refreshes the learner.
    pub fn set_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
        self.learner.set_weights(weights);
    }

    /// Trains against a single opponent for `total_epochs` games.
    pub fn run(&mut self, total_epochs: usize, opponent: &mut dyn Agent) -> WeightVector {
        self.run_with(total_epochs, opponent, |_| {})
    }

    /// Like [`TdTrainer::run`], handing every progress snapshot to `observer`.
    ///
    /// Epochs continue the numbering of earlier runs.
    pub fn run_with<F>(
        &mut self,
        total_epochs: usize,
        opponent: &mut dyn Agent,
        mut observer: F,
    ) -> WeightVector
    where
        F: FnMut(&TrainingProgress),
    {
        let name = opponent.name().to_owned();
        let run_total = self.epochs_played + total_epochs;
        self.run_stage(&name, total_epochs, run_total, opponent, &mut observer);
        self.weights
    }

    /// Trains through `stages` in order. Epochs are numbered across stages.
    pub fn run_curriculum(&mut self, stages: &mut [TrainingStage]) -> WeightVector {
        self.run_curriculum_with(stages, |_| {})
    }

    /// Like [`TdTrainer::run_curriculum`], handing every progress snapshot to `observer`.
    pub fn run_curriculum_with<F>(
        &mut self,
        stages: &mut [TrainingStage],
        mut observer: F,
    ) -> WeightVector
    where
        F: FnMut(&TrainingProgress),
    {
        let total_epochs = self.epochs_played + stages.iter().map(|s| s.epochs).sum::<usize>();
        for stage in stages {
            tracing::info!(
                stage = %stage.name,
                epochs = stage.epochs,
                opponent = stage.opponent.name(),
                "starting training stage"
            );
            self.run_stage(
                &stage.name,
                stage.epochs,
                total_epochs,
                stage.opponent.as_mut(),
                &mut observer,
            );
        }
        tracing::info!(
            epochs = self.epochs_played,
            weights = ?self.weights.as_array(),
            "training finished"
        );
        self.weights
    }

    fn run_stage(
        &mut self,
        name: &str,
        epochs: usize,
        total_epochs: usize,
        opponent: &mut dyn Agent,
        observer: &mut dyn FnMut(&TrainingProgress),
    ) {
        let mut window = ProgressWindow::default();
        let mut pending = false;
        for _ in 0..epochs {
            let report = match self.play_game(opponent) {
                Ok(report) => report,
                Err(err) => {
                    tracing::warn!(
                        stage = name,
                        error = %err,
                        "opponent played an illegal turn, game discarded"
                    );
                    continue;
                }
            };
            self.epochs_played += 1;
            window.push(
                report.reward,
                report.td_error,
                report.outcome.margin(self.config.learner),
            );
            pending = true;
            tracing::debug!(
                epoch = self.epochs_played,
                reward = report.reward,
                states = report.recorded_states,
                explored = report.explored_moves,
                td_error = report.td_error,
                "game finished"
            );

            if self.epochs_played % self.config.log_interval == 0 {
                self.report_progress(&mut window, name, total_epochs, observer);
                pending = false;
            }
        }
        // Flush the tail of the stage, even when its last games were discarded.
        if pending {
            self.report_progress(&mut window, name, total_epochs, observer);
        }
    }

    fn report_progress(
        &self,
        window: &mut ProgressWindow,
        name: &str,
        total_epochs: usize,
        observer: &mut dyn FnMut(&TrainingProgress),
    ) {
        let progress = window.take_snapshot(name, self.epochs_played, total_epochs, self.weights);
        progress.log();
        observer(&progress);
    }

    /// Plays one training game against `opponent` and applies the backward update.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError`] if the opponent answers with an illegal square
    /// or passes while it has a legal move. The weights are left untouched in
    /// that case.
    pub fn play_game(&mut self, opponent: &mut dyn Agent) -> Result<GameReport, TurnError> {
        let learner = self.config.learner;
        let mut trajectory = Trajectory::new();

        let mut session = GameSession::new();
        let mut explored_moves = 0;
        while !session.is_finished() {
            let player = session.to_move();
            if !session.board().has_legal_move(player) {
                session.pass();
                continue;
            }
            let choice = if player == learner {
                trajectory.push(self.learner.extract_features(session.board(), learner));
                let choice = self.epsilon_greedy_move(session.board(), learner);
                if choice.is_some_and(MoveChoice::is_exploration) {
                    explored_moves += 1;
                }
                choice.map(MoveChoice::square)
            } else {
                opponent.choose_move(session.board(), player)
            };
            session.play_turn(choice)?;
        }

        let outcome = session.outcome();
        let reward = outcome.reward(learner);
        let td_error = self.backward_update(&trajectory, reward);
        let recorded_states = trajectory.len();

        Ok(GameReport {
            outcome,
            reward,
            recorded_states,
            td_error,
            explored_moves,
        })
    }

    /// Epsilon-greedy move for `player`, or `None` without a legal move.
    pub fn epsilon_greedy_move(&mut self, board: &Board, player: Player) -> Option<MoveChoice> {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        if self.rng.random_bool(self.config.epsilon) {
            return moves.choose(&mut self.rng).copied().map(MoveChoice::Explore);
        }
        self.learner.best_move(board, player).map(MoveChoice::Exploit)
    }

    /// Backward TD(0) walk over `trajectory` ending in `reward`.
    ///
    /// Returns the summed absolute TD error. An empty trajectory leaves the
    /// weights unchanged.
    pub fn backward_update(&mut self, trajectory: &Trajectory, reward: f32) -> f32 {
        if trajectory.is_empty() {
            return 0.0;
        }
        let mut target = reward;
        let mut total_error = 0.0;
        for features in trajectory.states().iter().rev() {
            let estimate = linear_evaluator::estimate_value(features, &self.weights);
            let error = target - estimate;
            weights::td_update(&mut self.weights, features, error, self.config.learning_rate);
            total_error += error.abs();
            target = estimate;
        }
        self.learner.set_weights(self.weights);
        total_error
    }

    /// Current value estimate of `features`.
    #[must_use]
    pub fn estimate(&self, features: &FeatureVector) -> f32 {
        linear_evaluator::estimate_value(features, &self.weights)
    }
}
