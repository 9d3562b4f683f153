//! Self-play training for MENACE
//!
//! Player 1 draws moves from its matchboxes, player 2 is a baseline
//! opponent, and every finished game is fed back through the
//! reinforcement engine before the next one starts.

use serde::{Deserialize, Serialize};

use crate::{
    config::TrainingConfig,
    game::Game,
    policy::{MatchboxPolicy, Policy},
    ports::Observer,
    reinforcement::ReinforcementEngine,
    state_space::StateSpace,
    types::{MoveList, Outcome, Player},
};

/// A finished game as seen by the trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: MoveList,
    pub outcome: Outcome,
}

/// Results from training
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResults {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Player-1 win rate sampled every 100 games
    pub win_rate_history: Vec<f64>,
}

impl TrainingResults {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::PlayerOneWin => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::PlayerTwoWin => self.losses += 1,
        }
        if self.games.is_multiple_of(100) {
            self.win_rate_history.push(self.win_rate());
        }
    }

    pub fn win_rate(&self) -> f64 {
        rate(self.wins, self.games)
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.games)
    }

    pub fn loss_rate(&self) -> f64 {
        rate(self.losses, self.games)
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// A training session owning the learned table for its lifetime.
pub struct TrainingSession {
    space: StateSpace,
    engine: ReinforcementEngine,
    learner: MatchboxPolicy,
    opponent: Box<dyn Policy>,
    config: TrainingConfig,
    results: TrainingResults,
}

impl TrainingSession {
    /// Create a session over a freshly enumerated table.
    pub fn new(config: TrainingConfig) -> crate::Result<Self> {
        Self::with_space(config, StateSpace::new())
    }

    /// Create a session that continues training an existing table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for invalid
    /// reinforcement values.
    pub fn with_space(config: TrainingConfig, space: StateSpace) -> crate::Result<Self> {
        config.validate()?;
        let engine = ReinforcementEngine::with_values(config.reinforcement)?;
        let learner = MatchboxPolicy::new(config.seed);
        let opponent = config
            .opponent
            .build(config.seed.map(|seed| seed.wrapping_add(1)));
        Ok(Self {
            space,
            engine,
            learner,
            opponent,
            config,
            results: TrainingResults::default(),
        })
    }

    /// Replace the opponent policy.
    pub fn with_opponent(mut self, opponent: Box<dyn Policy>) -> Self {
        self.opponent = opponent;
        self
    }

    /// Play the configured number of games.
    pub fn train(&mut self) -> crate::Result<&TrainingResults> {
        self.train_with(&mut ())
    }

    /// Play the configured number of games, reporting to `observer`.
    pub fn train_with(&mut self, observer: &mut dyn Observer) -> crate::Result<&TrainingResults> {
        let games = self.config.games;
        log::info!(
            "training {games} game(s) against {} opponent",
            self.opponent.name()
        );
        observer.on_training_start(games)?;
        for game_num in 0..games {
            let record = self.play_game()?;
            observer.on_game_end(game_num, &record, &self.results)?;
        }
        observer.on_training_end(&self.results)?;
        log::info!(
            "finished: {} wins, {} draws, {} losses over {} game(s)",
            self.results.wins,
            self.results.draws,
            self.results.losses,
            self.results.games
        );
        Ok(&self.results)
    }

    /// Play one game to the end and reinforce it.
    pub fn play_game(&mut self) -> crate::Result<GameRecord> {
        let mut game = Game::new();
        while !game.is_over() {
            let state = game.history();
            let square = match game.to_move() {
                Player::One => self.learner.select_move(&state, &self.space)?,
                Player::Two => self.opponent.select_move(&state, &self.space)?,
            };
            game.play(square)?;
        }

        let outcome = game.outcome().ok_or(crate::Error::NoValidMoves)?;
        let moves = game.move_list();
        self.engine
            .reinforce_list(&mut self.space, &moves, outcome)?;
        self.results.record(outcome);
        log::debug!("game {}: {moves} -> {outcome}", self.results.games);

        Ok(GameRecord { moves, outcome })
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    /// End the session, keeping the learned table.
    pub fn into_space(self) -> StateSpace {
        self.space
    }

    pub fn engine(&self) -> &ReinforcementEngine {
        &self.engine
    }

    pub fn results(&self) -> &TrainingResults {
        &self.results
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }
}
