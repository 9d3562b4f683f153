//! Configuration for training sessions.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{policy::OpponentKind, reinforcement::ReinforcementValues};

/// Settings for a self-play training run.
///
/// Every field has a default, so a JSON config file only needs the fields it
/// changes.
///
/// # Examples
///
/// ```
/// use magic_menace::{OpponentKind, TrainingConfig};
///
/// let config = TrainingConfig::new()
///     .with_games(1_000)
///     .with_seed(42)
///     .with_opponent(OpponentKind::Defensive);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of games to play
    pub games: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Who player 1 trains against
    pub opponent: OpponentKind,
    /// Bead changes per outcome
    pub reinforcement: ReinforcementValues,
    /// Whether to show a progress bar
    pub progress: bool,
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_reinforcement(mut self, values: ReinforcementValues) -> Self {
        self.reinforcement = values;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> crate::Result<()> {
        self.reinforcement.validate()
    }

    /// Read a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, a serialization
    /// error if it is not valid JSON, or a configuration error if the values
    /// fail [`Self::validate`].
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            games: 500,
            seed: None,
            opponent: OpponentKind::default(),
            reinforcement: ReinforcementValues::default(),
            progress: true,
        }
    }
}
