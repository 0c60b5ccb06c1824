use thiserror::Error;
use tracing::debug;

use crate::game::{Difficulty, DifficultyParseError};

/// Fixes the shuffle seed so deals are reproducible.
pub const SEED_ENV: &str = "GINRUMMY_SEED";
/// Difficulty of the session dealt when the table opens.
pub const DIFFICULTY_ENV: &str = "GINRUMMY_DIFFICULTY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid GINRUMMY_SEED: {0:?} is not an unsigned integer")]
    InvalidSeed(String),

    #[error("Invalid GINRUMMY_DIFFICULTY: {0}")]
    InvalidDifficulty(#[from] DifficultyParseError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub default_difficulty: Difficulty,
    pub seed: Option<u64>,
}

impl TableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Missing or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(SEED_ENV)) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = non_blank(lookup(DIFFICULTY_ENV)) {
            config.default_difficulty = raw.parse()?;
        }

        debug!(
            default_difficulty = %config.default_difficulty,
            seed = ?config.seed,
            "Loaded table config"
        );
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
