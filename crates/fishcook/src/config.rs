//! # Game Configuration
//!
//! Table setup read from TOML. Every field is optional:
//!
//! ```toml
//! players = 4
//! recipes = "house_recipes.toml"   # defaults to the built-in deck
//! seed = 1234                      # omit for OS entropy
//! log_filter = "fishcook=debug,info"
//! ```
//!
//! A relative `recipes` path in a file loaded with
//! [`GameConfig::from_path`] is resolved against that file's directory.

use std::path::{Path, PathBuf};

use fishcook_market::SecureDice;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_FILTER, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, GameResult};
use crate::recipes::RecipeBook;

// Keeps the deck stream apart from the dice stream under one seed.
const DECK_SEED_SALT: u64 = 0x5EED_DEC0;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Players seated at the start.
    pub players: usize,
    /// Recipe file; `None` uses the built-in deck.
    pub recipes: Option<PathBuf>,
    /// Seed for reproducible dice and deck order.
    pub seed: Option<u64>,
    /// Default `tracing` directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            recipes: None,
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a config.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Parse`] for malformed TOML or unknown keys, and
    /// the errors of [`GameConfig::validate`].
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the file cannot be read, otherwise as
    /// [`GameConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let (Some(recipes), Some(dir)) = (config.recipes.as_ref(), path.parent()) {
            if recipes.is_relative() {
                config.recipes = Some(dir.join(recipes));
            }
        }
        Ok(config)
    }

    /// Checks game rules the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] or
    /// [`GameError::InvalidConfig`].
    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(GameError::InvalidPlayerCount {
                count: self.players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "log_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads the configured recipe book.
    ///
    /// # Errors
    ///
    /// Propagates [`RecipeBook::from_path`] errors.
    pub fn recipe_book(&self) -> GameResult<RecipeBook> {
        match &self.recipes {
            Some(path) => RecipeBook::from_path(path),
            None => RecipeBook::builtin(),
        }
    }

    /// Dice for the markets: seeded when a seed is set, OS entropy otherwise.
    #[must_use]
    pub fn dice(&self) -> SecureDice {
        match self.seed {
            Some(seed) => SecureDice::seeded(seed),
            None => SecureDice::from_entropy(),
        }
    }

    /// RNG for shuffling the recipe deck.
    #[must_use]
    pub fn deck_rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed ^ DECK_SEED_SALT),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
