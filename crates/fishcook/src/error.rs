//! # Game Error Types
//!
//! All errors that can occur outside the restocking engine: roster and
//! deck rules, config loading, plus wrapped market errors.

use std::io;
use std::path::PathBuf;

use fishcook_market::MarketError;
use thiserror::Error;

/// Errors that can occur while setting up or running a game.
#[derive(Error, Debug)]
pub enum GameError {
    /// Every seat is taken.
    #[error("roster full: capacity {capacity}")]
    RosterFull {
        /// Seats at the table.
        capacity: usize,
    },

    /// A session was requested with too few or too many players.
    #[error("player count {count} outside {min}..={max}")]
    InvalidPlayerCount {
        /// Requested count.
        count: usize,
        /// Minimum allowed.
        min: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// No player sits at this seat.
    #[error("no player at seat {0}")]
    UnknownPlayer(usize),

    /// A player tried to pay more than they hold.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Amount asked for.
        required: u32,
        /// Amount held.
        available: u32,
    },

    /// The recipe deck has no cards left.
    #[error("recipe deck exhausted")]
    DeckExhausted,

    /// A recipe listed an ingredient code outside `w y g r b p`.
    #[error("unknown ingredient code {0:?}")]
    UnknownIngredient(char),

    /// Config content is well-formed but breaks a game rule.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Restocking failed.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// A config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for its schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
