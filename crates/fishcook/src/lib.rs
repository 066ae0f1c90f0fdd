//! # FishCook
//!
//! The sushi market board game: recipe cards, players and a game session
//! driving the restocking engine in [`fishcook_market`].
//!
//! ## Example
//!
//! ```rust
//! use fishcook::{GameConfig, GameSession};
//!
//! let config = GameConfig { players: 3, seed: Some(7), ..GameConfig::default() };
//! let mut session = GameSession::from_config(&config)?;
//!
//! session.deal_recipe(0)?;
//! session.refill_fish_market()?;
//! session.refill_farmers_market();
//!
//! assert_eq!(session.days(), 4);
//! # Ok::<(), fishcook::GameError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod players;
pub mod recipes;

pub use fishcook_market as market;

pub use config::GameConfig;
pub use constants::{DEFAULT_LOG_FILTER, MAX_PLAYERS, MIN_PLAYERS, STARTING_MONEY};
pub use deck::RecipeDeck;
pub use error::{GameError, GameResult};
pub use game::{days_for_players, GameSession};
pub use players::{Money, Player, PlayerRoster};
pub use recipes::{IngredientCode, Ingredients, RecipeBook, RecipeCard, BUILTIN_RECIPES};
