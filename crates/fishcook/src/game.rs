//! # Game Session
//!
//! Owns the table: both markets, the dice that restock them, the roster
//! and the recipe deck.

use fishcook_market::{DieRoller, FarmersMarket, FishMarket, Market, SecureDice};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::config::GameConfig;
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::RecipeDeck;
use crate::error::{GameError, GameResult};
use crate::players::{Player, PlayerRoster};
use crate::recipes::RecipeBook;

/// Number of market days played for `players` players.
#[must_use]
pub const fn days_for_players(players: usize) -> Option<usize> {
    match players {
        2 => Some(3),
        3 | 4 => Some(4),
        5 | 6 => Some(5),
        _ => None,
    }
}

/// A game in progress.
#[derive(Debug)]
pub struct GameSession<D: DieRoller = SecureDice> {
    dice: D,
    fish: FishMarket,
    farmers: FarmersMarket,
    roster: PlayerRoster,
    deck: RecipeDeck,
    days: usize,
}

impl<D: DieRoller> GameSession<D> {
    /// Starts a session, shuffling the deck from OS entropy.
    ///
    /// # Errors
    ///
    /// See [`GameSession::with_deck_rng`].
    pub fn new(book: &RecipeBook, player_count: usize, dice: D) -> GameResult<Self> {
        Self::with_deck_rng(book, player_count, dice, &mut ChaCha20Rng::from_entropy())
    }

    /// Starts a session: seats `player_count` players, shuffles the deck
    /// with `deck_rng` and stocks both markets.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] outside
    /// `MIN_PLAYERS..=MAX_PLAYERS`, or [`GameError::Market`] if the fish
    /// market cannot be stocked.
    pub fn with_deck_rng<R: Rng + ?Sized>(
        book: &RecipeBook,
        player_count: usize,
        mut dice: D,
        deck_rng: &mut R,
    ) -> GameResult<Self> {
        let days = days_for_players(player_count).ok_or(GameError::InvalidPlayerCount {
            count: player_count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })?;

        let mut roster = PlayerRoster::new();
        for seat in 1..=player_count {
            roster.add(Player::new(format!("Player {seat}")))?;
        }

        let mut deck = RecipeDeck::from_book(book);
        deck.shuffle(deck_rng);

        let fish = FishMarket::stocked(&mut dice)?;
        let farmers = FarmersMarket::stocked(&mut dice);

        info!(
            players = player_count,
            days,
            recipes = deck.remaining(),
            "Game session started"
        );

        Ok(Self {
            dice,
            fish,
            farmers,
            roster,
            deck,
            days,
        })
    }

    /// Market days in this game.
    #[must_use]
    pub const fn days(&self) -> usize {
        self.days
    }

    /// Restocks the fish market.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Market`] if tier correction does not converge;
    /// the previous stock is kept.
    pub fn refill_fish_market(&mut self) -> GameResult<()> {
        self.fish.refill(&mut self.dice)?;
        info!(stocked = self.fish.inventory().revealed_count(), "Fish market refilled");
        Ok(())
    }

    /// Restocks the farmers market.
    pub fn refill_farmers_market(&mut self) {
        self.farmers.refill(&mut self.dice);
        info!(
            stocked = self.farmers.inventory().revealed_count(),
            "Farmers market refilled"
        );
    }

    /// The fish market.
    #[must_use]
    pub const fn fish_market(&self) -> &FishMarket {
        &self.fish
    }

    /// The farmers market.
    #[must_use]
    pub const fn farmers_market(&self) -> &FarmersMarket {
        &self.farmers
    }

    /// Deals the top recipe card to the player at `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] for an empty seat (no card is
    /// dealt) or [`GameError::DeckExhausted`].
    pub fn deal_recipe(&mut self, seat: usize) -> GameResult<()> {
        let player = self
            .roster
            .get_mut(seat)
            .ok_or(GameError::UnknownPlayer(seat))?;
        let card = self.deck.deal()?;
        player.take_recipe(card);
        Ok(())
    }

    /// Seats another player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterFull`] when every seat is taken.
    pub fn add_player(&mut self, name: impl Into<String>) -> GameResult<usize> {
        let seat = self.roster.add(Player::new(name))?;
        self.days = days_for_players(self.roster.len()).unwrap_or(self.days);
        Ok(seat)
    }

    /// The players.
    #[must_use]
    pub const fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// Mutable access to the players, for spending coins.
    pub fn roster_mut(&mut self) -> &mut PlayerRoster {
        &mut self.roster
    }

    /// The recipe deck.
    #[must_use]
    pub const fn deck(&self) -> &RecipeDeck {
        &self.deck
    }
}

impl GameSession<SecureDice> {
    /// Starts a session from config. A configured seed makes both the dice
    /// and the deck order reproducible.
    ///
    /// # Errors
    ///
    /// Returns config validation and recipe loading errors, or any error
    /// from [`GameSession::with_deck_rng`].
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        let book = config.recipe_book()?;
        Self::with_deck_rng(&book, config.players, config.dice(), &mut config.deck_rng())
    }
}
