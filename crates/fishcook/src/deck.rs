//! # Recipe Deck
//!
//! A dealable pile built from a [`RecipeBook`]. The top card is dealt
//! first; shuffling takes the caller's RNG so seeded games replay exactly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GameError, GameResult};
use crate::recipes::{RecipeBook, RecipeCard};

/// A pile of recipe cards.
#[derive(Clone, Debug)]
pub struct RecipeDeck {
    // Top of the deck is the end of the vector.
    cards: Vec<RecipeCard>,
    shuffled: bool,
}

impl RecipeDeck {
    /// Builds an unshuffled deck with the book's first card on top.
    #[must_use]
    pub fn from_book(book: &RecipeBook) -> Self {
        let mut cards = book.cards().to_vec();
        cards.reverse();
        Self {
            cards,
            shuffled: false,
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffled = true;
    }

    /// True once [`RecipeDeck::shuffle`] has run.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Takes the top card.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] when no cards remain.
    pub fn deal(&mut self) -> GameResult<RecipeCard> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Looks at the top card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&RecipeCard> {
        self.cards.last()
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
