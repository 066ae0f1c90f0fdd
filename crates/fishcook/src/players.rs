//! # Players
//!
//! Seats, purses and hands of recipe cards.

use tracing::debug;

use crate::constants::{MAX_PLAYERS, STARTING_MONEY};
use crate::error::{GameError, GameResult};
use crate::recipes::RecipeCard;

/// Coin amount.
pub type Money = u32;

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    money: Money,
    recipes: Vec<RecipeCard>,
}

impl Player {
    /// Seats a player with the starting purse and no recipes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            money: STARTING_MONEY,
            recipes: Vec::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coins held.
    #[must_use]
    pub const fn money(&self) -> Money {
        self.money
    }

    /// Recipe cards held, in the order received.
    #[must_use]
    pub fn recipes(&self) -> &[RecipeCard] {
        &self.recipes
    }

    /// Pays `amount` coins.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientFunds`] and leaves the purse
    /// untouched if `amount` exceeds what the player holds.
    pub fn spend(&mut self, amount: Money) -> GameResult<()> {
        self.money = self
            .money
            .checked_sub(amount)
            .ok_or(GameError::InsufficientFunds {
                required: amount,
                available: self.money,
            })?;
        Ok(())
    }

    /// Adds a recipe card to the player's hand.
    pub fn take_recipe(&mut self, card: RecipeCard) {
        debug!(player = %self.name, recipe = %card, "Recipe taken");
        self.recipes.push(card);
    }
}

/// Players in seat order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRoster {
    players: Vec<Player>,
}

impl PlayerRoster {
    /// Seats at the table.
    pub const CAPACITY: usize = MAX_PLAYERS;

    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a player and returns their seat index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RosterFull`] once every seat is taken.
    pub fn add(&mut self, player: Player) -> GameResult<usize> {
        if self.players.len() >= Self::CAPACITY {
            return Err(GameError::RosterFull {
                capacity: Self::CAPACITY,
            });
        }
        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Player at `seat`.
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Mutable player at `seat`.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Players seated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterates players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::RecipeBook;

    #[test]
    fn test_new_player_starts_with_purse() {
        let player = Player::new("Ana");
        assert_eq!(player.name(), "Ana");
        assert_eq!(player.money(), STARTING_MONEY);
        assert!(player.recipes().is_empty());
    }

    #[test]
    fn test_spend() {
        let mut player = Player::new("Ana");
        player.spend(30).unwrap();
        assert_eq!(player.money(), 70);
        player.spend(70).unwrap();
        assert_eq!(player.money(), 0);
    }

    #[test]
    fn test_overspend_is_rejected() {
        let mut player = Player::new("Ana");
        let err = player.spend(101).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientFunds {
                required: 101,
                available: 100
            }
        ));
        assert_eq!(player.money(), STARTING_MONEY);
    }

    #[test]
    fn test_take_recipe() {
        let book = RecipeBook::builtin().unwrap();
        let mut player = Player::new("Ana");
        player.take_recipe(book.cards()[0].clone());
        assert_eq!(player.recipes(), &book.cards()[..1]);
    }

    #[test]
    fn test_roster_capacity() {
        let mut roster = PlayerRoster::new();
        for seat in 0..PlayerRoster::CAPACITY {
            assert_eq!(roster.add(Player::new(format!("P{seat}"))).unwrap(), seat);
        }
        let err = roster.add(Player::new("late")).unwrap_err();
        assert!(matches!(err, GameError::RosterFull { capacity: 6 }));
        assert_eq!(roster.len(), PlayerRoster::CAPACITY);
    }
}
