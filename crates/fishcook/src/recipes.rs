//! # Recipe Cards
//!
//! Recipe definitions loaded from TOML.
//!
//! ```toml
//! [[recipes]]
//! title = "Tuna Nigiri"
//! source = "Assets_img_14"
//! fish = 3
//! ingredients = "w"
//! base = 15
//! bonus = 3
//! ```
//!
//! `fish` is the fish tier (die face). `ingredients` is a string of
//! produce codes, one character each.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use fishcook_market::DieFace;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// The deck shipped with the game.
pub const BUILTIN_RECIPES: &str = include_str!("../data/recipes.toml");

/// A produce code printed on recipe cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IngredientCode {
    /// `w`
    White,
    /// `y`
    Yellow,
    /// `g`
    Green,
    /// `r`
    Red,
    /// `b`
    Brown,
    /// `p`
    Purple,
}

impl IngredientCode {
    /// All codes.
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Yellow,
        Self::Green,
        Self::Red,
        Self::Brown,
        Self::Purple,
    ];

    /// The character used in config files.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Brown => 'b',
            Self::Purple => 'p',
        }
    }
}

impl TryFrom<char> for IngredientCode {
    type Error = GameError;

    fn try_from(c: char) -> GameResult<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == c)
            .ok_or(GameError::UnknownIngredient(c))
    }
}

impl fmt::Display for IngredientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The ingredient list of a recipe, in card order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ingredients(Vec<IngredientCode>);

impl Ingredients {
    /// Number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list is empty. Loaded recipes never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `code` is on the list.
    #[must_use]
    pub fn contains(&self, code: IngredientCode) -> bool {
        self.0.contains(&code)
    }

    /// Iterates ingredients in card order.
    pub fn iter(&self) -> impl Iterator<Item = IngredientCode> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<String> for Ingredients {
    type Error = GameError;

    fn try_from(codes: String) -> GameResult<Self> {
        codes
            .chars()
            .map(IngredientCode::try_from)
            .collect::<GameResult<Vec<_>>>()
            .map(Self)
    }
}

impl From<Ingredients> for String {
    fn from(ingredients: Ingredients) -> Self {
        ingredients.0.iter().map(|c| c.code()).collect()
    }
}

/// A single recipe card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeCard {
    /// Card title.
    pub title: String,
    /// Image asset id for front-ends.
    pub source: String,
    /// Fish tier the recipe needs.
    pub fish: DieFace,
    /// Produce the recipe needs.
    pub ingredients: Ingredients,
    /// Base value.
    #[serde(rename = "base")]
    pub base_value: u16,
    /// Bonus value.
    pub bonus: u16,
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeFile {
    recipes: Vec<RecipeCard>,
}

/// A validated set of recipe cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeBook {
    cards: Vec<RecipeCard>,
}

impl RecipeBook {
    /// Creates a book from cards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the book is empty, a title
    /// is blank or repeated, or a card has no ingredients.
    pub fn new(cards: Vec<RecipeCard>) -> GameResult<Self> {
        if cards.is_empty() {
            return Err(GameError::InvalidConfig(
                "recipe book has no cards".to_string(),
            ));
        }

        let mut titles = BTreeSet::new();
        for card in &cards {
            if card.title.trim().is_empty() {
                return Err(GameError::InvalidConfig(
                    "recipe with blank title".to_string(),
                ));
            }
            if card.ingredients.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "recipe {:?} has no ingredients",
                    card.title
                )));
            }
            if !titles.insert(card.title.as_str()) {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate recipe title {:?}",
                    card.title
                )));
            }
        }

        Ok(Self { cards })
    }

    /// The deck shipped with the game.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded file is broken.
    pub fn builtin() -> GameResult<Self> {
        Self::from_toml_str(BUILTIN_RECIPES)
    }

    /// Parses a book from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Parse`] for malformed TOML, bad faces or
    /// unknown ingredient codes, and [`GameError::InvalidConfig`] for
    /// rule violations (see [`RecipeBook::new`]).
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let file: RecipeFile = toml::from_str(text)?;
        Self::new(file.recipes)
    }

    /// Loads a book from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the file cannot be read, otherwise as
    /// [`RecipeBook::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// All cards, in file order.
    #[must_use]
    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed book.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counts cards needing fish tier `fish` and exactly `ingredient_count` produce.
    #[must_use]
    pub fn count_matching(&self, fish: DieFace, ingredient_count: usize) -> usize {
        self.cards
            .iter()
            .filter(|c| c.fish == fish && c.ingredients.len() == ingredient_count)
            .count()
    }

    /// Every ingredient code used by at least one card.
    #[must_use]
    pub fn ingredient_codes(&self) -> BTreeSet<IngredientCode> {
        self.cards.iter().flat_map(|c| c.ingredients.iter()).collect()
    }
}
