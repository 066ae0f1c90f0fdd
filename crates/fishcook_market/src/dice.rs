//! # Dice
//!
//! Six-sided dice for the restocking engine.
//!
//! Markets never own a random source. Every refill receives a
//! [`DieRoller`] from its caller, which lets live play use a CSPRNG while
//! tests and replays substitute a seeded or fully scripted sequence.
//!
//! ## Sources
//!
//! - [`SecureDice`]: ChaCha20 seeded from OS entropy. Unbiased, unpredictable.
//! - [`RngDice::seeded`]: same generator from a fixed seed, for replays.
//! - [`ScriptedDice`]: replays a fixed list of faces, cycling when exhausted.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

/// Number of sides on every die in the game.
pub const DIE_SIDES: u8 = 6;

/// A single die outcome, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Face 1 (most common fish tier).
    pub const ONE: Self = Self(1);
    /// Face 2.
    pub const TWO: Self = Self(2);
    /// Face 3.
    pub const THREE: Self = Self(3);
    /// Face 4.
    pub const FOUR: Self = Self(4);
    /// Face 5.
    pub const FIVE: Self = Self(5);
    /// Face 6 (rarest fish tier).
    pub const SIX: Self = Self(6);

    /// All faces in ascending order.
    pub const ALL: [Self; DIE_SIDES as usize] = [
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
    ];

    /// Creates a face, returning `None` outside `1..=6`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= DIE_SIDES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a face in a const context. Fails compilation of the
    /// enclosing const item if `value` is out of range.
    #[must_use]
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value >= 1 && value <= DIE_SIDES, "die face out of range");
        Self(value)
    }

    /// Returns the face value (1-6).
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index (face 1 = 0), for per-face tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for DieFace {
    type Error = MarketError;

    fn try_from(value: u8) -> MarketResult<Self> {
        Self::new(value).ok_or(MarketError::InvalidFace(value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can throw six-sided dice.
pub trait DieRoller {
    /// Throws a single die.
    fn roll_one(&mut self) -> DieFace;

    /// Throws `count` dice.
    fn roll(&mut self, count: usize) -> Vec<DieFace> {
        (0..count).map(|_| self.roll_one()).collect()
    }
}

impl<T: DieRoller + ?Sized> DieRoller for &mut T {
    fn roll_one(&mut self) -> DieFace {
        (**self).roll_one()
    }
}

impl<T: DieRoller + ?Sized> DieRoller for Box<T> {
    fn roll_one(&mut self) -> DieFace {
        (**self).roll_one()
    }
}

/// Dice backed by any [`rand::Rng`].
///
/// Faces are drawn with `gen_range(1..=6)`, which is uniform (no modulo bias).
#[derive(Clone, Debug)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + SeedableRng> RngDice<R> {
    /// Creates dice from a fixed seed. Same seed = same rolls, ALWAYS.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: Rng> DieRoller for RngDice<R> {
    #[inline]
    fn roll_one(&mut self) -> DieFace {
        DieFace(self.rng.gen_range(1..=DIE_SIDES))
    }
}

/// Live-play dice: ChaCha20 keyed from the operating system's entropy.
pub type SecureDice = RngDice<ChaCha20Rng>;

impl SecureDice {
    /// Creates dice seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

/// Dice that replay a fixed sequence of faces.
///
/// When the script runs out it starts again from the first face.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: Vec<DieFace>,
    cursor: usize,
    thrown: usize,
}

impl ScriptedDice {
    /// Creates scripted dice from faces.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::EmptyScript`] if `faces` is empty.
    pub fn new(faces: impl IntoIterator<Item = DieFace>) -> MarketResult<Self> {
        let script: Vec<DieFace> = faces.into_iter().collect();
        if script.is_empty() {
            return Err(MarketError::EmptyScript);
        }
        Ok(Self {
            script,
            cursor: 0,
            thrown: 0,
        })
    }

    /// Creates scripted dice from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidFace`] for any value outside `1..=6`,
    /// or [`MarketError::EmptyScript`] if `values` is empty.
    pub fn from_values(values: &[u8]) -> MarketResult<Self> {
        let faces = values
            .iter()
            .map(|&v| DieFace::try_from(v))
            .collect::<MarketResult<Vec<_>>>()?;
        Self::new(faces)
    }

    /// Total dice thrown so far.
    #[must_use]
    pub const fn thrown(&self) -> usize {
        self.thrown
    }
}

impl DieRoller for ScriptedDice {
    fn roll_one(&mut self) -> DieFace {
        let face = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.thrown += 1;
        face
    }
}
