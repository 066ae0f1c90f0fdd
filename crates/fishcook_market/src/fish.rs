//! # Fish Market - Capacity-Bounded Tier Allocation
//!
//! Each refill throws twelve dice and stocks the fish board from the result.
//!
//! ```text
//! row  face   prices                     reveal order
//!  0    6     10  11  13  16  20         <- rightmost first
//!  1    5      8   9  11  13  16
//!  2    4      6   7   8  10  12
//!  3    3      4   5   6   7   9
//!  4    2      2   3   4   5   7
//!  5    1      1   2   3   4   5
//! ```
//!
//! ## Allocation
//!
//! 1. Throw [`FISH_DICE_PER_REFILL`] dice and count them per face.
//! 2. **Overflow correction**: while some face holds more than
//!    [`FISH_TIER_CAPACITY`] dice, take one die off the first overflowing
//!    face (highest face first) and rethrow it until it lands on a
//!    *different* face that still has room. Every correction moves exactly
//!    one unit, so the total stays at twelve.
//! 3. For face `t` with count `m`, reveal the rightmost `m` cells of row
//!    `6 - t`, marking each with `t`.
//!
//! Twelve dice never exceed the board's thirty slots, so a fair die always
//! finds room. Correction rethrows are still bounded by
//! [`MAX_CORRECTION_ROLLS`]; a roller that never lands on an open face gets
//! [`MarketError::AllocationDidNotConverge`] instead of a hung refill.

use std::fmt;

use tracing::{debug, warn};

use crate::cell::Price;
use crate::dice::{DieFace, DieRoller, DIE_SIDES};
use crate::error::{MarketError, MarketResult};
use crate::grid::MarketGrid;
use crate::market::{Market, MarketKind};

/// Number of fish tiers (one per die face).
pub const FISH_TIERS: usize = DIE_SIDES as usize;

/// Cells per tier row.
pub const FISH_TIER_CAPACITY: usize = 5;

/// Dice thrown on every fish market refill.
pub const FISH_DICE_PER_REFILL: usize = 12;

/// Upper bound on overflow-correction rethrows in a single refill.
pub const MAX_CORRECTION_ROLLS: usize = FISH_DICE_PER_REFILL * 16;

/// Fixed fish price ladder. Row 0 is face 6, row 5 is face 1.
pub const FISH_PRICES: [[Price; FISH_TIER_CAPACITY]; FISH_TIERS] = [
    [10, 11, 13, 16, 20],
    [8, 9, 11, 13, 16],
    [6, 7, 8, 10, 12],
    [4, 5, 6, 7, 9],
    [2, 3, 4, 5, 7],
    [1, 2, 3, 4, 5],
];

/// The fish board: tier rows, capacity columns, marked with the revealing face.
pub type FishGrid = MarketGrid<DieFace, FISH_TIERS, FISH_TIER_CAPACITY>;

/// Row index holding a face's tier.
#[inline]
#[must_use]
pub const fn tier_row(face: DieFace) -> usize {
    FISH_TIERS - face.value() as usize
}

/// Face whose tier lives in `row`, or `None` for rows past the board.
#[inline]
#[must_use]
pub const fn tier_face(row: usize) -> Option<DieFace> {
    if row < FISH_TIERS {
        DieFace::new((FISH_TIERS - row) as u8)
    } else {
        None
    }
}

/// Dice counted per face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TierFrequencies([usize; FISH_TIERS]);

impl TierFrequencies {
    /// Counts a batch of rolls.
    #[must_use]
    pub fn from_rolls(rolls: &[DieFace]) -> Self {
        let mut counts = [0; FISH_TIERS];
        for face in rolls {
            counts[face.index()] += 1;
        }
        Self(counts)
    }

    /// Dice counted for `face`.
    #[inline]
    #[must_use]
    pub const fn count(&self, face: DieFace) -> usize {
        self.0[face.index()]
    }

    /// Total dice counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest per-face count.
    #[must_use]
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Raw counts, index 0 = face 1.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> [usize; FISH_TIERS] {
        self.0
    }

    /// First face holding more than `capacity` dice, scanning 6 down to 1.
    #[must_use]
    pub fn first_overflowing(&self, capacity: usize) -> Option<DieFace> {
        DieFace::ALL
            .iter()
            .rev()
            .copied()
            .find(|&face| self.count(face) > capacity)
    }

    fn move_unit(&mut self, from: DieFace, to: DieFace) {
        self.0[from.index()] -= 1;
        self.0[to.index()] += 1;
    }
}

impl fmt::Display for TierFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in DieFace::ALL.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{face}:{}", self.count(*face))?;
        }
        Ok(())
    }
}

/// Counts `rolls` per face and corrects any tier over capacity.
///
/// Correction rethrows come from `dice`.
///
/// # Errors
///
/// Returns [`MarketError::AllocationDidNotConverge`] if the correction
/// loop uses more than [`MAX_CORRECTION_ROLLS`] rethrows.
pub fn allocate_tiers(
    rolls: &[DieFace],
    dice: &mut dyn DieRoller,
) -> MarketResult<TierFrequencies> {
    let mut freq = TierFrequencies::from_rolls(rolls);
    let mut rerolls = 0;

    while let Some(full) = freq.first_overflowing(FISH_TIER_CAPACITY) {
        loop {
            if rerolls >= MAX_CORRECTION_ROLLS {
                return Err(MarketError::AllocationDidNotConverge {
                    rerolls,
                    frequencies: freq.as_array(),
                });
            }
            let target = dice.roll_one();
            rerolls += 1;
            if target != full && freq.count(target) < FISH_TIER_CAPACITY {
                freq.move_unit(full, target);
                break;
            }
        }
    }

    if rerolls > 0 {
        warn!(rerolls, allocation = %freq, "fish tiers overflowed; corrected");
    }
    Ok(freq)
}

/// The fish market.
#[derive(Clone, Debug)]
pub struct FishMarket {
    grid: FishGrid,
    allocation: TierFrequencies,
}

impl FishMarket {
    /// Creates a fish market with every cell hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: FishGrid::from_prices(&FISH_PRICES),
            allocation: TierFrequencies::default(),
        }
    }

    /// Creates a fish market and stocks it.
    ///
    /// # Errors
    ///
    /// Propagates [`FishMarket::refill`] errors.
    pub fn stocked(dice: &mut dyn DieRoller) -> MarketResult<Self> {
        let mut market = Self::new();
        market.refill(dice)?;
        Ok(market)
    }

    /// Per-tier counts from the latest refill.
    #[inline]
    #[must_use]
    pub const fn allocation(&self) -> &TierFrequencies {
        &self.allocation
    }

    /// Stocks the board from twelve fresh dice.
    ///
    /// On error the current board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AllocationDidNotConverge`] if overflow
    /// correction cannot settle.
    pub fn refill(&mut self, dice: &mut dyn DieRoller) -> MarketResult<()> {
        let rolls = dice.roll(FISH_DICE_PER_REFILL);
        debug!(?rolls, "fish market rolls");

        let allocation = allocate_tiers(&rolls, dice)?;

        let mut staged = FishGrid::from_prices(&FISH_PRICES);
        for face in DieFace::ALL {
            let row = tier_row(face);
            for j in 0..allocation.count(face) {
                staged.reveal(row, FISH_TIER_CAPACITY - 1 - j, face);
            }
        }

        self.grid = staged;
        self.allocation = allocation;
        debug!(allocation = %self.allocation, "fish market restocked");
        Ok(())
    }
}

impl Default for FishMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl Market for FishMarket {
    type Inventory = FishGrid;

    fn kind(&self) -> MarketKind {
        MarketKind::Fish
    }

    fn refill(&mut self, dice: &mut dyn DieRoller) -> MarketResult<()> {
        FishMarket::refill(self, dice)
    }

    fn inventory(&self) -> &FishGrid {
        &self.grid
    }
}
