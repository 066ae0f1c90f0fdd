//! # Farmers Market - Threshold Fill
//!
//! Six produce columns, five cost tiers each (row 0 = most expensive).
//! Every refill throws one die per column. A cell is stocked when its
//! acceptance rule takes that column's roll.
//!
//! ```text
//!            Sake   Mushrooms  Greens  Ginger  Tamago  Rice
//! tier 0     12 *   10 *       8 *     7 *     5 *     4 *
//! tier 1      9 1-2  7 1-2     6 1     5 1     4 1     3 *
//! tier 2      7 3-4  6 3       5 2-3   4 2-3   3 2     2 1-2
//! tier 3      6 5    5 4-5     4 4-5   3 4     2 3-4   1 3-4
//! tier 4      5 6    4 6       3 6     2 5-6   1 5-6   0 5-6
//!
//! * = no range, stocked on every refill
//! ```
//!
//! Ranges are inclusive on both ends: roll `d` stocks `[low, high]` iff
//! `low <= d <= high`.

use tracing::debug;

use crate::cell::{Price, Stocked};
use crate::dice::{DieFace, DieRoller};
use crate::error::{MarketError, MarketResult};
use crate::grid::MarketGrid;
use crate::market::{Market, MarketKind};

/// Number of produce columns.
pub const PRODUCE_KINDS: usize = 6;

/// Cost tiers per column.
pub const PRODUCE_TIERS: usize = 5;

/// The produce sold at the farmers market, in column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Produce {
    /// Sake.
    Sake,
    /// Mushrooms.
    Mushrooms,
    /// Leafy greens.
    Greens,
    /// Pickled ginger.
    Ginger,
    /// Tamago (egg).
    Tamago,
    /// Rice.
    Rice,
}

impl Produce {
    /// All produce in column order.
    pub const ALL: [Self; PRODUCE_KINDS] = [
        Self::Sake,
        Self::Mushrooms,
        Self::Greens,
        Self::Ginger,
        Self::Tamago,
        Self::Rice,
    ];

    /// Column index on the board.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sake => "Sake",
            Self::Mushrooms => "Mushrooms",
            Self::Greens => "Greens",
            Self::Ginger => "Ginger",
            Self::Tamago => "Tamago",
            Self::Rice => "Rice",
        }
    }
}

/// Inclusive range of die faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AcceptanceRange {
    low: DieFace,
    high: DieFace,
}

impl AcceptanceRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidRange`] if `low > high`.
    pub fn new(low: DieFace, high: DieFace) -> MarketResult<Self> {
        if low > high {
            return Err(MarketError::InvalidRange {
                low: low.value(),
                high: high.value(),
            });
        }
        Ok(Self { low, high })
    }

    /// Range covering a single face.
    #[must_use]
    pub const fn single(face: DieFace) -> Self {
        Self {
            low: face,
            high: face,
        }
    }

    const fn from_const(low: u8, high: u8) -> Self {
        assert!(low <= high, "acceptance range inverted");
        Self {
            low: DieFace::from_const(low),
            high: DieFace::from_const(high),
        }
    }

    /// Lowest accepted face.
    #[must_use]
    pub const fn low(self) -> DieFace {
        self.low
    }

    /// Highest accepted face.
    #[must_use]
    pub const fn high(self) -> DieFace {
        self.high
    }

    /// True if `low <= face <= high`.
    #[inline]
    #[must_use]
    pub const fn contains(self, face: DieFace) -> bool {
        self.low.value() <= face.value() && face.value() <= self.high.value()
    }
}

/// When a farmers market cell is stocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Acceptance {
    /// No range: stocked on every refill.
    Always,
    /// Stocked when the column's roll falls in the range.
    Faces(AcceptanceRange),
}

impl Acceptance {
    /// True if a column roll of `face` stocks this cell.
    #[inline]
    #[must_use]
    pub const fn accepts(self, face: DieFace) -> bool {
        match self {
            Self::Always => true,
            Self::Faces(range) => range.contains(face),
        }
    }
}

/// Price and acceptance rule for one farmers market cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProduceSlot {
    /// Fixed price.
    pub price: Price,
    /// Stocking rule.
    pub acceptance: Acceptance,
}

impl ProduceSlot {
    const fn always(price: Price) -> Self {
        Self {
            price,
            acceptance: Acceptance::Always,
        }
    }

    const fn on(price: Price, low: u8, high: u8) -> Self {
        Self {
            price,
            acceptance: Acceptance::Faces(AcceptanceRange::from_const(low, high)),
        }
    }
}

/// A produce column, most expensive tier first.
pub type ProduceColumn = [ProduceSlot; PRODUCE_TIERS];

/// Fixed farmers market table, indexed `[column][tier]`.
pub const FARMERS_TABLE: [ProduceColumn; PRODUCE_KINDS] = [
    // Sake
    [
        ProduceSlot::always(12),
        ProduceSlot::on(9, 1, 2),
        ProduceSlot::on(7, 3, 4),
        ProduceSlot::on(6, 5, 5),
        ProduceSlot::on(5, 6, 6),
    ],
    // Mushrooms
    [
        ProduceSlot::always(10),
        ProduceSlot::on(7, 1, 2),
        ProduceSlot::on(6, 3, 3),
        ProduceSlot::on(5, 4, 5),
        ProduceSlot::on(4, 6, 6),
    ],
    // Greens
    [
        ProduceSlot::always(8),
        ProduceSlot::on(6, 1, 1),
        ProduceSlot::on(5, 2, 3),
        ProduceSlot::on(4, 4, 5),
        ProduceSlot::on(3, 6, 6),
    ],
    // Ginger
    [
        ProduceSlot::always(7),
        ProduceSlot::on(5, 1, 1),
        ProduceSlot::on(4, 2, 3),
        ProduceSlot::on(3, 4, 4),
        ProduceSlot::on(2, 5, 6),
    ],
    // Tamago
    [
        ProduceSlot::always(5),
        ProduceSlot::on(4, 1, 1),
        ProduceSlot::on(3, 2, 2),
        ProduceSlot::on(2, 3, 4),
        ProduceSlot::on(1, 5, 6),
    ],
    // Rice
    [
        ProduceSlot::always(4),
        ProduceSlot::always(3),
        ProduceSlot::on(2, 1, 2),
        ProduceSlot::on(1, 3, 4),
        ProduceSlot::on(0, 5, 6),
    ],
];

/// The farmers board: tier rows, produce columns.
pub type FarmersGrid = MarketGrid<Stocked, PRODUCE_TIERS, PRODUCE_KINDS>;

/// Farmers price table laid out as the board (`[tier][column]`).
#[must_use]
pub fn farmers_prices() -> [[Price; PRODUCE_KINDS]; PRODUCE_TIERS] {
    std::array::from_fn(|tier| std::array::from_fn(|col| FARMERS_TABLE[col][tier].price))
}

/// Which tiers of `column` a roll of `roll` stocks.
#[must_use]
pub fn fill_column(column: &ProduceColumn, roll: DieFace) -> [bool; PRODUCE_TIERS] {
    std::array::from_fn(|tier| column[tier].acceptance.accepts(roll))
}

/// The farmers market.
#[derive(Clone, Debug)]
pub struct FarmersMarket {
    grid: FarmersGrid,
    rolls: Option<[DieFace; PRODUCE_KINDS]>,
}

impl FarmersMarket {
    /// Creates a farmers market with every cell hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: FarmersGrid::from_prices(&farmers_prices()),
            rolls: None,
        }
    }

    /// Creates a farmers market and stocks it.
    #[must_use]
    pub fn stocked(dice: &mut dyn DieRoller) -> Self {
        let mut market = Self::new();
        market.refill(dice);
        market
    }

    /// Column rolls from the latest refill, in column order.
    #[must_use]
    pub const fn rolls(&self) -> Option<&[DieFace; PRODUCE_KINDS]> {
        self.rolls.as_ref()
    }

    /// The latest roll for one produce column.
    #[must_use]
    pub fn roll_for(&self, produce: Produce) -> Option<DieFace> {
        self.rolls.map(|rolls| rolls[produce.column()])
    }

    /// Restocks every column from one fresh die each.
    pub fn refill(&mut self, dice: &mut dyn DieRoller) {
        let rolls: [DieFace; PRODUCE_KINDS] = std::array::from_fn(|_| dice.roll_one());
        debug!(?rolls, "farmers market rolls");

        let mut staged = FarmersGrid::from_prices(&farmers_prices());
        for produce in Produce::ALL {
            let col = produce.column();
            for (tier, stocked) in fill_column(&FARMERS_TABLE[col], rolls[col])
                .into_iter()
                .enumerate()
            {
                if stocked {
                    staged.reveal(tier, col, Stocked);
                }
            }
        }

        self.grid = staged;
        self.rolls = Some(rolls);
        debug!(stocked = self.grid.revealed_count(), "farmers market restocked");
    }
}

impl Default for FarmersMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl Market for FarmersMarket {
    type Inventory = FarmersGrid;

    fn kind(&self) -> MarketKind {
        MarketKind::Farmers
    }

    fn refill(&mut self, dice: &mut dyn DieRoller) -> MarketResult<()> {
        FarmersMarket::refill(self, dice);
        Ok(())
    }

    fn inventory(&self) -> &FarmersGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{ScriptedDice, SecureDice};

    fn face(v: u8) -> DieFace {
        DieFace::new(v).unwrap()
    }

    #[test]
    fn test_range_contains_is_symmetric() {
        let range = AcceptanceRange::new(face(3), face(4)).unwrap();
        assert!(!range.contains(face(2)));
        assert!(range.contains(face(3)));
        assert!(range.contains(face(4)));
        // The upper bound holds: 5 is outside [3, 4]
        assert!(!range.contains(face(5)));
        assert!(AcceptanceRange::single(face(6)).contains(face(6)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            AcceptanceRange::new(face(5), face(2)).unwrap_err(),
            MarketError::InvalidRange { low: 5, high: 2 }
        );
    }

    #[test]
    fn test_sake_roll_three() {
        let sake = &FARMERS_TABLE[Produce::Sake.column()];
        assert_eq!(fill_column(sake, face(3)), [true, false, true, false, false]);
    }

    #[test]
    fn test_sake_roll_six() {
        let sake = &FARMERS_TABLE[Produce::Sake.column()];
        assert_eq!(fill_column(sake, face(6)), [true, false, false, false, true]);
    }

    #[test]
    fn test_ranged_tiers_partition_the_die() {
        // Exactly one ranged tier per roll in every column
        for column in &FARMERS_TABLE {
            for roll in DieFace::ALL {
                let hits = column
                    .iter()
                    .filter(|slot| matches!(slot.acceptance, Acceptance::Faces(r) if r.contains(roll)))
                    .count();
                assert_eq!(hits, 1, "roll {roll} in column {column:?}");
            }
        }
    }

    #[test]
    fn test_prices_match_table_layout() {
        let prices = farmers_prices();
        assert_eq!(prices[0], [12, 10, 8, 7, 5, 4]);
        assert_eq!(prices[4], [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_refill_uses_one_die_per_column() {
        let mut dice = ScriptedDice::from_values(&[3, 6, 1, 4, 2, 5]).unwrap();
        let market = FarmersMarket::stocked(&mut dice);
        assert_eq!(dice.thrown(), PRODUCE_KINDS);
        assert_eq!(market.roll_for(Produce::Mushrooms), Some(face(6)));

        let grid = market.inventory();
        // Sake, roll 3: base + tier 2
        assert_eq!(grid.revealed_in_column(0), 2);
        assert!(grid.get(2, 0).unwrap().is_revealed());
        // Rice, roll 5: two base tiers + tier 4
        assert_eq!(grid.revealed_in_column(5), 3);
        assert!(grid.get(4, 5).unwrap().is_revealed());
        assert!(!grid.get(2, 5).unwrap().is_revealed());
    }

    #[test]
    fn test_new_market_is_hidden() {
        let market = FarmersMarket::new();
        assert_eq!(market.inventory().revealed_count(), 0);
        assert!(market.rolls().is_none());
        assert_eq!(market.kind(), MarketKind::Farmers);
    }

    #[test]
    fn test_random_refills_stock_base_plus_one() {
        let mut dice = SecureDice::seeded(99);
        let mut market = FarmersMarket::new();
        for _ in 0..500 {
            market.refill(&mut dice);
            // Five columns with one base tier, Rice with two, plus one ranged hit each
            assert_eq!(market.inventory().revealed_count(), 5 * 2 + 3);
        }
    }
}
