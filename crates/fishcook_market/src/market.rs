//! # Market Facade
//!
//! The surface front-ends see: trigger a refill, read the board.

use std::fmt;

use crate::dice::DieRoller;
use crate::error::MarketResult;

/// Which market a board belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarketKind {
    /// Fish board, stocked by capacity-bounded tier allocation.
    Fish,
    /// Farmers board, stocked by per-column threshold fill.
    Farmers,
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fish => f.write_str("fish market"),
            Self::Farmers => f.write_str("farmers market"),
        }
    }
}

/// A restockable market.
///
/// `refill` is the only mutator. Each call derives the whole board from
/// fresh dice; nothing carries over from the previous stock.
pub trait Market {
    /// The board type exposed to readers.
    type Inventory;

    /// Which market this is.
    fn kind(&self) -> MarketKind;

    /// Restocks the board.
    ///
    /// # Errors
    ///
    /// Implementation-specific. On error the board must be unchanged.
    fn refill(&mut self, dice: &mut dyn DieRoller) -> MarketResult<()>;

    /// Read-only view of the current board. Clone it for an owned snapshot.
    fn inventory(&self) -> &Self::Inventory;
}
