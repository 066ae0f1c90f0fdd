//! # Resource Cells
//!
//! The atomic unit of market inventory: a fixed price plus an optional
//! availability marker. A cell without a marker is hidden.

use std::fmt;

/// Price of a single resource, in coins.
pub type Price = u32;

/// Availability flag for farmers market cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stocked;

impl fmt::Display for Stocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("1")
    }
}

/// A priced slot in a market grid.
///
/// The price is fixed when the grid is built. Only the marker changes,
/// and only the owning crate can change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceCell<M> {
    price: Price,
    marker: Option<M>,
}

impl<M: Copy> ResourceCell<M> {
    /// Creates a hidden cell.
    #[inline]
    #[must_use]
    pub const fn hidden(price: Price) -> Self {
        Self {
            price,
            marker: None,
        }
    }

    /// Returns the cell's price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the availability marker, if the cell is revealed.
    #[inline]
    #[must_use]
    pub const fn marker(&self) -> Option<M> {
        self.marker
    }

    /// Returns true if the cell is currently purchasable.
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.marker.is_some()
    }

    #[inline]
    pub(crate) fn reveal(&mut self, marker: M) {
        self.marker = Some(marker);
    }
}
