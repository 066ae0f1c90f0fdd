//! # Market Grid
//!
//! A fixed-shape `R x C` table of [`ResourceCell`]s.
//!
//! The shape lives in the type, so a grid can never be resized. Grids are
//! built from a price table with every cell hidden; restocking code reveals
//! cells on a freshly built grid and swaps it in whole.

use std::fmt;

use crate::cell::{Price, ResourceCell};

/// A rectangular arrangement of priced cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarketGrid<M, const R: usize, const C: usize> {
    cells: [[ResourceCell<M>; C]; R],
}

impl<M: Copy, const R: usize, const C: usize> MarketGrid<M, R, C> {
    /// Builds a grid from a price table with every cell hidden.
    #[must_use]
    pub fn from_prices(prices: &[[Price; C]; R]) -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| ResourceCell::hidden(prices[row][col]))
            }),
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Gets the cell at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&ResourceCell<M>> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Gets a full row.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[ResourceCell<M>; C]> {
        self.cells.get(row)
    }

    /// Iterates rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[ResourceCell<M>; C]> {
        self.cells.iter()
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &ResourceCell<M>> {
        self.cells.iter().filter_map(move |r| r.get(col))
    }

    /// Returns the price table this grid was built from.
    #[must_use]
    pub fn prices(&self) -> [[Price; C]; R] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cells[row][col].price()))
    }

    /// Counts revealed cells in one row.
    #[must_use]
    pub fn revealed_in_row(&self, row: usize) -> usize {
        self.row(row)
            .map_or(0, |r| r.iter().filter(|c| c.is_revealed()).count())
    }

    /// Counts revealed cells in one column.
    #[must_use]
    pub fn revealed_in_column(&self, col: usize) -> usize {
        self.column(col).filter(|c| c.is_revealed()).count()
    }

    /// Counts revealed cells across the whole grid.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_revealed())
            .count()
    }

    /// Reveals a cell. Out-of-range coordinates are ignored.
    pub(crate) fn reveal(&mut self, row: usize, col: usize, marker: M) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.reveal(marker);
        }
    }
}

/// Tab-separated markers, one row per line. Hidden cells print as `.`.
impl<M: Copy + fmt::Display, const R: usize, const C: usize> fmt::Display for MarketGrid<M, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                match cell.marker() {
                    Some(marker) => write!(f, "{marker}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
