//! # Market Error Types
//!
//! All errors that can occur while rolling dice or restocking a market.

use thiserror::Error;

use crate::dice::DIE_SIDES;

/// Errors that can occur in the restocking engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A value outside `1..=6` was used where a die face was expected.
    #[error("invalid die face {0}: expected 1..=6")]
    InvalidFace(u8),

    /// An acceptance range whose lower bound is above its upper bound.
    #[error("invalid acceptance range: {low}..={high}")]
    InvalidRange {
        /// Lower bound.
        low: u8,
        /// Upper bound.
        high: u8,
    },

    /// Scripted dice were built without any faces to replay.
    #[error("dice script is empty")]
    EmptyScript,

    /// Overflow correction hit its reroll bound without settling every tier
    /// under capacity.
    #[error("tier allocation did not converge after {rerolls} correction rolls (counts {frequencies:?})")]
    AllocationDidNotConverge {
        /// Correction rolls consumed before giving up.
        rerolls: usize,
        /// Per-face counts (index 0 = face 1) when the bound was hit.
        frequencies: [usize; DIE_SIDES as usize],
    },
}

/// Result type for market operations.
pub type MarketResult<T> = Result<T, MarketError>;
