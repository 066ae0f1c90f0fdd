//! # FishCook Market Restocking Engine
//!
//! Turns die rolls into market stock for the FishCook board game.
//!
//! ## Design Principles
//!
//! 1. **Injected dice** - Every refill takes a [`DieRoller`]; nothing reads a global RNG
//! 2. **Fixed prices** - Grids are built once from constant tables and never resized
//! 3. **All-or-nothing refills** - New stock is staged on a fresh grid and swapped in
//! 4. **Bounded correction** - Fish tier overflow correction cannot spin forever
//!
//! ## Example
//!
//! ```rust
//! use fishcook_market::{FishMarket, Market, SecureDice, FISH_DICE_PER_REFILL};
//!
//! let mut dice = SecureDice::from_entropy();
//! let mut fish = FishMarket::new();
//! fish.refill(&mut dice)?;
//!
//! assert_eq!(fish.inventory().revealed_count(), FISH_DICE_PER_REFILL);
//! # Ok::<(), fishcook_market::MarketError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cell;
pub mod dice;
pub mod error;
pub mod farmers;
pub mod fish;
pub mod grid;
pub mod market;

pub use cell::{Price, ResourceCell, Stocked};
pub use dice::{DieFace, DieRoller, RngDice, ScriptedDice, SecureDice, DIE_SIDES};
pub use error::{MarketError, MarketResult};
pub use farmers::{
    fill_column, Acceptance, AcceptanceRange, FarmersGrid, FarmersMarket, Produce, ProduceSlot,
    FARMERS_TABLE, PRODUCE_KINDS, PRODUCE_TIERS,
};
pub use fish::{
    allocate_tiers, FishGrid, FishMarket, TierFrequencies, FISH_DICE_PER_REFILL, FISH_PRICES,
    FISH_TIERS, FISH_TIER_CAPACITY, MAX_CORRECTION_ROLLS,
};
pub use grid::MarketGrid;
pub use market::{Market, MarketKind};
