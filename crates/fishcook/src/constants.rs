//! # Table Constants
//!
//! Fixed rules of the game. Market tables live in `fishcook_market`.

/// Fewest players a session can start with.
pub const MIN_PLAYERS: usize = 2;

/// Seats at the table.
pub const MAX_PLAYERS: usize = 6;

/// Coins each player starts with.
pub const STARTING_MONEY: u32 = 100;

/// Default log directive for binaries when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
