//! # Market Chain - Dynamic Market-Fee Subsystem
//!
//! Chain-side machinery that prices, charges, and shares market fees when
//! matched limit orders fill. It provides:
//!
//! - Per-asset tiered maker/taker fee schedules keyed on rolling volume
//! - A sliding-window trade-statistics store decayed at maintenance ticks
//! - Hardfork-gated validation of asset fee configuration
//! - Referral reward sharing into vesting market-fee balances
//!
//! All arithmetic is integer with 128-bit widening; every full node computes
//! the same fee to the share. State lives in ordered indexes owned by
//! [`state::Database`] and is mutated only through validated operations.

pub mod constants;
pub mod error;
pub mod events;
pub mod logic;
pub mod operations;
pub mod state;
pub mod utils;

// Re-export commonly used items
pub use constants::*;
pub use error::{ChainError, ChainResult};
pub use events::ChainEvent;
pub use operations::{AssetCreateOperation, AssetUpdateOperation, FillOrder, FillOutcome};
pub use state::*;
