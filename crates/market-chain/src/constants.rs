//! # Chain Constants
//!
//! Chain-wide constants for the market-fee subsystem: percent scaling,
//! sliding-window parameters, maintenance cadence, and hardfork activation
//! times. These are consensus values - every node must agree on them.

use crate::state::TimePoint;

// ============================================================================
// Percent Scaling
// ============================================================================

/// Percent denominator: 10_000 = 100%.
pub const SCALE: u16 = 10_000;

/// One percent in [`SCALE`] units.
pub const ONE_PERCENT: u16 = 100;

/// Upper bound for any configured market-fee percent.
pub const MAX_MARKET_FEE_PERCENT: u16 = SCALE;

// ============================================================================
// Time and Maintenance
// ============================================================================

/// Seconds per day of block time.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Interval between maintenance ticks, in seconds.
pub const MAINTENANCE_INTERVAL: u32 = SECONDS_PER_DAY;

/// Days in the rolling trade-statistics window.
pub const SLIDING_STATISTIC_WINDOW_DAYS: u32 = 30;

/// The statistics window expressed in seconds of block time.
pub const SLIDING_STATISTIC_WINDOW_SECONDS: u32 =
    SLIDING_STATISTIC_WINDOW_DAYS * SECONDS_PER_DAY;

// ============================================================================
// Hardfork Activation Times
// ============================================================================

/// Referral market-fee sharing configuration becomes valid (2020-10-01).
pub const HARDFORK_REWARD_SHARING_TIME: TimePoint = 1_601_510_400;

/// Dynamic market fees become valid (2021-03-01).
pub const HARDFORK_DYNAMIC_FEE_TIME: TimePoint = 1_614_556_800;

/// Revenue-asset configuration becomes valid (2021-06-01).
pub const HARDFORK_STOCK_ASSET_TIME: TimePoint = 1_622_505_600;
