//! # Percent Arithmetic
//!
//! Widened integer arithmetic for fee computation. All products go through
//! an i128 intermediate so that `value * percent` cannot overflow for any
//! `value` in `[0, 2^63)` and `percent <= SCALE`.

use crate::constants::SCALE;
use crate::state::{Percent, Share};

/// Compute `value * percent / SCALE`, truncating toward zero.
///
/// Call sites only pass non-negative values; negative input propagates its
/// sign through truncated division rather than asserting.
pub fn calculate_percent(value: Share, percent: Percent) -> Share {
    debug_assert!(percent <= SCALE);
    let wide = value as i128 * percent as i128 / SCALE as i128;
    // |wide| <= |value| whenever percent <= SCALE, so the narrowing is exact
    wide as Share
}
