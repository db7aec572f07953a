//! Rolling per-(account, asset) trade volume with sliding-window decay.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::{SLIDING_STATISTIC_WINDOW_DAYS, SLIDING_STATISTIC_WINDOW_SECONDS};
use crate::state::{AccountId, AssetId, Share, TimePoint};

/// Volume received by one account in one asset, decayed once per elapsed
/// window at maintenance ticks. `first_trade_date` doubles as the decay
/// epoch: it starts at record creation and advances to the tick time on
/// every decay step, so no derived counters need to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TradeStatistic {
    pub account_id: AccountId,
    pub asset_id: AssetId,
    pub total_volume: Share,
    pub first_trade_date: TimePoint,
}

impl TradeStatistic {
    pub fn new(account_id: AccountId, asset_id: AssetId, volume: Share, now: TimePoint) -> Self {
        Self {
            account_id,
            asset_id,
            total_volume: volume,
            first_trade_date: now,
        }
    }

    /// Add gross received volume.
    pub fn record_volume(&mut self, amount: Share) {
        self.total_volume = self.total_volume.saturating_add(amount);
    }

    /// Whether a full window has elapsed since the decay epoch.
    pub fn decay_due(&self, now: TimePoint) -> bool {
        now.saturating_sub(self.first_trade_date) >= SLIDING_STATISTIC_WINDOW_SECONDS
    }

    /// Apply one sliding-window decay step and advance the epoch to `now`.
    /// Removes `ceil(total_volume / window_days)`; returns the amount removed.
    pub fn apply_decay(&mut self, now: TimePoint) -> Share {
        let window = SLIDING_STATISTIC_WINDOW_DAYS as Share;
        let step = self.total_volume / window + (self.total_volume % window != 0) as Share;
        self.total_volume -= step;
        self.first_trade_date = now;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const T0: TimePoint = 1_600_000_000;

    fn stat(volume: Share) -> TradeStatistic {
        TradeStatistic::new(AccountId(7), AssetId(1), volume, T0)
    }

    #[test]
    fn test_not_due_within_window() {
        let s = stat(20);
        assert!(!s.decay_due(T0));
        assert!(!s.decay_due(T0 + SLIDING_STATISTIC_WINDOW_SECONDS - 1));
        assert!(s.decay_due(T0 + SLIDING_STATISTIC_WINDOW_SECONDS));
    }

    #[test]
    fn test_decay_series_small_volume() {
        let mut s = stat(20);
        let tick1 = T0 + 31 * SECONDS_PER_DAY;
        assert_eq!(s.apply_decay(tick1), 1);
        assert_eq!(s.total_volume, 19);
        assert_eq!(s.first_trade_date, tick1);

        let tick2 = tick1 + 31 * SECONDS_PER_DAY;
        assert_eq!(s.apply_decay(tick2), 1);
        assert_eq!(s.total_volume, 18);
    }

    #[test]
    fn test_decay_series_larger_volume() {
        let mut s = stat(60);
        s.apply_decay(T0 + 31 * SECONDS_PER_DAY);
        assert_eq!(s.total_volume, 58);
        s.apply_decay(T0 + 62 * SECONDS_PER_DAY);
        assert_eq!(s.total_volume, 56);
    }

    #[test]
    fn test_decay_reaches_zero() {
        let mut s = stat(1);
        s.apply_decay(T0 + 31 * SECONDS_PER_DAY);
        assert_eq!(s.total_volume, 0);
        // a drained record loses nothing further
        assert_eq!(s.apply_decay(T0 + 62 * SECONDS_PER_DAY), 0);
        assert_eq!(s.total_volume, 0);
    }

    #[test]
    fn test_record_volume_saturates() {
        let mut s = stat(Share::MAX - 5);
        s.record_volume(100);
        assert_eq!(s.total_volume, Share::MAX);
    }
}
