//! Maintenance tick: sliding-window statistics decay, revenue-asset fee
//! distribution, and reward vesting. The tick is an ordinary state
//! transition fired by the block clock; it runs to completion before any
//! subsequent operation in the block that crosses the boundary.

use tracing::debug;

use crate::events::ChainEvent;
use crate::state::{AccountId, AssetId, Database, Share, TimePoint};

impl Database {
    pub(crate) fn perform_maintenance(&mut self, now: TimePoint) {
        decay_trade_statistics(self, now);
        distribute_revenue_fees(self);
        vest_pending_rewards(self);
        self.push_event(ChainEvent::MaintenancePerformed { time: now });
        debug!(time = now, "maintenance performed");
    }
}

/// Decay every due statistic by one window step, in key order, then prune
/// records whose volume reached zero.
fn decay_trade_statistics(db: &mut Database, now: TimePoint) {
    let Database {
        statistics, events, ..
    } = db;

    for ((account, asset), stat) in statistics.iter_mut() {
        if !stat.decay_due(now) {
            continue;
        }
        let previous_volume = stat.total_volume;
        stat.apply_decay(now);
        events.push(ChainEvent::TradeStatisticsDecayed {
            account: *account,
            asset: *asset,
            previous_volume,
            new_volume: stat.total_volume,
        });
        debug!(
            account = account.0,
            asset = asset.0,
            previous_volume,
            new_volume = stat.total_volume,
            "trade statistic decayed"
        );
    }

    statistics.retain(|_, stat| stat.total_volume > 0);
}

/// For every asset carrying `revenue_assets`, carve the named assets'
/// accumulated fees out to the carrier's holders, pro rata by balance.
/// Integer-division dust stays accumulated.
fn distribute_revenue_fees(db: &mut Database) {
    let mut plans: Vec<(AssetId, AssetId)> = Vec::new();
    for (id, asset) in &db.assets {
        if let Some(revenue_assets) = &asset.options.extensions.revenue_assets {
            plans.extend(revenue_assets.iter().map(|revenue| (*id, *revenue)));
        }
    }

    for (stock_id, revenue_id) in plans {
        let pool = match db.assets.get(&revenue_id) {
            Some(asset) => asset.dynamic.accumulated_fees,
            None => continue,
        };
        if pool <= 0 {
            continue;
        }

        let holders: Vec<(AccountId, Share)> = db
            .balances
            .iter()
            .filter(|((_, asset), balance)| *asset == stock_id && **balance > 0)
            .map(|((account, _), balance)| (*account, *balance))
            .collect();
        let total_held: i128 = holders.iter().map(|(_, balance)| *balance as i128).sum();
        if total_held == 0 {
            continue;
        }

        let mut distributed: Share = 0;
        for (holder, balance) in holders {
            let share = (pool as i128 * balance as i128 / total_held) as Share;
            if share == 0 {
                continue;
            }
            db.accrue_pending_reward(holder, revenue_id, share);
            db.push_event(ChainEvent::RevenueDistributed {
                holder,
                asset: revenue_id,
                amount: share,
            });
            distributed += share;
        }

        if distributed > 0 {
            if let Some(asset) = db.assets.get_mut(&revenue_id) {
                asset.dynamic.accumulated_fees -= distributed;
            }
            debug!(
                stock = stock_id.0,
                revenue = revenue_id.0,
                distributed,
                "revenue fees distributed"
            );
        }
    }
}

/// Move every pending reward into its vesting balance.
fn vest_pending_rewards(db: &mut Database) {
    let pending = std::mem::take(&mut db.pending_rewards);
    for ((account, asset), amount) in pending {
        let vested = db.vested_rewards.entry((account, asset)).or_insert(0);
        *vested = vested.saturating_add(amount);
    }
}
