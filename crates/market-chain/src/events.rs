//! Events emitted by state transitions. The database accumulates them in
//! application order; callers drain with [`crate::state::Database::take_events`].

use serde::{Deserialize, Serialize};

use crate::state::{AccountId, AssetId, Share, TimePoint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEvent {
    /// One receive leg of a fill settled.
    OrderFilled {
        account: AccountId,
        asset: AssetId,
        gross: Share,
        fee: Share,
        is_maker: bool,
    },

    /// Part of a collected fee was shared with the receiver's registrar.
    MarketFeeShared {
        registrar: AccountId,
        asset: AssetId,
        reward: Share,
    },

    /// A trade statistic lost one sliding-window step of volume.
    TradeStatisticsDecayed {
        account: AccountId,
        asset: AssetId,
        previous_volume: Share,
        new_volume: Share,
    },

    /// Accumulated fees of a revenue asset were carved out to a holder.
    RevenueDistributed {
        holder: AccountId,
        asset: AssetId,
        amount: Share,
    },

    /// A maintenance tick ran to completion.
    MaintenancePerformed { time: TimePoint },
}
