//! # Reward Splitter
//!
//! Shares a configured percent of each collected fee with the receiving
//! account's registrar. Rewards accrue to a pending balance and move to the
//! vesting balance at the next maintenance tick.

use tracing::debug;

use crate::error::ChainResult;
use crate::events::ChainEvent;
use crate::state::{AccountId, AssetId, Database, Share};
use crate::utils::calculate_percent;

/// Carve the registrar's share out of `fee`. Returns the reward amount
/// (zero when the asset does not share, the receiver has no registrar, the
/// registrar lacks membership, or the sharing whitelist excludes it).
pub(crate) fn share_market_fee(
    db: &mut Database,
    receiver: AccountId,
    asset_id: AssetId,
    fee: Share,
) -> ChainResult<Share> {
    if fee <= 0 {
        return Ok(0);
    }

    let reward_percent = {
        let asset = db.asset(asset_id)?;
        asset.options.extensions.reward_percent.unwrap_or(0)
    };
    if reward_percent == 0 {
        return Ok(0);
    }

    let registrar = match db.account(receiver)?.registrar {
        Some(registrar) => registrar,
        None => return Ok(0),
    };
    if !db.account(registrar)?.lifetime_member {
        return Ok(0);
    }
    if let Some(whitelist) = &db.asset(asset_id)?.options.extensions.whitelist_market_fee_sharing {
        if !whitelist.is_empty() && !whitelist.contains(&registrar) {
            return Ok(0);
        }
    }

    let reward = calculate_percent(fee, reward_percent);
    if reward > 0 {
        db.accrue_pending_reward(registrar, asset_id, reward);
        db.push_event(ChainEvent::MarketFeeShared {
            registrar,
            asset: asset_id,
            reward,
        });
        debug!(
            registrar = registrar.0,
            asset = asset_id.0,
            fee,
            reward,
            "market fee shared"
        );
    }
    Ok(reward)
}
