//! # Market-Fee Engine
//!
//! Per-leg fee assessment for matched fills. Each leg independently charges
//! a fee on the asset being received: the dynamic tier rate when the asset
//! opts in, the classic static rate otherwise, nothing when neither flag is
//! set. Statistics are updated only for dynamic-fee assets, with the gross
//! (pre-fee) amount.

use tracing::debug;

use crate::error::ChainResult;
use crate::events::ChainEvent;
use crate::logic::reward;
use crate::state::{AccountId, AssetAmount, AssetObject, Database, Percent, Share};
use crate::utils::calculate_percent;

/// Result of charging one receive leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    /// Amount received before fees.
    pub gross: Share,
    /// Fee retained by the asset, capped at its max market fee.
    pub fee: Share,
    /// Portion of the fee shared with the receiver's registrar.
    pub reward: Share,
    /// Amount credited to the receiver.
    pub net: Share,
}

/// Rate applied to the next receive of `asset` by `account`.
fn applicable_percent(
    db: &Database,
    asset: &AssetObject,
    account: AccountId,
    is_maker: bool,
) -> Percent {
    if asset.charges_dynamic_market_fees() {
        let volume = db
            .trade_statistics(account, asset.id)
            .map_or(0, |stat| stat.total_volume);
        match asset.fee_table() {
            Some(table) if is_maker => table.maker_percent(volume),
            Some(table) => table.taker_percent(volume),
            // unreachable for validated assets
            None => 0,
        }
    } else if asset.charges_market_fees() {
        asset.options.market_fee_percent
    } else {
        0
    }
}

/// Charge the market fee on one receive leg and settle its effects: the
/// receiver's balance, the asset's accumulated fees, the registrar reward,
/// and the rolling trade statistic.
pub(crate) fn assess_market_fee(
    db: &mut Database,
    receiver: AccountId,
    amount: AssetAmount,
    is_maker: bool,
) -> ChainResult<FeeBreakdown> {
    let asset_id = amount.asset_id;
    let (percent, max_fee, dynamic) = {
        let asset = db.asset(asset_id)?;
        (
            applicable_percent(db, asset, receiver, is_maker),
            asset.options.max_market_fee,
            asset.charges_dynamic_market_fees(),
        )
    };

    let gross = amount.amount;
    let fee = calculate_percent(gross, percent).min(max_fee).max(0);
    let reward = reward::share_market_fee(db, receiver, asset_id, fee)?;

    let asset = db.asset_mut(asset_id)?;
    asset.dynamic.accumulated_fees = asset.dynamic.accumulated_fees.saturating_add(fee - reward);
    db.credit_balance(receiver, asset_id, gross - fee);
    if dynamic {
        db.adjust_trade_statistics(receiver, asset_id, gross);
    }

    db.push_event(ChainEvent::OrderFilled {
        account: receiver,
        asset: asset_id,
        gross,
        fee,
        is_maker,
    });
    debug!(
        account = receiver.0,
        asset = asset_id.0,
        gross,
        fee,
        reward,
        is_maker,
        "market fee assessed"
    );

    Ok(FeeBreakdown {
        gross,
        fee,
        reward,
        net: gross - fee,
    })
}
