//! Fill settlement: the receive-side fee application for both legs of a
//! match. A fill is symmetric - each side receives an amount of one asset
//! and each leg charges its own fee on the asset being received.

use crate::error::{ChainError, ChainResult};
use crate::logic::fee::{assess_market_fee, FeeBreakdown};
use crate::state::{AccountId, AssetAmount, Database};

/// A pairwise match reported by the order-matching pipeline.
#[derive(Debug, Clone, Copy)]
pub struct FillOrder {
    pub maker: AccountId,
    pub taker: AccountId,
    pub maker_receives: AssetAmount,
    pub taker_receives: AssetAmount,
    /// Settlement order of the two legs; the paying side's counterparty
    /// receives first.
    pub maker_pays_first: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOutcome {
    pub maker: FeeBreakdown,
    pub taker: FeeBreakdown,
}

impl Database {
    pub fn fill_order(&mut self, op: FillOrder) -> ChainResult<FillOutcome> {
        // validation
        self.account(op.maker)?;
        self.account(op.taker)?;
        self.asset(op.maker_receives.asset_id)?;
        self.asset(op.taker_receives.asset_id)?;
        if op.maker_receives.amount <= 0 || op.taker_receives.amount <= 0 {
            return Err(ChainError::InvalidAmount);
        }

        // apply; the second leg observes the first leg's statistics update
        let (maker, taker) = if op.maker_pays_first {
            let taker = assess_market_fee(self, op.taker, op.taker_receives, false)?;
            let maker = assess_market_fee(self, op.maker, op.maker_receives, true)?;
            (maker, taker)
        } else {
            let maker = assess_market_fee(self, op.maker, op.maker_receives, true)?;
            let taker = assess_market_fee(self, op.taker, op.taker_receives, false)?;
            (maker, taker)
        };

        Ok(FillOutcome { maker, taker })
    }
}
