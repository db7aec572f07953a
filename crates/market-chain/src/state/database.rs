//! The chain database: ordered object indexes, the block clock, and the
//! query surface exposed to the surrounding transaction layer.
//!
//! All state is uniquely owned here. Mutation happens on the block
//! application thread only, in operation order; iteration during maintenance
//! is over ordered maps and therefore deterministic.

use std::collections::BTreeMap;

use crate::constants::MAINTENANCE_INTERVAL;
use crate::error::{ChainError, ChainResult};
use crate::events::ChainEvent;
use crate::state::{
    AccountId, AccountObject, AssetId, AssetObject, Percent, Share, TimePoint, TradeStatistic,
};

pub struct Database {
    pub(crate) head_block_time: TimePoint,
    pub(crate) next_maintenance_time: TimePoint,
    next_account_id: u64,
    next_asset_id: u64,
    pub(crate) accounts: BTreeMap<AccountId, AccountObject>,
    pub(crate) assets: BTreeMap<AssetId, AssetObject>,
    pub(crate) balances: BTreeMap<(AccountId, AssetId), Share>,
    pub(crate) statistics: BTreeMap<(AccountId, AssetId), TradeStatistic>,
    /// Rewards accrued since the last maintenance tick.
    pub(crate) pending_rewards: BTreeMap<(AccountId, AssetId), Share>,
    /// Rewards moved into the vesting balance at maintenance ticks.
    pub(crate) vested_rewards: BTreeMap<(AccountId, AssetId), Share>,
    pub(crate) events: Vec<ChainEvent>,
}

impl Database {
    pub fn new(genesis_time: TimePoint) -> Self {
        Self {
            head_block_time: genesis_time,
            next_maintenance_time: next_boundary(genesis_time),
            next_account_id: 0,
            next_asset_id: 0,
            accounts: BTreeMap::new(),
            assets: BTreeMap::new(),
            balances: BTreeMap::new(),
            statistics: BTreeMap::new(),
            pending_rewards: BTreeMap::new(),
            vested_rewards: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Block clock
    // ========================================================================

    pub fn head_block_time(&self) -> TimePoint {
        self.head_block_time
    }

    pub fn next_maintenance_time(&self) -> TimePoint {
        self.next_maintenance_time
    }

    /// Advance head block time. Crossing `next_maintenance_time` fires the
    /// maintenance transition once, at the new head time; skipped boundaries
    /// coalesce into that single tick, after which the schedule realigns to
    /// the next interval boundary past `time`.
    pub fn advance_to(&mut self, time: TimePoint) {
        assert!(
            time >= self.head_block_time,
            "block time must not move backwards"
        );
        self.head_block_time = time;
        if time >= self.next_maintenance_time {
            self.perform_maintenance(time);
            self.next_maintenance_time = next_boundary(time);
        }
    }

    pub fn advance_days(&mut self, days: u32) {
        self.advance_to(self.head_block_time + days * crate::constants::SECONDS_PER_DAY);
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    pub fn register_account(
        &mut self,
        name: &str,
        registrar: Option<AccountId>,
        lifetime_member: bool,
    ) -> ChainResult<AccountId> {
        if let Some(registrar) = registrar {
            self.account(registrar)?;
        }
        let id = AccountId(self.next_account_id);
        self.next_account_id += 1;
        self.accounts.insert(
            id,
            AccountObject {
                id,
                name: name.to_owned(),
                registrar,
                lifetime_member,
            },
        );
        Ok(id)
    }

    pub fn account(&self, id: AccountId) -> ChainResult<&AccountObject> {
        self.accounts.get(&id).ok_or(ChainError::UnknownAccount)
    }

    // ========================================================================
    // Assets
    // ========================================================================

    pub fn asset(&self, id: AssetId) -> ChainResult<&AssetObject> {
        self.assets.get(&id).ok_or(ChainError::UnknownAsset)
    }

    pub(crate) fn asset_mut(&mut self, id: AssetId) -> ChainResult<&mut AssetObject> {
        self.assets.get_mut(&id).ok_or(ChainError::UnknownAsset)
    }

    pub(crate) fn allocate_asset_id(&mut self) -> AssetId {
        let id = AssetId(self.next_asset_id);
        self.next_asset_id += 1;
        id
    }

    /// Credit newly issued supply to an account, bounded by max supply.
    pub fn issue_asset(&mut self, id: AssetId, to: AccountId, amount: Share) -> ChainResult<()> {
        if amount <= 0 {
            return Err(ChainError::InvalidAmount);
        }
        self.account(to)?;
        let asset = self.asset(id)?;
        let new_supply = asset
            .dynamic
            .current_supply
            .checked_add(amount)
            .ok_or(ChainError::SupplyExceeded)?;
        if new_supply > asset.options.max_supply {
            return Err(ChainError::SupplyExceeded);
        }
        self.asset_mut(id)?.dynamic.current_supply = new_supply;
        self.credit_balance(to, id, amount);
        Ok(())
    }

    pub fn accumulated_fees(&self, id: AssetId) -> ChainResult<Share> {
        Ok(self.asset(id)?.dynamic.accumulated_fees)
    }

    // ========================================================================
    // Balances
    // ========================================================================

    pub fn balance(&self, account: AccountId, asset: AssetId) -> Share {
        self.balances.get(&(account, asset)).copied().unwrap_or(0)
    }

    pub(crate) fn credit_balance(&mut self, account: AccountId, asset: AssetId, amount: Share) {
        let balance = self.balances.entry((account, asset)).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    // ========================================================================
    // Trade statistics
    // ========================================================================

    pub fn trade_statistics(&self, account: AccountId, asset: AssetId) -> Option<&TradeStatistic> {
        self.statistics.get(&(account, asset))
    }

    /// Record gross received volume, creating the statistic on first trade.
    pub(crate) fn adjust_trade_statistics(
        &mut self,
        account: AccountId,
        asset: AssetId,
        received: Share,
    ) {
        let now = self.head_block_time;
        self.statistics
            .entry((account, asset))
            .and_modify(|stat| stat.record_volume(received))
            .or_insert_with(|| TradeStatistic::new(account, asset, received, now));
    }

    // ========================================================================
    // Market-fee rewards
    // ========================================================================

    /// Reward accrued since the last maintenance tick, not yet vesting.
    pub fn pending_market_fee_reward(&self, account: AccountId, asset: AssetId) -> Share {
        self.pending_rewards
            .get(&(account, asset))
            .copied()
            .unwrap_or(0)
    }

    /// Reward already moved into the vesting balance.
    pub fn market_fee_reward(&self, account: AccountId, asset: AssetId) -> Share {
        self.vested_rewards
            .get(&(account, asset))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn accrue_pending_reward(
        &mut self,
        account: AccountId,
        asset: AssetId,
        amount: Share,
    ) {
        let pending = self.pending_rewards.entry((account, asset)).or_insert(0);
        *pending = pending.saturating_add(amount);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The `(maker, taker)` percents that would apply to the next fill in
    /// which `account` receives `asset`.
    pub fn get_dynamic_market_fee_percent(
        &self,
        account: AccountId,
        asset_id: AssetId,
    ) -> ChainResult<(Percent, Percent)> {
        let asset = self.asset(asset_id)?;
        if asset.charges_dynamic_market_fees() {
            // present for every validated dynamic asset
            let table = asset.fee_table().ok_or(ChainError::FlagTableMismatch)?;
            let volume = self
                .trade_statistics(account, asset_id)
                .map_or(0, |stat| stat.total_volume);
            Ok((table.maker_percent(volume), table.taker_percent(volume)))
        } else if asset.charges_market_fees() {
            let percent = asset.options.market_fee_percent;
            Ok((percent, percent))
        } else {
            Ok((0, 0))
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub(crate) fn push_event(&mut self, event: ChainEvent) {
        self.events.push(event);
    }

    /// Drain events accumulated since the previous call.
    pub fn take_events(&mut self) -> Vec<ChainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// First maintenance boundary strictly after `time`.
fn next_boundary(time: TimePoint) -> TimePoint {
    time - time % MAINTENANCE_INTERVAL + MAINTENANCE_INTERVAL
}
