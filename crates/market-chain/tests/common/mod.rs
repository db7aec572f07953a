//! Shared database fixture for the market-fee test suites.

#![allow(dead_code)]

pub mod tracing;

use market_chain::{
    asset_flags, AccountId, AssetAmount, AssetCreateOperation, AssetId, AssetOptions,
    AssetOptionsExtensions, AssetUpdateOperation, Database, FeeTable, FeeTier, FillOrder,
    FillOutcome, Percent, Share, TimePoint, HARDFORK_DYNAMIC_FEE_TIME,
};

/// Chains in these suites start shortly before the dynamic-fee activation,
/// mirroring networks that configured assets under the classic rules first.
pub const GENESIS: TimePoint = HARDFORK_DYNAMIC_FEE_TIME - 100;

pub struct ChainFixture {
    pub db: Database,
}

impl ChainFixture {
    pub fn new() -> Self {
        Self::at(GENESIS)
    }

    pub fn at(genesis: TimePoint) -> Self {
        tracing::init_test_tracing();
        Self {
            db: Database::new(genesis),
        }
    }

    // ------------------------------------------------------------------ actors

    /// A self-registered lifetime member.
    pub fn actor(&mut self, name: &str) -> AccountId {
        self.db.register_account(name, None, true).unwrap()
    }

    /// A basic account registered under `registrar`.
    pub fn actor_with_registrar(&mut self, name: &str, registrar: AccountId) -> AccountId {
        self.db
            .register_account(name, Some(registrar), false)
            .unwrap()
    }

    // ------------------------------------------------------------------ assets

    pub fn default_options() -> AssetOptions {
        AssetOptions {
            max_supply: 100_000_000,
            flags: asset_flags::CHARGE_MARKET_FEE,
            market_fee_percent: 100, // 1%
            max_market_fee: Share::MAX,
            extensions: AssetOptionsExtensions::default(),
        }
    }

    pub fn create_asset_with(
        &mut self,
        symbol: &str,
        issuer: AccountId,
        options: AssetOptions,
    ) -> AssetId {
        self.db
            .create_asset(AssetCreateOperation {
                issuer,
                symbol: symbol.to_owned(),
                options,
            })
            .unwrap()
    }

    /// Classic user-issued asset charging a flat market fee.
    pub fn create_uia(
        &mut self,
        symbol: &str,
        issuer: AccountId,
        market_fee_percent: Percent,
    ) -> AssetId {
        self.create_asset_with(
            symbol,
            issuer,
            AssetOptions {
                market_fee_percent,
                ..Self::default_options()
            },
        )
    }

    /// Asset with no fee flags at all.
    pub fn create_plain_asset(&mut self, symbol: &str, issuer: AccountId) -> AssetId {
        self.create_asset_with(
            symbol,
            issuer,
            AssetOptions {
                flags: 0,
                market_fee_percent: 0,
                ..Self::default_options()
            },
        )
    }

    /// Dynamic-fee asset created directly (requires the hardfork active).
    pub fn create_dynamic_uia(
        &mut self,
        symbol: &str,
        issuer: AccountId,
        table: FeeTable,
    ) -> AssetId {
        self.create_asset_with(
            symbol,
            issuer,
            AssetOptions {
                flags: asset_flags::CHARGE_MARKET_FEE | asset_flags::CHARGE_DYNAMIC_MARKET_FEE,
                extensions: AssetOptionsExtensions {
                    dynamic_fees: Some(table),
                    ..Default::default()
                },
                ..Self::default_options()
            },
        )
    }

    /// Switch an existing asset to the dynamic path, keeping its other
    /// options.
    pub fn make_dynamic(&mut self, asset: AssetId, table: FeeTable) {
        let current = self.db.asset(asset).unwrap();
        let issuer = current.issuer;
        let mut new_options = current.options.clone();
        new_options.flags |= asset_flags::CHARGE_DYNAMIC_MARKET_FEE;
        new_options.extensions.dynamic_fees = Some(table);
        self.db
            .update_asset(AssetUpdateOperation {
                issuer,
                asset_to_update: asset,
                new_options,
            })
            .unwrap();
    }

    pub fn issue(&mut self, asset: AssetId, to: AccountId, amount: Share) {
        self.db.issue_asset(asset, to, amount).unwrap();
    }

    // ------------------------------------------------------------------ fills

    pub fn fill(
        &mut self,
        maker: AccountId,
        taker: AccountId,
        maker_receives: AssetAmount,
        taker_receives: AssetAmount,
    ) -> FillOutcome {
        self.db
            .fill_order(FillOrder {
                maker,
                taker,
                maker_receives,
                taker_receives,
                maker_pays_first: true,
            })
            .unwrap()
    }

    // ------------------------------------------------------------------ clock

    /// Advance to the activation time if the chain is still before it.
    pub fn activate(&mut self, hardfork: TimePoint) {
        if self.db.head_block_time() < hardfork {
            self.db.advance_to(hardfork);
        }
    }

    /// Run the next scheduled maintenance tick.
    pub fn wait_for_maintenance(&mut self) {
        let next = self.db.next_maintenance_time();
        self.db.advance_to(next);
    }
}

/// Build a fee table from `(threshold, percent)` pairs.
pub fn fee_table(maker: &[(Share, Percent)], taker: &[(Share, Percent)]) -> FeeTable {
    let tiers = |pairs: &[(Share, Percent)]| {
        pairs.iter()
            .map(|&(amount, percent)| FeeTier { amount, percent })
            .collect()
    };
    FeeTable {
        maker_fee: tiers(maker),
        taker_fee: tiers(taker),
    }
}

pub fn amount(value: Share, asset_id: AssetId) -> AssetAmount {
    AssetAmount::new(value, asset_id)
}
