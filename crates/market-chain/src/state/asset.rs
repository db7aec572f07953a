//! Asset schema: flags, fee configuration, and ingest validation.
//!
//! The fee table is validated once at create/update time and is immutable
//! until the next update, so fill-time lookups can assume well-formedness.

use std::collections::BTreeSet;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::{
    HARDFORK_DYNAMIC_FEE_TIME, HARDFORK_REWARD_SHARING_TIME, HARDFORK_STOCK_ASSET_TIME,
    MAX_MARKET_FEE_PERCENT, SCALE,
};
use crate::error::{ChainError, ChainResult};
use crate::state::{AccountId, AssetId, Percent, Share, TimePoint};

/// Asset flag bits.
pub mod asset_flags {
    /// Charge the classic static market fee on receive legs.
    pub const CHARGE_MARKET_FEE: u16 = 1 << 0;
    /// Charge the dynamic, volume-tiered market fee on receive legs.
    pub const CHARGE_DYNAMIC_MARKET_FEE: u16 = 1 << 1;

    /// All bits this subsystem recognizes.
    pub const ALLOWED_MASK: u16 = CHARGE_MARKET_FEE | CHARGE_DYNAMIC_MARKET_FEE;
}

/// One step of a fee schedule: `percent` applies from `amount` of rolling
/// volume up to the next tier's threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct FeeTier {
    pub amount: Share,
    pub percent: Percent,
}

/// Tiered maker/taker fee schedules for one asset.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct FeeTable {
    pub maker_fee: Vec<FeeTier>,
    pub taker_fee: Vec<FeeTier>,
}

impl FeeTable {
    /// Enforce the structural invariants of both schedules.
    pub fn validate(&self) -> ChainResult<()> {
        Self::validate_tiers(&self.maker_fee)?;
        Self::validate_tiers(&self.taker_fee)
    }

    fn validate_tiers(tiers: &[FeeTier]) -> ChainResult<()> {
        let first = tiers
            .first()
            .ok_or(ChainError::InvalidFeeTable("tier list is empty"))?;
        if first.amount != 0 {
            return Err(ChainError::InvalidFeeTable(
                "first tier must start at zero volume",
            ));
        }
        let mut prev = first.amount;
        for tier in &tiers[1..] {
            if tier.amount <= prev {
                return Err(ChainError::InvalidFeeTable(
                    "tier thresholds must be strictly increasing",
                ));
            }
            prev = tier.amount;
        }
        for tier in tiers {
            if tier.percent > SCALE {
                return Err(ChainError::InvalidFeeTable("tier percent above 100%"));
            }
        }
        Ok(())
    }

    /// Percent of the tier with the greatest threshold `<= volume`.
    ///
    /// Total for validated tables: tier zero is mandatory, so every
    /// non-negative volume lands in some tier.
    pub fn lookup(tiers: &[FeeTier], volume: Share) -> Percent {
        let volume = volume.max(0);
        let idx = tiers.partition_point(|tier| tier.amount <= volume);
        tiers[idx - 1].percent
    }

    pub fn maker_percent(&self, volume: Share) -> Percent {
        Self::lookup(&self.maker_fee, volume)
    }

    pub fn taker_percent(&self, volume: Share) -> Percent {
        Self::lookup(&self.taker_fee, volume)
    }
}

/// Optional asset configuration; the present/absent state of each field is
/// part of the validated schema.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AssetOptionsExtensions {
    /// Percent of each collected fee shared with the receiver's registrar.
    pub reward_percent: Option<Percent>,
    /// When present and non-empty, only listed registrars receive a share.
    pub whitelist_market_fee_sharing: Option<BTreeSet<AccountId>>,
    /// Dynamic fee schedules; present iff the dynamic flag is set.
    pub dynamic_fees: Option<FeeTable>,
    /// Assets whose accumulated fees are distributed to this asset's holders.
    pub revenue_assets: Option<BTreeSet<AssetId>>,
}

/// Per-asset configuration supplied at create/update time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct AssetOptions {
    pub max_supply: Share,
    pub flags: u16,
    /// Classic static rate, used when the dynamic flag is off.
    pub market_fee_percent: Percent,
    /// Upper bound on any single collected fee, in share units.
    pub max_market_fee: Share,
    pub extensions: AssetOptionsExtensions,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            max_supply: Share::MAX,
            flags: 0,
            market_fee_percent: 0,
            max_market_fee: Share::MAX,
            extensions: AssetOptionsExtensions::default(),
        }
    }
}

impl AssetOptions {
    /// Validate the options against the schema rules and the hardfork gates
    /// active at `now`. Re-evaluated on every create/update; never a one-shot
    /// migration.
    pub fn validate(&self, now: TimePoint) -> ChainResult<()> {
        if self.flags & !asset_flags::ALLOWED_MASK != 0 {
            return Err(ChainError::InvalidAssetOptions("unknown flag bits"));
        }
        if self.max_supply <= 0 {
            return Err(ChainError::InvalidAssetOptions("max supply must be positive"));
        }
        if self.market_fee_percent > MAX_MARKET_FEE_PERCENT {
            return Err(ChainError::InvalidAssetOptions("market fee percent above 100%"));
        }
        if self.max_market_fee < 0 {
            return Err(ChainError::InvalidAssetOptions(
                "max market fee must be non-negative",
            ));
        }

        let ext = &self.extensions;
        let dynamic_flag = self.flags & asset_flags::CHARGE_DYNAMIC_MARKET_FEE != 0;

        if now < HARDFORK_DYNAMIC_FEE_TIME && (dynamic_flag || ext.dynamic_fees.is_some()) {
            return Err(ChainError::HardforkNotYetActive);
        }
        if now < HARDFORK_REWARD_SHARING_TIME
            && (ext.reward_percent.is_some() || ext.whitelist_market_fee_sharing.is_some())
        {
            return Err(ChainError::HardforkNotYetActive);
        }
        if now < HARDFORK_STOCK_ASSET_TIME && ext.revenue_assets.is_some() {
            return Err(ChainError::HardforkNotYetActive);
        }

        if dynamic_flag != ext.dynamic_fees.is_some() {
            return Err(ChainError::FlagTableMismatch);
        }
        if let Some(table) = &ext.dynamic_fees {
            table.validate()?;
        }
        if let Some(reward) = ext.reward_percent {
            if reward > SCALE {
                return Err(ChainError::InvalidAssetOptions("reward percent above 100%"));
            }
        }
        Ok(())
    }
}

/// Mutable per-asset counters.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AssetDynamicData {
    pub current_supply: Share,
    /// Fees collected but not yet distributed.
    pub accumulated_fees: Share,
}

/// An asset registered on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct AssetObject {
    pub id: AssetId,
    pub symbol: String,
    pub issuer: AccountId,
    pub options: AssetOptions,
    pub dynamic: AssetDynamicData,
}

impl AssetObject {
    pub fn charges_market_fees(&self) -> bool {
        self.options.flags & asset_flags::CHARGE_MARKET_FEE != 0
    }

    pub fn charges_dynamic_market_fees(&self) -> bool {
        self.options.flags & asset_flags::CHARGE_DYNAMIC_MARKET_FEE != 0
    }

    pub fn fee_table(&self) -> Option<&FeeTable> {
        self.options.extensions.dynamic_fees.as_ref()
    }
}
