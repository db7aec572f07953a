//! Persisted object schemas and the chain database.
//!
//! Objects reference each other by id through ordered indexes; there are no
//! object pointers and no cyclic references.

pub mod account;
pub mod asset;
pub mod database;
pub mod statistics;

pub use account::AccountObject;
pub use asset::{
    asset_flags, AssetDynamicData, AssetObject, AssetOptions, AssetOptionsExtensions, FeeTable,
    FeeTier,
};
pub use database::Database;
pub use statistics::TradeStatistic;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A signed count of indivisible asset units.
pub type Share = i64;

/// Block time in seconds since epoch.
pub type TimePoint = u32;

/// A percentage in units of 0.01% (`10_000` = 100%).
pub type Percent = u16;

/// Stable asset identifier (monotonic instance number).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct AssetId(pub u64);

/// Stable account identifier (monotonic instance number).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct AccountId(pub u64);

/// An amount of a concrete asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AssetAmount {
    pub amount: Share,
    pub asset_id: AssetId,
}

impl AssetAmount {
    pub fn new(amount: Share, asset_id: AssetId) -> Self {
        Self { amount, asset_id }
    }
}
