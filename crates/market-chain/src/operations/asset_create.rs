//! Asset creation, including the hardfork-gated fee configuration checks.

use crate::error::{ChainError, ChainResult};
use crate::operations::validate_revenue_assets;
use crate::state::{AccountId, AssetDynamicData, AssetId, AssetObject, AssetOptions, Database};

#[derive(Debug, Clone)]
pub struct AssetCreateOperation {
    pub issuer: AccountId,
    pub symbol: String,
    pub options: AssetOptions,
}

impl Database {
    pub fn create_asset(&mut self, op: AssetCreateOperation) -> ChainResult<AssetId> {
        // validation
        self.account(op.issuer)?;
        if op.symbol.is_empty() {
            return Err(ChainError::InvalidAssetOptions("symbol must not be empty"));
        }
        if self.assets.values().any(|asset| asset.symbol == op.symbol) {
            return Err(ChainError::DuplicateSymbol);
        }
        op.options.validate(self.head_block_time())?;
        validate_revenue_assets(self, None, &op.options)?;

        // apply
        let id = self.allocate_asset_id();
        self.assets.insert(
            id,
            AssetObject {
                id,
                symbol: op.symbol,
                issuer: op.issuer,
                options: op.options,
                dynamic: AssetDynamicData::default(),
            },
        );
        Ok(id)
    }
}
