//! Asset options update. The hardfork predicates re-run on every update, so
//! configuration that was invalid at create time stays invalid until the
//! respective activation, and a dynamic asset may be returned to the classic
//! path by clearing flag and table together.

use crate::error::{ChainError, ChainResult};
use crate::operations::validate_revenue_assets;
use crate::state::{AccountId, AssetId, AssetOptions, Database};

#[derive(Debug, Clone)]
pub struct AssetUpdateOperation {
    pub issuer: AccountId,
    pub asset_to_update: AssetId,
    pub new_options: AssetOptions,
}

impl Database {
    pub fn update_asset(&mut self, op: AssetUpdateOperation) -> ChainResult<()> {
        // validation
        let asset = self.asset(op.asset_to_update)?;
        if asset.issuer != op.issuer {
            return Err(ChainError::Unauthorized);
        }
        if op.new_options.max_supply < asset.dynamic.current_supply {
            return Err(ChainError::InvalidAssetOptions(
                "max supply below current supply",
            ));
        }
        op.new_options.validate(self.head_block_time())?;
        validate_revenue_assets(self, Some(op.asset_to_update), &op.new_options)?;

        // apply
        self.asset_mut(op.asset_to_update)?.options = op.new_options;
        Ok(())
    }
}
