//! Operations consumed from the surrounding transaction layer.
//!
//! Every operation validates completely before its first state write, so a
//! rejected operation leaves the database byte-identical.

pub mod asset_create;
pub mod asset_update;
pub mod fill_order;
pub mod maintenance;

pub use asset_create::AssetCreateOperation;
pub use asset_update::AssetUpdateOperation;
pub use fill_order::{FillOrder, FillOutcome};

use crate::error::{ChainError, ChainResult};
use crate::state::{AssetId, AssetOptions, Database};

/// Revenue assets must name existing assets other than the carrier itself.
pub(crate) fn validate_revenue_assets(
    db: &Database,
    updating: Option<AssetId>,
    options: &AssetOptions,
) -> ChainResult<()> {
    let Some(revenue_assets) = &options.extensions.revenue_assets else {
        return Ok(());
    };
    for id in revenue_assets {
        if Some(*id) == updating {
            return Err(ChainError::InvalidAssetOptions(
                "asset cannot be its own revenue asset",
            ));
        }
        db.asset(*id)?;
    }
    Ok(())
}
