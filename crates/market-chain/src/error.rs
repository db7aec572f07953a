//! # Chain Error Types
//!
//! Every failure aborts the enclosing operation atomically; no error is
//! recovered inside the fee engine itself.

use thiserror::Error;

/// Errors raised by market-fee operations and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("operation not permitted before hardfork activation")]
    HardforkNotYetActive,

    #[error("invalid fee table: {0}")]
    InvalidFeeTable(&'static str),

    #[error("dynamic market-fee flag and fee table must be set together")]
    FlagTableMismatch,

    #[error("invalid asset options: {0}")]
    InvalidAssetOptions(&'static str),

    #[error("unknown asset")]
    UnknownAsset,

    #[error("unknown account")]
    UnknownAccount,

    #[error("operation issuer does not control the asset")]
    Unauthorized,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("asset symbol already registered")]
    DuplicateSymbol,

    #[error("issue would exceed max supply")]
    SupplyExceeded,

    #[error("fee computation overflow")]
    FeeOverflow,
}

/// Result type using chain errors.
pub type ChainResult<T> = Result<T, ChainError>;
