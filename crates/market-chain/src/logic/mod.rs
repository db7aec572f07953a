//! Fee assessment and reward sharing, invoked from the operation layer.

pub mod fee;
pub mod reward;

pub use fee::FeeBreakdown;
