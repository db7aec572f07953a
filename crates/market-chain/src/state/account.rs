//! Account schema. Only the fields the fee pipeline reads are modeled:
//! the referral link and the membership standing that gates fee sharing.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::state::AccountId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct AccountObject {
    pub id: AccountId,
    pub name: String,
    /// The account that registered this one; beneficiary of fee sharing.
    pub registrar: Option<AccountId>,
    /// Lifetime members' registrations qualify for market-fee sharing.
    pub lifetime_member: bool,
}
