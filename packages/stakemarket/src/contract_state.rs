use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a deployed application (contract instance).
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
pub struct AppId(pub u64);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global state snapshot of a validator ad, as read by the contract-read
/// collaborator. This layer treats the terms as opaque display data; only
/// `app_id` carries meaning here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ValidatorAdGlobalState {
    pub app_id: AppId,
    /// Address of the node operator that published the ad.
    pub owner: String,
    pub total_algo_earned: u64,
    /// Number of delegator contracts currently created under this ad.
    pub cnt_del: u64,
    pub state: u8,
}

/// Global state snapshot of one depositor's delegator contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DelegatorContractGlobalState {
    pub app_id: AppId,
    /// Account whose stake the contract manages.
    pub del_beneficiary: String,
    /// The validator ad this contract was created under.
    pub validator_ad: AppId,
    pub round_start: u64,
    pub round_end: u64,
    pub state: u8,
}

impl DelegatorContractGlobalState {
    /// Rounds left until the contract expires, zero once past `round_end`.
    pub fn rounds_remaining(&self, current_round: u64) -> u64 {
        self.round_end.saturating_sub(current_round)
    }
}
