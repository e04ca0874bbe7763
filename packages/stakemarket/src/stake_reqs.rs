use crate::asset::AssetId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ## Description
/// Canonical staking requirement passed to the ad matching step. All three
/// fields are set together; the value is never mutated after construction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct StakeReqs {
    /// Requested staking duration in consensus rounds.
    pub duration: u64,
    /// Upper bound on the stake amount, in micro units.
    pub max_stake: u64,
    /// Asset the depositor pays the operator in.
    pub currency: AssetId,
}

impl StakeReqs {
    pub fn new(duration: u64, max_stake: u64, currency: AssetId) -> Self {
        StakeReqs {
            duration,
            max_stake,
            currency,
        }
    }
}
