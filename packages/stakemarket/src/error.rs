use crate::asset::AssetId;
use thiserror::Error;

/// ## Description
/// This enum describes errors raised at the input boundary of the client
/// state layer. Malformed values are rejected here so that no partially
/// valid request object ever reaches a downstream consumer.
#[derive(Error, Debug, PartialEq)]
pub enum StakeMarketError {
    #[error("Duration of {days} days is outside the supported range")]
    InvalidDuration { days: i64 },

    #[error("Asset {asset_id} is not a supported payment currency")]
    UnsupportedCurrency { asset_id: AssetId },
}
