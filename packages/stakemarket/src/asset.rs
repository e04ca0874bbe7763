use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a standard asset on the network. Id `0` is reserved for the
/// network token itself.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
pub struct AssetId(pub u64);

impl AssetId {
    /// The network token (not an ASA, but addressable through the same id space).
    pub const ALGO: AssetId = AssetId(0);

    pub fn is_algo(&self) -> bool {
        *self == AssetId::ALGO
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_algo() {
            write!(f, "ALGO")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One selectable payment currency, as presented in the requirement form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CurrencyOption {
    pub value: AssetId,
    pub display: String,
}
