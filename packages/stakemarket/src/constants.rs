use crate::asset::AssetId;

/// Number of micro units in one whole network token (6 decimals).
pub const ONE_ALGO: u64 = 1_000_000;

/// Assumed consensus round duration used for day-to-round conversion.
pub const ROUND_DURATION_MS: u64 = 2_880;

pub const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Exact number of rounds in a day under [`ROUND_DURATION_MS`].
pub const ROUNDS_PER_DAY: u64 = MS_PER_DAY / ROUND_DURATION_MS;

/// Default duration preloaded into the requirement form, in days.
pub const SUGGESTED_DURATION_DAYS: u64 = 30;

/// Max-stake floor used while no account is connected.
pub const DEFAULT_MAX_STAKE: u64 = 100_000 * ONE_ALGO;

/// Default payment currency of the platform.
pub const PAYMENT_ASA: AssetId = AssetId::ALGO;

pub const USDC_ASA: AssetId = AssetId(31_566_704);

/// Currencies selectable as payment in the requirement form.
pub const CURRENCIES: [(AssetId, &str); 2] = [(PAYMENT_ASA, "ALGO"), (USDC_ASA, "USDC")];
