use crate::asset::{AssetId, CurrencyOption};
use crate::constants::{CURRENCIES, ONE_ALGO, ROUNDS_PER_DAY};
use crate::error::StakeMarketError;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x     Duration helper functions    x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// ## Description
/// Converts a user-entered duration in days to the number of consensus
/// rounds it spans on-chain. Exact multiple of [`ROUNDS_PER_DAY`] for any
/// duration accepted by [`check_duration_days`].
pub fn duration_to_rounds(duration_days: u64) -> u64 {
    duration_days.saturating_mul(ROUNDS_PER_DAY)
}

/// Validates a raw duration input. Zero and negative values are rejected, as
/// are durations whose round conversion would not fit a `u64`, so that no
/// malformed duration propagates into a request object.
pub fn check_duration_days(duration_days: i64) -> Result<u64, StakeMarketError> {
    if duration_days <= 0 {
        return Err(StakeMarketError::InvalidDuration {
            days: duration_days,
        });
    }
    let days = duration_days as u64;
    if days.checked_mul(ROUNDS_PER_DAY).is_none() {
        return Err(StakeMarketError::InvalidDuration {
            days: duration_days,
        });
    }
    Ok(days)
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x     Currency helper functions    x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// Returns [`Ok`] if the asset is a selectable payment currency. Otherwise
/// returns [`StakeMarketError`].
pub fn check_currency(asset_id: AssetId) -> Result<(), StakeMarketError> {
    if CURRENCIES.iter().any(|(id, _)| *id == asset_id) {
        Ok(())
    } else {
        Err(StakeMarketError::UnsupportedCurrency { asset_id })
    }
}

/// Selectable currencies in presentation form.
pub fn currency_options() -> Vec<CurrencyOption> {
    CURRENCIES
        .iter()
        .map(|(value, display)| CurrencyOption {
            value: *value,
            display: display.to_string(),
        })
        .collect()
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x    Max stake helper functions    x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// ## Description
/// Suggested max stake for a connected account: the balance plus 10%
/// headroom, rounded up to a whole token. This is the single place that
/// encodes the suggestion policy; a balance refresh overwrites any manual
/// override with this value.
pub fn suggested_max_stake(balance: u64) -> u64 {
    let with_headroom = balance.saturating_add(balance / 10);
    let whole_tokens = with_headroom.saturating_add(ONE_ALGO - 1) / ONE_ALGO;
    whole_tokens.saturating_mul(ONE_ALGO)
}
