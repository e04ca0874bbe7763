use stakemarket::error::StakeMarketError;
use thiserror::Error;

/// Errors surfaced by the session layer. Misusing a drawer context outside
/// an active session is a programming error and panics instead of appearing
/// here; a stale fetch result is a silent drop, not an error.
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("{0}")]
    StakeMarket(#[from] StakeMarketError),
}
