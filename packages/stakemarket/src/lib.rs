pub mod account;
pub mod asset;
pub mod constants;
pub mod contract_state;
pub mod error;
pub mod helper;
pub mod stake_reqs;

pub use stake_reqs::StakeReqs;
