use crate::error::SessionError;
use stakemarket::account::User;
use stakemarket::asset::AssetId;
use stakemarket::constants::{DEFAULT_MAX_STAKE, PAYMENT_ASA, SUGGESTED_DURATION_DAYS};
use stakemarket::helper::{check_currency, check_duration_days, duration_to_rounds, suggested_max_stake};
use stakemarket::stake_reqs::StakeReqs;

type Consumer = Box<dyn Fn(&StakeReqs)>;

/// ## Description
/// Derives the canonical [`StakeReqs`] from the user-facing requirement
/// inputs: duration in days, payment currency and the max-stake bound. Every
/// accepted input change re-derives and emits synchronously to the consumer;
/// emissions may be redundant and are never debounced. Invalid inputs are
/// rejected before they land in the form state, so the consumer only ever
/// sees fully valid values.
pub struct StakeRequirementForm {
    duration_days: u64,
    max_stake: u64,
    currency: AssetId,
    on_change: Consumer,
}

impl StakeRequirementForm {
    /// Creates the form preloaded with the platform defaults and emits the
    /// first derivation immediately, so the consumer never observes a
    /// partial request.
    pub fn new(on_change: impl Fn(&StakeReqs) + 'static) -> Self {
        let form = StakeRequirementForm {
            duration_days: SUGGESTED_DURATION_DAYS,
            max_stake: DEFAULT_MAX_STAKE,
            currency: PAYMENT_ASA,
            on_change: Box::new(on_change),
        };
        form.emit();
        form
    }

    pub fn duration_days(&self) -> u64 {
        self.duration_days
    }

    pub fn max_stake(&self) -> u64 {
        self.max_stake
    }

    pub fn currency(&self) -> AssetId {
        self.currency
    }

    /// Accepts a raw duration input. Zero and negative values are rejected
    /// and nothing is emitted.
    pub fn set_duration_days(&mut self, duration_days: i64) -> Result<(), SessionError> {
        self.duration_days = check_duration_days(duration_days)?;
        self.emit();
        Ok(())
    }

    pub fn set_currency(&mut self, currency: AssetId) -> Result<(), SessionError> {
        check_currency(currency)?;
        self.currency = currency;
        self.emit();
        Ok(())
    }

    /// Manual max-stake override. Note that the next balance refresh via
    /// [`Self::sync_user`] overwrites it with the suggested value again.
    pub fn set_max_stake(&mut self, max_stake: u64) {
        self.max_stake = max_stake;
        self.emit();
    }

    /// Balance-change hook, wired to the user store. With an account loaded
    /// the max stake is recomputed from its balance; without one it falls
    /// back to the configured default.
    pub fn sync_user(&mut self, user: Option<&User>) {
        self.max_stake = match user {
            Some(user) => suggested_max_stake(user.account.algo),
            None => DEFAULT_MAX_STAKE,
        };
        self.emit();
    }

    fn emit(&self) {
        let reqs = StakeReqs::new(
            duration_to_rounds(self.duration_days),
            self.max_stake,
            self.currency,
        );
        (self.on_change)(&reqs);
    }
}
