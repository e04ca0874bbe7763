use crate::asset::AssetId;
use crate::contract_state::{AppId, DelegatorContractGlobalState, ValidatorAdGlobalState};
use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x    {{AccountInfo}} struct Type   x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// Participation key registration parameters of an online account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct KeyRegParams {
    pub vote_key: String,
    pub selection_key: String,
    pub state_proof_key: String,
    pub vote_first: u64,
    pub vote_last: u64,
    pub vote_key_dilution: u64,
}

/// ## Description
/// Immutable snapshot of one on-chain account's holdings. A refresh replaces
/// the whole snapshot; nothing patches it field by field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AccountInfo {
    pub address: String,
    /// Network token balance in micro units.
    pub algo: u64,
    /// Held standard assets, keyed by asset id.
    pub assets: BTreeMap<AssetId, u64>,
    pub key_reg_params: Option<KeyRegParams>,
    pub tracked_performance: bool,
}

impl AccountInfo {
    /// Returns the held amount of `asset`. The network token falls through
    /// to the `algo` balance rather than the asset map.
    pub fn asset_amount(&self, asset: AssetId) -> u64 {
        if asset.is_algo() {
            self.algo
        } else {
            self.assets.get(&asset).copied().unwrap_or_default()
        }
    }

    pub fn holds_asset(&self, asset: AssetId) -> bool {
        asset.is_algo() || self.assets.contains_key(&asset)
    }

    /// Returns true if the account has participation keys registered.
    pub fn is_online(&self) -> bool {
        self.key_reg_params.is_some()
    }

    /// Held assets ordered by amount (largest first), ties broken by asset id.
    pub fn sorted_assets(&self) -> Vec<(AssetId, u64)> {
        self.assets
            .iter()
            .map(|(asset, amount)| (*asset, *amount))
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect()
    }
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x       {{User}} struct Type       x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// Profile and eligibility record from the user registry contract. Opaque to
/// this layer beyond being present or absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct UserInfo {
    /// Payment assets in the user's preferred order.
    pub prio: Vec<AssetId>,
    pub dapp_refs: Vec<AppId>,
}

/// Contracts owned by the user. One instance holds either validator ads or
/// delegator contracts, never a mix of both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub enum UserApps {
    ValidatorAds(BTreeMap<AppId, ValidatorAdGlobalState>),
    DelegatorContracts(BTreeMap<AppId, DelegatorContractGlobalState>),
}

impl UserApps {
    pub fn len(&self) -> usize {
        match self {
            UserApps::ValidatorAds(apps) => apps.len(),
            UserApps::DelegatorContracts(apps) => apps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn app_ids(&self) -> Vec<AppId> {
        match self {
            UserApps::ValidatorAds(apps) => apps.keys().copied().collect(),
            UserApps::DelegatorContracts(apps) => apps.keys().copied().collect(),
        }
    }
}

/// ## Description
/// The connected wallet's account, extended with its registry record, owned
/// contracts, reward beneficiary, and the optional liquid-token account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct User {
    #[serde(flatten)]
    pub account: AccountInfo,
    pub user_info: Option<UserInfo>,
    pub user_apps: Option<UserApps>,
    /// Reward beneficiary account, always present (defaults to the user's
    /// own account upstream).
    pub beneficiary: AccountInfo,
    /// Present only when the user opted into the liquid-token flow.
    pub galgo: Option<AccountInfo>,
}

impl User {
    pub fn owns_app(&self, app_id: AppId) -> bool {
        match &self.user_apps {
            Some(apps) => apps.app_ids().contains(&app_id),
            None => false,
        }
    }
}
