#![allow(dead_code)]

use stakemarket::account::{AccountInfo, User};
use stakemarket::constants::ONE_ALGO;
use stakemarket::contract_state::{AppId, DelegatorContractGlobalState, ValidatorAdGlobalState};
use stakemarket_session::app_state::AppGlobalState;
use stakemarket_session::drawer::{DrawerParams, DrawerProvider};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub fn account(address: &str, algo: u64) -> AccountInfo {
    AccountInfo {
        address: address.to_string(),
        algo,
        assets: BTreeMap::new(),
        key_reg_params: None,
        tracked_performance: false,
    }
}

pub fn user_with_balance(algo_tokens: u64) -> Rc<User> {
    let address = "USERADDRESS";
    Rc::new(User {
        account: account(address, algo_tokens * ONE_ALGO),
        user_info: None,
        user_apps: None,
        beneficiary: account(address, 0),
        galgo: None,
    })
}

pub fn del_co_state(app_id: u64, validator_ad: u64) -> DelegatorContractGlobalState {
    DelegatorContractGlobalState {
        app_id: AppId(app_id),
        del_beneficiary: "DELBENEFICIARY".to_string(),
        validator_ad: AppId(validator_ad),
        round_start: 1_000,
        round_end: 901_000,
        state: 1,
    }
}

pub fn val_ad_state(app_id: u64) -> ValidatorAdGlobalState {
    ValidatorAdGlobalState {
        app_id: AppId(app_id),
        owner: "VALOWNER".to_string(),
        total_algo_earned: 0,
        cnt_del: 1,
        state: 1,
    }
}

/// Close handler that counts its invocations.
pub fn close_counter() -> (Rc<Cell<u32>>, Box<dyn Fn()>) {
    let count = Rc::new(Cell::new(0));
    let handler = {
        let count = Rc::clone(&count);
        Box::new(move || count.set(count.get() + 1))
    };
    (count, handler)
}

pub fn mount_drawer(
    app: &Rc<AppGlobalState>,
    open_drawer: bool,
    on_close: Option<Box<dyn Fn()>>,
) -> DrawerProvider {
    DrawerProvider::mount(
        Rc::clone(app),
        DrawerParams {
            val_app_id: Some(AppId(11)),
            del_app_id: Some(AppId(42)),
            stake_reqs: None,
            open_drawer,
        },
        on_close,
    )
}
