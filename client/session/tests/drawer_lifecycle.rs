use stakemarket::constants::{PAYMENT_ASA, ROUNDS_PER_DAY};
use stakemarket::contract_state::AppId;
use stakemarket::stake_reqs::StakeReqs;
use stakemarket_session::app_state::AppGlobalState;
use stakemarket_session::drawer::{Applied, DrawerParams, DrawerProvider};
use std::rc::Rc;

use crate::utils::{close_counter, del_co_state, mount_drawer, val_ad_state};
pub mod utils;

#[test]
fn mounting_closed_does_not_fire_on_close() {
    let app = Rc::new(AppGlobalState::new());
    let (closes, on_close) = close_counter();

    let provider = mount_drawer(&app, false, Some(on_close));
    provider.settle_mount();
    // a repeated set to the same value is not a close edge
    provider.context().set_open_drawer(false);

    assert_eq!(closes.get(), 0);
}

#[test]
fn close_before_mount_settles_is_guarded() {
    let app = Rc::new(AppGlobalState::new());
    let (closes, on_close) = close_counter();

    let provider = mount_drawer(&app, true, Some(on_close));
    let context = provider.context();

    // closing while still initializing must not fire the handler
    context.set_open_drawer(false);
    assert_eq!(closes.get(), 0);

    provider.settle_mount();
    context.set_open_drawer(true);
    context.set_open_drawer(false);
    assert_eq!(closes.get(), 1);
}

#[test]
fn open_then_close_fires_on_close_exactly_once() {
    let app = Rc::new(AppGlobalState::new());
    let (closes, on_close) = close_counter();

    let provider = mount_drawer(&app, true, Some(on_close));
    provider.settle_mount();
    let context = provider.context();

    context.set_open_drawer(false);
    assert_eq!(closes.get(), 1);

    // repeated close is a no-op, the effect is edge triggered
    context.set_open_drawer(false);
    assert_eq!(closes.get(), 1);

    context.set_open_drawer(true);
    context.set_open_drawer(false);
    assert_eq!(closes.get(), 2);
}

#[test]
fn close_after_successful_renewal_settles_renewing_state() {
    let app = Rc::new(AppGlobalState::new());
    let (closes, on_close) = close_counter();

    let provider = mount_drawer(&app, true, Some(on_close));
    provider.settle_mount();
    let context = provider.context();

    // the renewal flow marked the contract as renewing, then the
    // transaction confirmed while the drawer stayed open
    app.set_renewing(AppId(42));
    context.set_is_renew_success(true);
    assert_eq!(app.renewing(), Some(AppId(42)));

    context.set_open_drawer(false);

    assert_eq!(closes.get(), 1);
    assert_eq!(app.renewing(), None);
    assert!(!context.is_renew_success());
}

#[test]
fn close_without_renewal_leaves_renewing_state_untouched() {
    let app = Rc::new(AppGlobalState::new());
    let (closes, on_close) = close_counter();

    let provider = mount_drawer(&app, true, Some(on_close));
    provider.settle_mount();
    let context = provider.context();

    app.set_renewing(AppId(42));
    context.set_open_drawer(false);

    assert_eq!(closes.get(), 1);
    assert_eq!(app.renewing(), Some(AppId(42)));
}

#[test]
fn fetch_delivery_fills_state_and_clears_refetch() {
    let app = Rc::new(AppGlobalState::new());
    let provider = mount_drawer(&app, true, None);
    provider.settle_mount();
    let context = provider.context();

    assert!(context.refetch());

    let ticket = provider.fetch_ticket();
    let applied = ticket.apply(Some(del_co_state(42, 11)), Some(val_ad_state(11)));

    assert_eq!(applied, Applied::Fresh);
    assert!(!context.refetch());
    assert_eq!(context.gs_del_co().map(|gs| gs.app_id), Some(AppId(42)));
    assert_eq!(context.gs_val_ad().map(|gs| gs.app_id), Some(AppId(11)));
}

#[test]
fn stake_reqs_are_passed_through_read_only() {
    let app = Rc::new(AppGlobalState::new());
    let reqs = StakeReqs::new(30 * ROUNDS_PER_DAY, 1_000_000_000, PAYMENT_ASA);

    let provider = DrawerProvider::mount(
        Rc::clone(&app),
        DrawerParams {
            val_app_id: Some(AppId(11)),
            del_app_id: None,
            stake_reqs: Some(reqs),
            open_drawer: true,
        },
        None,
    );
    provider.settle_mount();

    assert_eq!(provider.context().stake_reqs(), Some(reqs));
}

#[test]
#[should_panic(expected = "outside an active drawer session")]
fn context_use_after_unmount_panics() {
    let app = Rc::new(AppGlobalState::new());
    let provider = mount_drawer(&app, true, None);
    provider.settle_mount();
    let context = provider.context();

    provider.unmount();
    context.open_drawer();
}

#[test]
#[should_panic(expected = "outside an active drawer session")]
fn context_use_after_provider_drop_panics() {
    let app = Rc::new(AppGlobalState::new());
    let provider = mount_drawer(&app, true, None);
    let context = provider.context();

    drop(provider);
    context.set_open_drawer(false);
}
