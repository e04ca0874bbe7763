use stakemarket::contract_state::AppId;
use std::cell::{Cell, RefCell};

/// Generation token identifying one drawer mount. Async results carry the
/// token of the session that requested them and are dropped on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub(crate) u64);

/// ## Description
/// Application-wide state shared by reference between the drawer and the
/// pages that display renewal status. Holds the delegator contract currently
/// being renewed, if any; the drawer clears it once the user closes the
/// drawer after a successful renewal.
#[derive(Debug, Default)]
pub struct AppGlobalState {
    renew_del_co: RefCell<Option<AppId>>,
    next_session: Cell<u64>,
}

impl AppGlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_renewing(&self, del_co: AppId) {
        *self.renew_del_co.borrow_mut() = Some(del_co);
    }

    pub fn renewing(&self) -> Option<AppId> {
        *self.renew_del_co.borrow()
    }

    pub fn clear_renewing(&self) {
        *self.renew_del_co.borrow_mut() = None;
    }

    pub(crate) fn mint_session_id(&self) -> SessionId {
        let id = self.next_session.get() + 1;
        self.next_session.set(id);
        SessionId(id)
    }
}
