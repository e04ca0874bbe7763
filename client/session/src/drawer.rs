use crate::app_state::{AppGlobalState, SessionId};
use stakemarket::contract_state::{AppId, DelegatorContractGlobalState, ValidatorAdGlobalState};
use stakemarket::stake_reqs::StakeReqs;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Explicit mount flag for one drawer session. Close effects are armed only
/// once the first render has settled, so a drawer that mounts closed never
/// fires its close handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Initializing,
    Ready,
    Closed,
}

/// Caller-supplied initial state for one drawer mount.
#[derive(Debug, Clone, Default)]
pub struct DrawerParams {
    pub val_app_id: Option<AppId>,
    pub del_app_id: Option<AppId>,
    /// Requirement the drawer was opened with, read-only for its content.
    pub stake_reqs: Option<StakeReqs>,
    pub open_drawer: bool,
}

struct DrawerSession {
    id: SessionId,
    lifecycle: Lifecycle,
    open_drawer: bool,
    gs_del_co: Option<DelegatorContractGlobalState>,
    gs_val_ad: Option<ValidatorAdGlobalState>,
    del_app_id: Option<AppId>,
    val_app_id: Option<AppId>,
    refetch: bool,
    is_renew_success: bool,
    stake_reqs: Option<StakeReqs>,
    on_close: Option<Rc<dyn Fn()>>,
    app: Rc<AppGlobalState>,
}

/// ## Description
/// Owner of one drawer session. Mounted by the component that renders the
/// drawer; drawer content talks to the session through [`DrawerContext`]
/// handles, the fetch collaborator through [`FetchTicket`]s. Unmounting (or
/// dropping) the provider invalidates both.
pub struct DrawerProvider {
    session: Rc<RefCell<DrawerSession>>,
}

impl DrawerProvider {
    pub fn mount(
        app: Rc<AppGlobalState>,
        params: DrawerParams,
        on_close: Option<Box<dyn Fn()>>,
    ) -> Self {
        let session = DrawerSession {
            id: app.mint_session_id(),
            lifecycle: Lifecycle::Initializing,
            open_drawer: params.open_drawer,
            gs_del_co: None,
            gs_val_ad: None,
            del_app_id: params.del_app_id,
            val_app_id: params.val_app_id,
            // contract state is not known yet, request a read straight away
            refetch: true,
            is_renew_success: false,
            stake_reqs: params.stake_reqs,
            on_close: on_close.map(Rc::from),
            app,
        };
        DrawerProvider {
            session: Rc::new(RefCell::new(session)),
        }
    }

    pub fn context(&self) -> DrawerContext {
        DrawerContext {
            session: Rc::downgrade(&self.session),
        }
    }

    /// The first render has settled; arms the close transitions. Idempotent,
    /// the event loop calls it exactly once after the initial render commit.
    pub fn settle_mount(&self) {
        let mut session = self.session.borrow_mut();
        if session.lifecycle == Lifecycle::Initializing {
            session.lifecycle = Lifecycle::Ready;
        }
    }

    /// Ticket for the fetch collaborator to deliver contract state against
    /// this session.
    pub fn fetch_ticket(&self) -> FetchTicket {
        FetchTicket {
            session: Rc::downgrade(&self.session),
            id: self.session.borrow().id,
        }
    }

    /// Ends the session. Outstanding contexts and tickets are invalidated
    /// even if the provider value itself lives on.
    pub fn unmount(&self) {
        self.session.borrow_mut().lifecycle = Lifecycle::Closed;
    }
}

/// Handle through which drawer content reads and drives the session. Using a
/// handle after the session ended is a programming error and panics.
#[derive(Clone)]
pub struct DrawerContext {
    session: Weak<RefCell<DrawerSession>>,
}

impl DrawerContext {
    fn session(&self) -> Rc<RefCell<DrawerSession>> {
        match self.session.upgrade() {
            Some(session) if session.borrow().lifecycle != Lifecycle::Closed => session,
            _ => panic!("drawer context used outside an active drawer session"),
        }
    }

    pub fn open_drawer(&self) -> bool {
        self.session().borrow().open_drawer
    }

    /// ## Description
    /// Open/close transition of the drawer. Effects run only when the value
    /// actually changes, never on a repeated set, and only after the mount
    /// has settled:
    /// - on a close edge the close handler is invoked once;
    /// - if a renewal had succeeded while the drawer was open, the renewing
    ///   reference in [`AppGlobalState`] is cleared and the success flag
    ///   reset on the same edge. Deferring this to the explicit close keeps
    ///   the UI in renewing mode instead of snapping out of it the moment
    ///   the transaction confirms.
    pub fn set_open_drawer(&self, open: bool) {
        let session = self.session();
        let close_handler = {
            let mut session = session.borrow_mut();
            if session.open_drawer == open {
                return;
            }
            session.open_drawer = open;
            if open || session.lifecycle != Lifecycle::Ready {
                return;
            }
            if session.is_renew_success {
                session.is_renew_success = false;
                session.app.clear_renewing();
            }
            session.on_close.clone()
        };
        // invoked outside the borrow, the handler may re-enter the context
        if let Some(on_close) = close_handler {
            on_close();
        }
    }

    pub fn gs_del_co(&self) -> Option<DelegatorContractGlobalState> {
        self.session().borrow().gs_del_co.clone()
    }

    pub fn set_gs_del_co(&self, gs: Option<DelegatorContractGlobalState>) {
        self.session().borrow_mut().gs_del_co = gs;
    }

    pub fn gs_val_ad(&self) -> Option<ValidatorAdGlobalState> {
        self.session().borrow().gs_val_ad.clone()
    }

    pub fn set_gs_val_ad(&self, gs: Option<ValidatorAdGlobalState>) {
        self.session().borrow_mut().gs_val_ad = gs;
    }

    pub fn del_app_id(&self) -> Option<AppId> {
        self.session().borrow().del_app_id
    }

    pub fn set_del_app_id(&self, app_id: Option<AppId>) {
        self.session().borrow_mut().del_app_id = app_id;
    }

    pub fn val_app_id(&self) -> Option<AppId> {
        self.session().borrow().val_app_id
    }

    pub fn set_val_app_id(&self, app_id: Option<AppId>) {
        self.session().borrow_mut().val_app_id = app_id;
    }

    /// Request flag asking the fetch collaborator to re-read contract state.
    /// Cleared by the collaborator when it delivers via [`FetchTicket`].
    pub fn refetch(&self) -> bool {
        self.session().borrow().refetch
    }

    pub fn set_refetch(&self, refetch: bool) {
        self.session().borrow_mut().refetch = refetch;
    }

    /// Requirement supplied by the opener, read-only for drawer content.
    pub fn stake_reqs(&self) -> Option<StakeReqs> {
        self.session().borrow().stake_reqs
    }

    pub fn is_renew_success(&self) -> bool {
        self.session().borrow().is_renew_success
    }

    pub fn set_is_renew_success(&self, is_renew_success: bool) {
        self.session().borrow_mut().is_renew_success = is_renew_success;
    }
}

/// Outcome of delivering a fetch result to a drawer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The owning session accepted the result.
    Fresh,
    /// The owning session ended before the result arrived; it was dropped.
    Stale,
}

/// Delivery path for the asynchronous contract-read collaborator. Captures
/// the session generation at creation; a result resolving after the session
/// ended is silently discarded instead of mutating a newer session.
pub struct FetchTicket {
    session: Weak<RefCell<DrawerSession>>,
    id: SessionId,
}

impl FetchTicket {
    pub fn apply(
        &self,
        gs_del_co: Option<DelegatorContractGlobalState>,
        gs_val_ad: Option<ValidatorAdGlobalState>,
    ) -> Applied {
        let session = match self.session.upgrade() {
            Some(session) => session,
            None => return Applied::Stale,
        };
        let mut session = session.borrow_mut();
        if session.id != self.id || session.lifecycle == Lifecycle::Closed {
            return Applied::Stale;
        }
        session.gs_del_co = gs_del_co;
        session.gs_val_ad = gs_val_ad;
        session.refetch = false;
        Applied::Fresh
    }
}
