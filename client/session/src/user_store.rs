use stakemarket::account::User;
use std::rc::Rc;

type Subscriber = Box<dyn Fn(Option<&Rc<User>>)>;

/// ## Description
/// Single-slot holder of the connected wallet's [`User`] for the whole app
/// session. Replace-only: there are no merge semantics, so a caller wanting
/// a partial update reads the current value, builds a complete new one and
/// sets it. The store performs no validation.
///
/// Change detection downstream is by reference (`Rc::ptr_eq`), which is why
/// the value is handed out behind `Rc` instead of being cloned.
#[derive(Default)]
pub struct UserStore {
    user: Option<Rc<User>>,
    subscribers: Vec<Subscriber>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<Rc<User>> {
        self.user.clone()
    }

    /// Replaces the stored value wholesale, then notifies every subscriber
    /// synchronously with the new reference. `None` clears the slot on
    /// wallet disconnect.
    pub fn set_user(&mut self, user: Option<Rc<User>>) {
        self.user = user;
        for notify in &self.subscribers {
            notify(self.user.as_ref());
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Option<&Rc<User>>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
