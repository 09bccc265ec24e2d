//! Contexts provided to every page: the session and the mail delivery hook.

use std::rc::Rc;

use core_types::{MailDelivery, Session, Unconfigured, User};
use yew::prelude::*;

/// Shared handle to the mail delivery backend.
#[derive(Clone)]
pub struct DeliveryHandle(Rc<dyn MailDelivery>);

impl DeliveryHandle {
    pub fn new(delivery: impl MailDelivery + 'static) -> Self {
        Self(Rc::new(delivery))
    }

    pub fn get(&self) -> &dyn MailDelivery {
        self.0.as_ref()
    }
}

impl Default for DeliveryHandle {
    fn default() -> Self {
        Self::new(Unconfigured)
    }
}

impl PartialEq for DeliveryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Session changes dispatched from views.
pub enum SessionAction {
    Login(User),
    Logout,
}

/// Reducer state behind the session context.
#[derive(Clone, Default, PartialEq)]
pub struct SessionState(pub Session);

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        let changed = match action {
            SessionAction::Login(user) => next.login(user),
            SessionAction::Logout => next.logout(),
        };
        // Returning the same Rc keeps context consumers from re-rendering.
        if changed {
            Rc::new(SessionState(next))
        } else {
            self
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_reducer() {
        let state = Rc::new(SessionState::default());
        let state = state.reduce(SessionAction::Login(User {
            name: "alice".to_string(),
        }));
        assert!(state.0.is_authenticated());

        let state = state.reduce(SessionAction::Logout);
        assert_eq!(state.0, Session::anonymous());
    }

    #[test]
    fn test_unchanged_session_keeps_state() {
        let state = Rc::new(SessionState::default());
        let same = state.clone().reduce(SessionAction::Logout);
        assert!(Rc::ptr_eq(&state, &same));

        let alice = User::named("alice").unwrap();
        let signed_in = state.reduce(SessionAction::Login(alice.clone()));
        let again = signed_in.clone().reduce(SessionAction::Login(alice));
        assert!(Rc::ptr_eq(&signed_in, &again));
    }

    #[test]
    fn test_default_delivery_is_unconfigured() {
        let handle = DeliveryHandle::default();
        assert_eq!(handle.get().provider().name, "unconfigured");
        assert!(handle == handle.clone());
        assert!(handle != DeliveryHandle::default());
    }
}
