// ============================================================================
// AUTH STATE - the logged-in session
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Role, Session};

#[derive(Clone)]
pub struct AuthState {
    session: Rc<RefCell<Option<Session>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_session(&self, session: Session) {
        *self.session.borrow_mut() = Some(session);
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.borrow().as_ref().map(|s| s.role)
    }

    /// Tear the session down. Returns whether a session was actually
    /// present, so repeated 401s within one action only trigger the
    /// logout path once.
    pub fn clear(&self) -> bool {
        self.session.borrow_mut().take().is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 101,
            role: Role::Student,
            email: "s@mess.edu".to_string(),
            name: None,
        }
    }

    #[test]
    fn clear_reports_teardown_only_once() {
        let auth = AuthState::new();
        auth.set_session(session());
        assert!(auth.clear());
        assert!(!auth.clear());
        assert!(!auth.is_logged_in());
    }
}
