use serde::Serialize;

use crate::mock;
use crate::models::{Role, UserProfile};

// One session per browser demo: an authenticated flag plus the active
// role. Logging out drops the chrome but guards no routes.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub authenticated: bool,
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Session {
            authenticated: true,
            role,
        }
    }

    pub fn log_in(&mut self, role: Role) {
        self.authenticated = true;
        self.role = role;
    }

    pub fn log_out(&mut self) {
        self.authenticated = false;
    }

    pub fn switch_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn user(&self) -> UserProfile {
        mock::user_for(self.role)
    }
}

impl Default for Session {
    // Mock authentication: the demo starts signed in as the teacher.
    fn default() -> Self {
        Session::new(Role::Teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_authenticated_as_teacher() {
        let session = Session::default();
        assert!(session.authenticated);
        assert_eq!(session.role, Role::Teacher);
        assert_eq!(session.user().name, "Dr. Sarah Wilson");
    }

    #[test]
    fn switching_role_swaps_the_identity() {
        let mut session = Session::default();
        session.switch_role();
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.user().name, "Alex Johnson");
        session.switch_role();
        assert_eq!(session.user().name, "Dr. Sarah Wilson");
    }

    #[test]
    fn logging_out_keeps_the_role() {
        let mut session = Session::default();
        session.log_out();
        assert!(!session.authenticated);
        assert_eq!(session.role, Role::Teacher);
    }

    #[test]
    fn logging_in_sets_the_requested_role() {
        let mut session = Session::default();
        session.log_out();
        session.log_in(Role::Student);
        assert!(session.authenticated);
        assert_eq!(session.role, Role::Student);
    }
}
