//! Session state and access decisions for the EduManage client.
//!
//! This crate provides:
//! - Session: the record of the currently authenticated identity
//! - check_access: the gate mapping (session, required role) to a
//!   render or redirect outcome for each requested view

use core_types::{Identity, Role};

/// The record of the currently authenticated identity, if any.
///
/// Exactly one session exists per running client. It starts out
/// unauthenticated and only [`Session::login`] and [`Session::logout`]
/// move it between states; the role of a logged-in identity never
/// changes mid-session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the identity as the active principal.
    pub fn login(&mut self, identity: Identity) {
        self.current = Some(identity);
    }

    /// Clear the active session. A no-op when already logged out.
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Whether an identity is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The active identity, if any.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Role of the active identity, if any.
    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(Identity::role)
    }
}

/// Outcome of an access check for a requested view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the requested view.
    Render,
    /// No active session: send the user to the login surface.
    RedirectToLogin,
    /// Role mismatch: send the user to their own home instead.
    RedirectToHome,
}

/// Decide what to do with a request for a view requiring
/// `required_role` (or any authenticated user when `None`).
///
/// Unauthorized access is never surfaced as an error: the caller
/// always gets a redirect target, never a faulted state.
pub fn check_access(session: &Session, required_role: Option<Role>) -> GateOutcome {
    let Some(identity) = session.current_identity() else {
        return GateOutcome::RedirectToLogin;
    };

    match required_role {
        Some(required) if required != identity.role() => GateOutcome::RedirectToHome,
        _ => GateOutcome::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Role;
    use mock_directory::{builtin, DEMO_PASSWORD};

    fn teacher_identity() -> Identity {
        builtin()
            .authenticate("teacher1", DEMO_PASSWORD, Role::Teacher)
            .expect("builtin teacher1")
    }

    fn student_identity() -> Identity {
        builtin()
            .authenticate("student1", DEMO_PASSWORD, Role::Student)
            .expect("builtin student1")
    }

    #[test]
    fn test_session_starts_unauthenticated() {
        let session = Session::new();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_identity(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_login_records_identity() {
        let mut session = Session::new();
        let identity = teacher_identity();

        session.login(identity.clone());

        assert!(session.is_authenticated());
        assert_eq!(session.current_identity(), Some(&identity));
        assert_eq!(session.role(), Some(Role::Teacher));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = Session::new();
        session.login(student_identity());

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_identity(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::new();

        session.logout();
        session.logout();

        assert!(!session.is_authenticated());

        session.login(teacher_identity());
        session.logout();
        session.logout();

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_fresh_login_replaces_identity() {
        let mut session = Session::new();
        session.login(teacher_identity());
        session.login(student_identity());

        assert_eq!(session.role(), Some(Role::Student));
    }

    #[test]
    fn test_gate_redirects_unauthenticated_to_login() {
        let session = Session::new();

        assert_eq!(
            check_access(&session, Some(Role::Teacher)),
            GateOutcome::RedirectToLogin
        );
        assert_eq!(
            check_access(&session, Some(Role::Student)),
            GateOutcome::RedirectToLogin
        );
        assert_eq!(check_access(&session, None), GateOutcome::RedirectToLogin);
    }

    #[test]
    fn test_gate_redirects_role_mismatch_to_home() {
        let mut session = Session::new();
        session.login(student_identity());

        assert_eq!(
            check_access(&session, Some(Role::Teacher)),
            GateOutcome::RedirectToHome
        );
    }

    #[test]
    fn test_gate_renders_matching_role() {
        let mut session = Session::new();
        session.login(teacher_identity());

        assert_eq!(
            check_access(&session, Some(Role::Teacher)),
            GateOutcome::Render
        );
    }

    #[test]
    fn test_gate_renders_unrestricted_views_when_authenticated() {
        let mut session = Session::new();
        session.login(student_identity());

        assert_eq!(check_access(&session, None), GateOutcome::Render);
    }
}
