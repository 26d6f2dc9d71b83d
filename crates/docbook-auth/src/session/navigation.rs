//! Role-specific navigation contexts over a shared session boundary.

use serde::Serialize;
use tracing::info;

use docbook_core::config::SessionConfig;
use docbook_entity::account::AccountRole;

use super::boundary::SessionBoundary;

/// Notice shown to the user after logging out.
pub const LOGOUT_NOTICE: &str = "Logged out successfully";

/// What a navigation bar renders for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Name of the signed-in principal.
    pub display_name: Option<String>,
    /// Whether to offer a logout action.
    pub show_logout: bool,
}

/// Result of a logout triggered from a navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutOutcome {
    /// Message to show the user.
    pub notice: String,
    /// Route to navigate to.
    pub redirect_to: String,
    /// Whether a marker was actually cleared.
    pub cleared: bool,
}

/// The session-facing half of one role's navigation bar.
///
/// Admin, doctor, and patient dashboards each hold one of these over the
/// same [`SessionBoundary`]. Logout behaves identically for every role.
#[derive(Debug, Clone)]
pub struct RoleNavigation {
    role: AccountRole,
    session: SessionBoundary,
    login_route: String,
}

impl RoleNavigation {
    /// Creates a navigation context for a role.
    pub fn new(role: AccountRole, session: SessionBoundary, config: &SessionConfig) -> Self {
        Self {
            role,
            session,
            login_route: config.login_route.clone(),
        }
    }

    /// Navigation for the admin dashboard.
    pub fn admin(session: SessionBoundary, config: &SessionConfig) -> Self {
        Self::new(AccountRole::Admin, session, config)
    }

    /// Navigation for the doctor dashboard.
    pub fn doctor(session: SessionBoundary, config: &SessionConfig) -> Self {
        Self::new(AccountRole::Doctor, session, config)
    }

    /// Navigation for the patient dashboard.
    pub fn patient(session: SessionBoundary, config: &SessionConfig) -> Self {
        Self::new(AccountRole::Patient, session, config)
    }

    /// The dashboard role this navigation serves.
    pub fn role(&self) -> AccountRole {
        self.role
    }

    /// Current render state.
    pub fn state(&self) -> NavigationState {
        match self.session.current() {
            Some(principal) => NavigationState {
                display_name: Some(principal.display_name),
                show_logout: true,
            },
            None => NavigationState {
                display_name: None,
                show_logout: false,
            },
        }
    }

    /// Route to redirect to before rendering this dashboard, if any.
    ///
    /// Unauthenticated clients go to the login route. A principal of a
    /// different role goes to their own dashboard.
    pub fn guard(&self) -> Option<String> {
        match self.session.current() {
            None => Some(self.login_route.clone()),
            Some(principal) if principal.role != self.role => {
                Some(principal.role.landing_route().to_string())
            }
            Some(_) => None,
        }
    }

    /// Ends the session and tells the caller what to show and where to go.
    pub fn logout(&self) -> LogoutOutcome {
        let cleared = self.session.end();
        info!(role = %self.role, cleared, "Logout from navigation");

        LogoutOutcome {
            notice: LOGOUT_NOTICE.to_string(),
            redirect_to: self.login_route.clone(),
            cleared,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::storage::MemoryClientStorage;
    use docbook_entity::session::Principal;

    fn session() -> SessionBoundary {
        SessionBoundary::new(Arc::new(MemoryClientStorage::new()), &SessionConfig::default())
    }

    fn sign_in(session: &SessionBoundary, role: AccountRole) {
        session
            .begin(Principal {
                display_name: "Dr. Quinn".to_string(),
                role,
                email: "quinn@docbook.com".to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_state_reflects_marker() {
        let session = session();
        let config = SessionConfig::default();
        let nav = RoleNavigation::doctor(session.clone(), &config);

        assert_eq!(
            nav.state(),
            NavigationState {
                display_name: None,
                show_logout: false
            }
        );

        sign_in(&session, AccountRole::Doctor);
        let state = nav.state();
        assert_eq!(state.display_name.as_deref(), Some("Dr. Quinn"));
        assert!(state.show_logout);
    }

    #[test]
    fn test_logout_redirects_for_every_role() {
        let config = SessionConfig::default();

        for role in AccountRole::ALL {
            let session = session();
            sign_in(&session, role);
            let nav = RoleNavigation::new(role, session.clone(), &config);

            let outcome = nav.logout();
            assert!(outcome.cleared);
            assert_eq!(outcome.notice, LOGOUT_NOTICE);
            assert_eq!(outcome.redirect_to, "/login");
            assert!(!session.is_active());
        }
    }

    #[test]
    fn test_repeated_logout_still_redirects() {
        let config = SessionConfig::default();
        let nav = RoleNavigation::patient(session(), &config);

        let outcome = nav.logout();
        assert!(!outcome.cleared);
        assert_eq!(outcome.redirect_to, "/login");
    }

    #[test]
    fn test_guard() {
        let session = session();
        let config = SessionConfig::default();
        let admin_nav = RoleNavigation::admin(session.clone(), &config);
        let doctor_nav = RoleNavigation::doctor(session.clone(), &config);

        assert_eq!(admin_nav.guard().as_deref(), Some("/login"));

        sign_in(&session, AccountRole::Doctor);
        assert_eq!(doctor_nav.guard(), None);
        assert_eq!(admin_nav.guard().as_deref(), Some("/doctor"));
    }

    #[test]
    fn test_logout_from_one_bar_is_seen_by_others() {
        let session = session();
        let config = SessionConfig::default();
        let patient_nav = RoleNavigation::patient(session.clone(), &config);
        let other_nav = RoleNavigation::patient(session.clone(), &config);

        sign_in(&session, AccountRole::Patient);
        patient_nav.logout();
        assert!(!other_nav.state().show_logout);
    }
}
