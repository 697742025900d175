#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication session shared via context from the application root.
///
/// `loading` is true while the mount-time current-user fetch is in flight,
/// so route guards can wait for it to settle instead of bouncing a returning
/// visitor through the login page.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user has the superuser flag.
    ///
    /// Derived from the user record, so an admin session is always an
    /// authenticated session.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }

    /// Label identifying the signed-in user: full name when set, email
    /// otherwise, empty when signed out.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(String::new, |u| {
            u.full_name.clone().unwrap_or_else(|| u.email.clone())
        })
    }

    /// Install a signed-in user.
    pub fn log_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Return to the signed-out state.
    pub fn log_out(&mut self) {
        self.user = None;
    }
}
