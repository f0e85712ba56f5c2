//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolved once per page load from the stored token + profile fetch, then
//! read by route guards, the navbar, and user-aware pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before session resolution has run.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Whether a guarded route should send the visitor to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
