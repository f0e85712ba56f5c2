use super::*;
use crate::net::types::{Role, User};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        username: "ann".to_owned(),
        email: "ann@example.com".to_owned(),
        name: None,
        address: None,
        role,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_state_is_loading() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn is_admin_reflects_role() {
    let admin = AuthState { user: Some(user(Role::Admin)), loading: false };
    let member = AuthState { user: Some(user(Role::User)), loading: false };
    assert!(admin.is_admin());
    assert!(!member.is_admin());
    assert!(!AuthState::default().is_admin());
    assert_eq!(member.role(), Some(Role::User));
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::resolving()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user(Role::User)), loading: false };
    assert!(!should_redirect_unauth(&state));
}
