//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes (booking, post, dashboard) apply identical unauthenticated
//! redirect behavior; the navbar and sidebar share one sign-out path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_unauth};

pub const LOGIN_ROUTE: &str = "/login";

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Resolve the session once per page load: stored token, then profile fetch.
pub fn resolve_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if crate::util::storage::load_token().is_none() {
            auth.set(AuthState::default());
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => auth.set(AuthState { user: Some(user), loading: false }),
                Err(e) => {
                    log::warn!("session lookup failed: {e}");
                    if e.status() == Some(401) {
                        crate::util::storage::remove_token();
                    }
                    auth.set(AuthState::default());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Forget the token locally and at the host, then reset the session.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        crate::util::storage::remove_token();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            crate::net::api::invalidate(crate::net::api::SESSION_INVALIDATES);
            auth.set(AuthState::default());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN_ROUTE);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
