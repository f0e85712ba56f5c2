//! Session cookie routes used around login and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a successful login the client posts its token here; the host stores
//! it in an HttpOnly `accessToken` cookie so server-side requests through the
//! proxy stay authenticated, and echoes the redirect target back. Logout
//! expires the same cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::GatewayError;
use crate::state::AppState;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct SetTokenRequest {
    pub token: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RedirectBody {
    pub redirect: String,
}

pub(crate) fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

pub(crate) fn expired_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Only same-site paths are echoed; anything else becomes `/`.
pub(crate) fn safe_redirect(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// `POST /auth/token`: store the session cookie and echo the redirect.
pub async fn set_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SetTokenRequest>,
) -> Result<(CookieJar, Json<RedirectBody>), GatewayError> {
    let token = body.token.trim();
    if token.is_empty() {
        return Err(GatewayError::BadRequest("token is required".into()));
    }
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(RedirectBody { redirect: safe_redirect(body.redirect.as_deref()) })))
}

/// `POST /auth/logout`: expire the session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (jar.add(expired_cookie(state.config.cookie_secure)), StatusCode::NO_CONTENT)
}
