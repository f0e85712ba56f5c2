//! Same-origin `/api/*` proxy to the backend REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api` are
//! forwarded to `{BACKEND_URL}/api/...` with method, query, body, and the
//! content-type and authorization headers. When the browser sends no
//! `Authorization` header, the `accessToken` cookie set at login is used.
//!
//! ERROR HANDLING
//! ==============
//! Backend answers (including 4xx/5xx) pass through untouched. Only an
//! unreachable backend becomes a 502 `GatewayError`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::auth::ACCESS_TOKEN_COOKIE;
use crate::error::GatewayError;
use crate::state::AppState;

/// `{base}/api/{path}` plus the original query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/{path}?{q}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Header value wins; the session cookie is the fallback.
pub(crate) fn authorization(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            jar.get(ACCESS_TOKEN_COOKIE)
                .map(Cookie::value)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        })
}

/// `ANY /api/{*path}`: forward to the backend and relay its answer.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let url = upstream_url(&state.config.backend_url, &path, query.as_deref());
    let mut request = state.http.request(method.clone(), &url);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }
    if let Some(token) = authorization(&headers, &jar) {
        request = request.header(AUTHORIZATION, token);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "backend unreachable");
        GatewayError::from(e)
    })?;
    let status = upstream.status();
    tracing::debug!(%method, %url, %status, "proxied");

    let mut out = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(CONTENT_TYPE) {
        out.insert(CONTENT_TYPE, content_type.clone());
    }
    let bytes = upstream.bytes().await?;
    Ok((status, out, bytes).into_response())
}
