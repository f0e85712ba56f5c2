use axum::http::HeaderValue;

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("http://localhost:5000", "flats/f1", None), "http://localhost:5000/api/flats/f1");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(
        upstream_url("http://b", "flats", Some("page=2&limit=10")),
        "http://b/api/flats?page=2&limit=10"
    );
}

#[test]
fn upstream_url_ignores_empty_query_and_leading_slash() {
    assert_eq!(upstream_url("http://b", "/reviews", Some("")), "http://b/api/reviews");
}

// =============================================================================
// authorization
// =============================================================================

#[test]
fn authorization_prefers_header() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("header-token"));
    let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie-token"));
    assert_eq!(authorization(&headers, &jar).as_deref(), Some("header-token"));
}

#[test]
fn authorization_falls_back_to_cookie() {
    let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie-token"));
    assert_eq!(authorization(&HeaderMap::new(), &jar).as_deref(), Some("cookie-token"));
}

#[test]
fn blank_header_uses_cookie() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("  "));
    let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie-token"));
    assert_eq!(authorization(&headers, &jar).as_deref(), Some("cookie-token"));
}

#[test]
fn no_header_no_cookie_is_anonymous() {
    assert_eq!(authorization(&HeaderMap::new(), &CookieJar::new()), None);
}
