use super::*;
use crate::net::types::Booking;

#[test]
fn flat_endpoint_formats_expected_path() {
    assert_eq!(flat_endpoint("f123"), "/api/flats/f123");
}

#[test]
fn review_endpoint_formats_expected_path() {
    assert_eq!(review_endpoint("r9"), "/api/reviews/r9");
}

#[test]
fn status_error_message_prefers_backend_message() {
    let body = r#"{"success":false,"message":"Flat not found"}"#;
    assert_eq!(status_error_message(404, body), "Flat not found");
}

#[test]
fn status_error_message_falls_back_to_status() {
    assert_eq!(status_error_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(status_error_message(500, r#"{"message":"  "}"#), "request failed: 500");
}

#[test]
fn envelope_payload_unwraps_data() {
    let body = serde_json::json!({"success": true, "message": "ok", "data": {"id": "f1"}});
    assert_eq!(envelope_payload(body), serde_json::json!({"id": "f1"}));
}

#[test]
fn envelope_payload_passes_bare_values_through() {
    assert_eq!(envelope_payload(serde_json::json!([1, 2])), serde_json::json!([1, 2]));
    assert_eq!(envelope_payload(serde_json::json!({"id": "x"})), serde_json::json!({"id": "x"}));
}

#[test]
fn decode_reports_shape_mismatch() {
    let err = decode::<Booking>(serde_json::json!({"nope": true})).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn api_error_status_accessor() {
    let err = ApiError::Status { status: 409, message: "already booked".to_owned() };
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "already booked");
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn mutations_declare_their_tags() {
    assert_eq!(CREATE_FLAT_INVALIDATES, &[Tag::Flat]);
    assert!(BOOKING_INVALIDATES.contains(&Tag::Booking));
    assert_eq!(REVIEW_WRITE_INVALIDATES, &[Tag::Review]);
    assert!(SESSION_INVALIDATES.contains(&Tag::User));
}

#[test]
fn invalidate_on_empty_cache_is_harmless() {
    invalidate(&[Tag::Flat, Tag::Review]);
    CACHE.with_borrow(|cache| assert!(cache.is_empty()));
}

#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on_ready(fetch_flat("f1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete without awaiting anything.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
