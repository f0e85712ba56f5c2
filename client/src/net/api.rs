//! REST API helpers for the rental backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's same-origin `/api` proxy.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! CACHING
//! =======
//! Reads go through the shared `QueryCache`: each read names the tag it
//! provides, concurrent reads of one key share a single request, and each
//! mutation invalidates the tags it touches once it succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so failed calls
//! degrade to inline messages or toasts without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use super::cache::{InFlight, QueryKey};
use super::cache::{QueryCache, Tag};
use super::types::{ApiEnvelope, Booking, Flat, LoginRequest, LoginResponse, NewFlat, Review, ReviewUpdate, User};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const PROFILE_ENDPOINT: &str = "/api/profile";
pub const FLATS_ENDPOINT: &str = "/api/flats";
pub const BOOKINGS_ENDPOINT: &str = "/api/booking-applications";
pub const REVIEWS_ENDPOINT: &str = "/api/reviews";
pub const UPLOAD_IMAGE_ENDPOINT: &str = "/upload/image";
pub const SET_TOKEN_ENDPOINT: &str = "/auth/token";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";

pub const CREATE_FLAT_INVALIDATES: &[Tag] = &[Tag::Flat];
pub const BOOKING_INVALIDATES: &[Tag] = &[Tag::Booking, Tag::Flat];
pub const REVIEW_WRITE_INVALIDATES: &[Tag] = &[Tag::Review];
pub const SESSION_INVALIDATES: &[Tag] = &[Tag::User, Tag::Admin];

thread_local! {
    static CACHE: RefCell<QueryCache> = RefCell::new(QueryCache::new());
}

#[cfg(feature = "hydrate")]
type SharedFetch = futures::future::Shared<futures::future::LocalBoxFuture<'static, Result<serde_json::Value, ApiError>>>;

#[cfg(feature = "hydrate")]
thread_local! {
    static IN_FLIGHT: RefCell<InFlight<SharedFetch>> = RefCell::new(InFlight::default());
}

/// Failure of a backend or host call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Status` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Drop cached reads that provide any of `tags`.
pub fn invalidate(tags: &[Tag]) {
    CACHE.with_borrow_mut(|cache| {
        cache.invalidate(tags);
    });
}

#[cfg(any(test, feature = "hydrate"))]
fn flat_endpoint(flat_id: &str) -> String {
    format!("{FLATS_ENDPOINT}/{flat_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn review_endpoint(review_id: &str) -> String {
    format!("{REVIEWS_ENDPOINT}/{review_id}")
}

/// Pick the display message for a failed response: the backend's
/// `message` field when present, otherwise a status line.
#[cfg(any(test, feature = "hydrate"))]
fn status_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Unwrap `{ data: ... }` from a backend envelope; bare payloads pass through.
#[cfg(any(test, feature = "hydrate"))]
fn envelope_payload(body: serde_json::Value) -> serde_json::Value {
    match body {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<serde_json::Value, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await.map_err(network_error)?;
    if !ok {
        return Err(ApiError::Status { status, message: status_error_message(status, &text) });
    }
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<serde_json::Value, ApiError> {
    let resp = with_auth(builder)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_body(resp).await
}

/// Cached GET: serve a fresh entry, join an in-flight request for the same
/// key, or fetch and store.
#[cfg(feature = "hydrate")]
async fn cached_get<T: DeserializeOwned>(key: QueryKey, provides: &[Tag], url: String) -> Result<T, ApiError> {
    use super::cache::Lookup;

    let value = match CACHE.with_borrow(|cache| cache.lookup(&key)) {
        Lookup::Fresh(value) => value,
        Lookup::InFlight => match IN_FLIGHT.with_borrow(|m| m.get(&key)) {
            Some(shared) => shared.await?,
            None => fetch_into_cache(key, provides, url).await?,
        },
        Lookup::Miss => fetch_into_cache(key, provides, url).await?,
    };
    decode(value)
}

#[cfg(feature = "hydrate")]
async fn fetch_into_cache(key: QueryKey, provides: &[Tag], url: String) -> Result<serde_json::Value, ApiError> {
    use futures::FutureExt;

    let generation = CACHE.with_borrow_mut(|cache| cache.begin(key.clone(), provides));
    let shared = async move {
        let resp = with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        read_body(resp).await.map(envelope_payload)
    }
    .boxed_local()
    .shared();
    IN_FLIGHT.with_borrow_mut(|m| m.insert(key.clone(), generation, shared.clone()));

    let result = shared.await;
    IN_FLIGHT.with_borrow_mut(|m| m.finish(&key, generation));
    CACHE.with_borrow_mut(|cache| match &result {
        Ok(value) => {
            if !cache.complete(&key, generation, value.clone()) {
                log::debug!("discarding invalidated response for {key}");
            }
        }
        Err(_) => cache.fail(&key, generation),
    });
    result
}

/// Fetch the signed-in user with profile fields. Provides `user`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is not valid.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        cached_get(QueryKey::new("profile", ""), &[Tag::User], PROFILE_ENDPOINT.to_owned()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one flat by id. Provides `flat`.
///
/// # Errors
///
/// Returns an error if the request fails or the flat does not exist.
pub async fn fetch_flat(flat_id: &str) -> Result<Flat, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        cached_get(QueryKey::new("flat", flat_id), &[Tag::Flat], flat_endpoint(flat_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = flat_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the flat index. Provides `flat`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_flats() -> Result<Vec<Flat>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        cached_get(QueryKey::new("flats", ""), &[Tag::Flat], FLATS_ENDPOINT.to_owned()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all reviews for the dashboard table. Provides `review`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_reviews() -> Result<Vec<Review>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        cached_get(QueryKey::new("reviews", ""), &[Tag::Review], REVIEWS_ENDPOINT.to_owned()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a listing via `POST /api/flats`. Invalidates `flat`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn create_flat(flat: &NewFlat) -> Result<ApiEnvelope<Flat>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_json(gloo_net::http::Request::post(FLATS_ENDPOINT), flat).await?;
        invalidate(CREATE_FLAT_INVALIDATES);
        decode(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = flat;
        Err(ApiError::Unavailable)
    }
}

/// Submit a booking request via `POST /api/booking-applications`.
/// Invalidates `booking` and `flat`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend answers with a
/// non-success status.
pub async fn request_booking(flat_id: &str) -> Result<ApiEnvelope<Booking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::BookingRequest { flat_id: flat_id.to_owned() };
        let body = send_json(gloo_net::http::Request::post(BOOKINGS_ENDPOINT), &payload).await?;
        invalidate(BOOKING_INVALIDATES);
        decode(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = flat_id;
        Err(ApiError::Unavailable)
    }
}

/// Update a review via `PATCH /api/reviews/{id}`. Invalidates `review`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn update_review(review_id: &str, update: &ReviewUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Request::patch(&review_endpoint(review_id)), update).await?;
        invalidate(REVIEW_WRITE_INVALIDATES);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (review_id, update);
        Err(ApiError::Unavailable)
    }
}

/// Delete a review via `DELETE /api/reviews/{id}`. Invalidates `review`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn delete_review(review_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&review_endpoint(review_id)))
            .send()
            .await
            .map_err(network_error)?;
        read_body(resp).await?;
        invalidate(REVIEW_WRITE_INVALIDATES);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = review_id;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a token via `POST /api/login`.
///
/// The body is parsed whatever the status: a rejected login still carries
/// the backend's `message`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not the login shape.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let text = resp.text().await.map_err(network_error)?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Hand the token to the host so it can set the session cookie.
/// Returns the redirect target the host echoes back.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn set_access_token(token: &str, redirect: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct RedirectResponse {
            redirect: String,
        }
        let payload = serde_json::json!({ "token": token, "redirect": redirect });
        let body = send_json(gloo_net::http::Request::post(SET_TOKEN_ENDPOINT), &payload).await?;
        let parsed: RedirectResponse = decode(body)?;
        invalidate(SESSION_INVALIDATES);
        Ok(parsed.redirect)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, redirect);
        Err(ApiError::Unavailable)
    }
}

/// Expire the host session cookie and forget cached session reads.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
    CACHE.with_borrow_mut(QueryCache::clear);
}

/// Relay an image file to the hosting service through the host's upload
/// endpoint. Returns the hosted URL.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// host answers without a URL.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: web_sys::File) -> Result<String, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob("image", &file).map_err(js_error)?;
    let resp = gloo_net::http::Request::post(UPLOAD_IMAGE_ENDPOINT)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let uploaded: super::types::UploadedImage = decode(read_body(resp).await?)?;
    Ok(uploaded.url)
}
