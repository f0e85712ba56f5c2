//! Image upload relay to the external image host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post-a-flat page sends the picked file here as multipart field
//! `image`. The host adds its API key, forwards the file to the image host,
//! and answers `{ "url": ... }` with the hosted display URL. The key never
//! reaches the browser.
//!
//! The route replaces axum's 2 MB default body limit with the image host's
//! maximum; larger files answer 413.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::{MethodRouter, post};
use serde::Serialize;

use crate::error::GatewayError;
use crate::state::AppState;

pub const IMAGE_FIELD: &str = "image";

/// Largest image the image host accepts.
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

/// Room for multipart boundaries and part headers on top of the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// `POST` handler for `/upload/image` with the raised body limit applied.
pub fn route() -> MethodRouter<AppState> {
    post(upload_image).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD_BYTES))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
}

/// File pulled out of the multipart request.
#[derive(Debug)]
pub(crate) struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Hosted URL from an image-host answer: `data.display_url`, else `data.url`.
pub(crate) fn hosted_url(body: &serde_json::Value) -> Option<String> {
    let data = body.get("data")?;
    ["display_url", "url"]
        .iter()
        .find_map(|key| data.get(*key).and_then(serde_json::Value::as_str))
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

async fn read_image_field(multipart: &mut Multipart) -> Result<ImageFile, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                GatewayError::TooLarge(MAX_IMAGE_BYTES)
            } else {
                GatewayError::BadRequest(format!("unreadable image field: {e}"))
            }
        })?;
        if bytes.is_empty() {
            return Err(GatewayError::BadRequest("image field is empty".into()));
        }
        return Ok(ImageFile { file_name, content_type, bytes: bytes.to_vec() });
    }
    Err(GatewayError::BadRequest("missing image field".into()))
}

/// `POST /upload/image`
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>, GatewayError> {
    let Some(api_key) = state.config.image_host_api_key.clone() else {
        return Err(GatewayError::NotConfigured("IMAGE_HOST_API_KEY"));
    };
    let image = read_image_field(&mut multipart).await?;
    let size = image.bytes.len();

    let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
    if let Some(content_type) = image.content_type.as_deref() {
        part = part
            .mime_str(content_type)
            .map_err(|e| GatewayError::BadRequest(format!("invalid content type: {e}")))?;
    }
    let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

    let response = state
        .http
        .post(&state.config.image_host_url)
        .query(&[("key", api_key.as_str())])
        .multipart(form)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::Upstream(format!("image host answered {status}")));
    }
    let body: serde_json::Value = response.json().await?;
    let url = hosted_url(&body).ok_or_else(|| GatewayError::Upstream("image host answer has no url".into()))?;

    tracing::info!(size, %url, "image uploaded");
    Ok(Json(UploadedImage { url }))
}
