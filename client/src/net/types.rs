//! Wire DTOs for the rental backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Numeric fields accept either JSON numbers or numeric strings,
//! since listings created by older clients stored form input verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role assigned by the backend at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Path segment used for role-scoped dashboard routes.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// The signed-in user together with their optional profile fields,
/// as returned by `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// A rentable property listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    pub id: String,
    pub title: String,
    /// Hosted image URL.
    pub image: String,
    pub location: String,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub square_feet: u32,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub total_bedrooms: u32,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub total_rooms: u32,
    pub amenities: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub rent: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub advance_amount: f64,
}

/// Request body for `POST /api/flats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlat {
    pub title: String,
    pub image: String,
    pub location: String,
    pub square_feet: u32,
    pub total_bedrooms: u32,
    pub total_rooms: u32,
    pub amenities: String,
    pub description: String,
    pub rent: f64,
    pub advance_amount: f64,
}

/// A booking request record. Only `id` is required; the client routes on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub flat_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for `POST /api/booking-applications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub flat_id: String,
}

/// A review row shown in the dashboard table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub flat_name: String,
    pub location: String,
    #[serde(deserialize_with = "deserialize_u8_lenient")]
    pub rating: u8,
    pub comment: String,
}

/// Request body for `PATCH /api/reviews/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub comment: String,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or email.
    pub identifier: String,
    pub password: String,
}

/// Response body for `POST /api/login`. The backend answers with the same
/// shape for success and rejection; only `data.token` tells them apart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
}

/// Standard backend response wrapper. Absent fields decode as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Response of the host's `POST /upload/image` relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(float) if float.is_finite() => Ok(float),
        _ => Err(D::Error::custom(format!("expected number, got {value}"))),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let float = deserialize_f64_lenient(deserializer)?;
    if float.fract() == 0.0 && float >= 0.0 && float <= f64::from(u32::MAX) {
        return Ok(float as u32);
    }
    Err(D::Error::custom(format!("value {float} out of range for u32")))
}

fn deserialize_u8_lenient<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u32_lenient(deserializer)?;
    u8::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u8")))
}
