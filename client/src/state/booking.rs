//! Booking-request flow state.
//!
//! DESIGN
//! ======
//! One booking page serves every variant; `BookingConfig` carries the copy,
//! the post-success route, and the loading style. Outcome classification and
//! the submit lock are plain data so the page stays a thin view.
//!
//! The lock is held while a request is in flight. A failed attempt releases
//! it so the user can retry; a booked or already-booked answer keeps it.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::net::api::ApiError;
use crate::net::types::{ApiEnvelope, Booking};
use crate::state::toast::ToastKind;

/// HTTP status the backend uses for a duplicate booking.
const CONFLICT: u16 = 409;

pub const MISSING_FLAT_MESSAGE: &str = "No flat selected";

/// Flat id from the `:id` route parameter; blank ids are treated as absent.
#[must_use]
pub fn route_flat_id(param: Option<String>) -> Option<String> {
    param.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

/// Loading UI while the flat and profile are fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingStyle {
    /// Full-page spinner replacing the content.
    #[default]
    Spinner,
    /// Content skeleton with an inline "Loading..." line.
    Inline,
}

#[derive(Clone, Copy, Debug)]
pub struct BookingConfig {
    pub success_message: &'static str,
    pub already_booked_message: &'static str,
    pub failure_message: &'static str,
    pub success_route: fn(&str) -> String,
    pub loading: LoadingStyle,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            success_message: "Flat booked successfully!",
            already_booked_message: "You have already booked this flat!",
            failure_message: "Something went wrong!",
            success_route: checkout_route,
            loading: LoadingStyle::Spinner,
        }
    }
}

#[must_use]
pub fn checkout_route(booking_id: &str) -> String {
    format!("/checkout/{booking_id}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked { booking_id: String },
    AlreadyBooked,
    Failed(String),
}

/// Classify the booking mutation result.
///
/// A response without a booking id, or a 409, means the flat is already
/// booked by this user. Everything else that is not a success is a failure.
#[must_use]
pub fn classify_booking(result: Result<ApiEnvelope<Booking>, ApiError>) -> BookingOutcome {
    match result {
        Ok(envelope) => match envelope.data {
            Some(booking) if !booking.id.is_empty() => BookingOutcome::Booked { booking_id: booking.id },
            _ => BookingOutcome::AlreadyBooked,
        },
        Err(ApiError::Status { status: CONFLICT, .. }) => BookingOutcome::AlreadyBooked,
        Err(e) => BookingOutcome::Failed(e.to_string()),
    }
}

/// What the page does with an outcome: one toast, optionally a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingResolution {
    pub toast_kind: ToastKind,
    pub toast_message: String,
    pub navigate_to: Option<String>,
}

#[must_use]
pub fn resolve(config: &BookingConfig, outcome: &BookingOutcome) -> BookingResolution {
    match outcome {
        BookingOutcome::Booked { booking_id } => BookingResolution {
            toast_kind: ToastKind::Success,
            toast_message: config.success_message.to_owned(),
            navigate_to: Some((config.success_route)(booking_id)),
        },
        BookingOutcome::AlreadyBooked => BookingResolution {
            toast_kind: ToastKind::Info,
            toast_message: config.already_booked_message.to_owned(),
            navigate_to: None,
        },
        BookingOutcome::Failed(_) => BookingResolution {
            toast_kind: ToastKind::Error,
            toast_message: config.failure_message.to_owned(),
            navigate_to: None,
        },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub phase: SubmitPhase,
    /// Last failure, rendered inline under the submit button.
    pub error: Option<String>,
}

impl BookingState {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Take the submit lock. Returns `false` if a submission is running or
    /// already succeeded.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        true
    }

    pub fn finish(&mut self, outcome: &BookingOutcome) {
        match outcome {
            BookingOutcome::Failed(message) => {
                self.phase = SubmitPhase::Idle;
                self.error = Some(message.clone());
            }
            BookingOutcome::Booked { .. } | BookingOutcome::AlreadyBooked => {
                self.phase = SubmitPhase::Done;
            }
        }
    }
}

/// Fallback text for optional profile fields.
#[must_use]
pub fn or_not_provided(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "Data not provided".to_owned(),
    }
}
