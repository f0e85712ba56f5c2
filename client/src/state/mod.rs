//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by flow (`auth`, `booking`, `listing`, `reviews`, `toast`)
//! so pages depend on small focused models that are testable without a
//! browser.

pub mod auth;
pub mod booking;
pub mod listing;
pub mod reviews;
pub mod toast;
