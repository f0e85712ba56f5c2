//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, submit locks,
//! navigation) and delegates rendering details to `components`.

pub mod booking;
pub mod checkout;
pub mod dashboard;
pub mod flats;
pub mod login;
pub mod post_flat;
pub mod reviews;
