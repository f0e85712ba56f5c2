//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, session
//! guards, page lifetime) and declarative form handling from page and component logic.

pub mod auth;
pub mod drawer;
pub mod form;
pub mod lifetime;
pub mod storage;
