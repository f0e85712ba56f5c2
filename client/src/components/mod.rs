//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome, cards, dialogs, and form inputs while
//! reading shared session and toast state from Leptos context providers.

pub mod flat_card;
pub mod form_field;
pub mod loading;
pub mod navbar;
pub mod sidebar;
pub mod toaster;
pub mod update_review_modal;
