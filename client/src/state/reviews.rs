//! Dashboard review table state and the edit-modal form.
//!
//! DESIGN
//! ======
//! The table owns one `ReviewsState` signal. Fetch results are applied as a
//! whole, so a refetch after an update or delete replaces the rows instead of
//! patching them locally.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use crate::net::api::ApiError;
use crate::net::types::{Review, ReviewUpdate};
use crate::util::form::{FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues};

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

pub const RATING_RANGE_MESSAGE: &str = "Rating must be between 1 and 5";

pub const REVIEW_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSpec::new("rating", "Rating", FieldKind::Integer, "Rating is required"),
        FieldSpec::new("comment", "Comment", FieldKind::Text, "Comment is required"),
    ],
};

pub const TABLE_COLUMNS: [&str; 6] = ["Flat Name", "Location", "Rating", "Comment", "Edit", "Delete"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewsState {
    pub rows: Vec<Review>,
    pub loading: bool,
    pub error: Option<String>,
    /// Row currently open in the edit modal.
    pub selected: Option<Review>,
}

impl Default for ReviewsState {
    fn default() -> Self {
        Self { rows: Vec::new(), loading: true, error: None, selected: None }
    }
}

impl ReviewsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list fetch. Errors keep the previous rows visible.
    pub fn apply_fetch(&mut self, result: Result<Vec<Review>, ApiError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                let stale = self
                    .selected
                    .as_ref()
                    .is_some_and(|selected| !self.rows.iter().any(|r| r.id == selected.id));
                if stale {
                    self.selected = None;
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Open the modal for the row with `id`. Returns `false` for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        self.selected = self.rows.iter().find(|r| r.id == id).cloned();
        self.selected.is_some()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// Modal inputs pre-filled from a row.
#[must_use]
pub fn edit_values(review: &Review) -> FormValues {
    let rating = review.rating.to_string();
    FormValues::from_pairs([("rating", rating.as_str()), ("comment", review.comment.as_str())])
}

/// Validate modal input into an update body.
///
/// # Errors
///
/// Returns field messages for a missing comment or a rating outside 1-5.
pub fn build_update(values: &FormValues) -> Result<ReviewUpdate, FieldErrors> {
    let form = REVIEW_SCHEMA.validate(values)?;
    let rating = form
        .integer("rating")
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .and_then(|r| u8::try_from(r).ok());
    let Some(rating) = rating else {
        let mut errors = FieldErrors::default();
        errors.insert("rating", RATING_RANGE_MESSAGE);
        return Err(errors);
    };
    Ok(ReviewUpdate { rating, comment: form.text("comment").unwrap_or_default().to_owned() })
}
