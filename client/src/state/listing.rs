//! Post-a-flat form schema, upload state, and submission building.
//!
//! DESIGN
//! ======
//! Field validation and the uploaded-image check are both done before the
//! create mutation is built, so a listing without a hosted image can never
//! reach the backend.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::{ApiEnvelope, Flat, NewFlat};
use crate::util::form::{FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues, ValidForm};

pub const FLATS_ROUTE: &str = "/flats";

pub const MISSING_IMAGE_MESSAGE: &str = "Please upload image";
pub const UPLOAD_OK_MESSAGE: &str = "Image uploaded successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Please upload image again";
pub const POSTED_MESSAGE: &str = "Flat posted successfully!";
pub const NOT_CREATED_MESSAGE: &str = "Something went wrong!";

pub const FLAT_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSpec::new("title", "Flat Title", FieldKind::Text, "Flat title is required"),
        FieldSpec::new("squareFeet", "Square Feet", FieldKind::Integer, "Square feet must be a positive number"),
        FieldSpec::new("totalBedrooms", "Total Bedrooms", FieldKind::Integer, "Total bedrooms must be a positive number"),
        FieldSpec::new("totalRooms", "Total Rooms", FieldKind::Integer, "Total rooms must be a positive number"),
        FieldSpec::new("amenities", "Amenities", FieldKind::Text, "Amenities description is required"),
        FieldSpec::new("location", "Location", FieldKind::Text, "Location is required"),
        FieldSpec::new("description", "Description", FieldKind::Text, "Description is required"),
        FieldSpec::new("rent", "Rent", FieldKind::Decimal, "Rent must be a positive number"),
        FieldSpec::new("advanceAmount", "Advance Amount", FieldKind::Decimal, "Advance amount must be a positive number"),
    ],
};

/// Progress of the single listing image upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Uploaded(String),
    Failed(String),
}

impl UploadState {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Uploaded(url) if !url.is_empty() => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingError {
    /// Field messages to render next to the inputs.
    Fields(FieldErrors),
    /// No hosted image yet; reported as a toast.
    MissingImage,
}

/// Validate the form and combine it with the uploaded image URL.
///
/// # Errors
///
/// `Fields` when any input fails validation, `MissingImage` when the inputs
/// are valid but no upload has completed.
pub fn build_listing(values: &FormValues, upload: &UploadState) -> Result<NewFlat, ListingError> {
    let form = FLAT_SCHEMA.validate(values).map_err(ListingError::Fields)?;
    let image = upload.url().ok_or(ListingError::MissingImage)?;
    Ok(new_flat(&form, image))
}

fn new_flat(form: &ValidForm, image: &str) -> NewFlat {
    let text = |name: &str| form.text(name).unwrap_or_default().to_owned();
    NewFlat {
        title: text("title"),
        image: image.to_owned(),
        location: text("location"),
        square_feet: form.integer("squareFeet").unwrap_or_default(),
        total_bedrooms: form.integer("totalBedrooms").unwrap_or_default(),
        total_rooms: form.integer("totalRooms").unwrap_or_default(),
        amenities: text("amenities"),
        description: text("description"),
        rent: form.decimal("rent").unwrap_or_default(),
        advance_amount: form.decimal("advanceAmount").unwrap_or_default(),
    }
}

/// Id of the created flat, if the backend returned one.
#[must_use]
pub fn created_flat_id(envelope: &ApiEnvelope<Flat>) -> Option<&str> {
    envelope.data.as_ref().map(|f| f.id.as_str()).filter(|id| !id.is_empty())
}
