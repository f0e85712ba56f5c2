use super::*;
use crate::net::types::{ApiEnvelope, Flat};

fn sunny_loft() -> FormValues {
    FormValues::from_pairs([
        ("title", "Sunny Loft"),
        ("squareFeet", "500"),
        ("totalBedrooms", "2"),
        ("totalRooms", "4"),
        ("amenities", "wifi"),
        ("location", "Downtown"),
        ("description", "nice"),
        ("rent", "1200"),
        ("advanceAmount", "1200"),
    ])
}

const IMAGE: &str = "https://i.ibb.co/abc/loft.jpg";

// =============================================================
// build_listing
// =============================================================

#[test]
fn sunny_loft_builds_numeric_payload_with_image() {
    let flat = build_listing(&sunny_loft(), &UploadState::Uploaded(IMAGE.to_owned())).unwrap();
    assert_eq!(flat.title, "Sunny Loft");
    assert_eq!(flat.square_feet, 500);
    assert_eq!(flat.total_bedrooms, 2);
    assert_eq!(flat.total_rooms, 4);
    assert_eq!(flat.amenities, "wifi");
    assert_eq!(flat.location, "Downtown");
    assert_eq!(flat.description, "nice");
    assert!((flat.rent - 1200.0).abs() < f64::EPSILON);
    assert!((flat.advance_amount - 1200.0).abs() < f64::EPSILON);
    assert_eq!(flat.image, IMAGE);

    let wire = serde_json::to_value(&flat).unwrap();
    assert!(wire["squareFeet"].is_u64());
    assert!(wire["rent"].is_f64());
}

#[test]
fn missing_image_blocks_valid_form() {
    for upload in [UploadState::Idle, UploadState::Uploading, UploadState::Failed("x".to_owned())] {
        assert_eq!(build_listing(&sunny_loft(), &upload), Err(ListingError::MissingImage));
    }
}

#[test]
fn missing_image_blocks_invalid_form_too() {
    let result = build_listing(&FormValues::default(), &UploadState::Idle);
    assert!(matches!(result, Err(ListingError::Fields(_))));
}

#[test]
fn non_numeric_rent_is_rejected_at_validation() {
    let mut values = sunny_loft();
    values.set("rent", "twelve hundred");
    let Err(ListingError::Fields(errors)) = build_listing(&values, &UploadState::Uploaded(IMAGE.to_owned())) else {
        panic!("expected field errors");
    };
    assert_eq!(errors.get("rent"), Some("Rent must be a number"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn empty_fields_use_schema_messages() {
    let Err(ListingError::Fields(errors)) = build_listing(&FLAT_SCHEMA.blank_values(), &UploadState::Idle) else {
        panic!("expected field errors");
    };
    assert_eq!(errors.len(), FLAT_SCHEMA.fields.len());
    assert_eq!(errors.get("title"), Some("Flat title is required"));
    assert_eq!(errors.get("advanceAmount"), Some("Advance amount must be a positive number"));
}

// =============================================================
// UploadState / created_flat_id
// =============================================================

#[test]
fn empty_upload_url_is_not_an_image() {
    assert_eq!(UploadState::Uploaded(String::new()).url(), None);
    assert!(UploadState::Uploading.is_uploading());
    assert!(!UploadState::Idle.is_uploading());
}

#[test]
fn created_flat_id_requires_data() {
    let empty: ApiEnvelope<Flat> = ApiEnvelope { success: Some(false), message: None, data: None };
    assert_eq!(created_flat_id(&empty), None);

    let json = serde_json::json!({
        "data": {
            "id": "f77", "title": "t", "image": IMAGE, "location": "l",
            "squareFeet": 1, "totalBedrooms": 1, "totalRooms": 1,
            "amenities": "", "description": "", "rent": 1, "advanceAmount": 1
        }
    });
    let created: ApiEnvelope<Flat> = serde_json::from_value(json).unwrap();
    assert_eq!(created_flat_id(&created), Some("f77"));
}
