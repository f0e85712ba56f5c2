use super::*;

// =============================================================
// Flat
// =============================================================

#[test]
fn flat_deserializes_camel_case_fields() {
    let json = serde_json::json!({
        "id": "f-1",
        "title": "Sunny Loft",
        "image": "https://img.example/loft.jpg",
        "location": "Downtown",
        "squareFeet": 500,
        "totalBedrooms": 2,
        "totalRooms": 4,
        "amenities": "wifi",
        "description": "nice",
        "rent": 1200,
        "advanceAmount": 1200.5
    });
    let flat: Flat = serde_json::from_value(json).unwrap();
    assert_eq!(flat.id, "f-1");
    assert_eq!(flat.square_feet, 500);
    assert_eq!(flat.total_bedrooms, 2);
    assert_eq!(flat.total_rooms, 4);
    assert!((flat.rent - 1200.0).abs() < f64::EPSILON);
    assert!((flat.advance_amount - 1200.5).abs() < f64::EPSILON);
}

#[test]
fn flat_accepts_numeric_strings() {
    let json = serde_json::json!({
        "id": "f-2",
        "title": "Old listing",
        "image": "",
        "location": "Uptown",
        "squareFeet": "750",
        "totalBedrooms": "3",
        "totalRooms": " 5 ",
        "amenities": "",
        "description": "",
        "rent": "900.25",
        "advanceAmount": "0"
    });
    let flat: Flat = serde_json::from_value(json).unwrap();
    assert_eq!(flat.square_feet, 750);
    assert_eq!(flat.total_rooms, 5);
    assert!((flat.rent - 900.25).abs() < f64::EPSILON);
}

#[test]
fn flat_rejects_fractional_room_count() {
    let json = serde_json::json!({
        "id": "f-3",
        "title": "t",
        "image": "",
        "location": "",
        "squareFeet": 10,
        "totalBedrooms": 1.5,
        "totalRooms": 2,
        "amenities": "",
        "description": "",
        "rent": 1,
        "advanceAmount": 1
    });
    assert!(serde_json::from_value::<Flat>(json).is_err());
}

#[test]
fn new_flat_serializes_numbers_as_numbers() {
    let flat = NewFlat {
        title: "Sunny Loft".to_owned(),
        image: "https://img.example/a.jpg".to_owned(),
        location: "Downtown".to_owned(),
        square_feet: 500,
        total_bedrooms: 2,
        total_rooms: 4,
        amenities: "wifi".to_owned(),
        description: "nice".to_owned(),
        rent: 1200.0,
        advance_amount: 1200.0,
    };
    let value = serde_json::to_value(&flat).unwrap();
    assert_eq!(value["squareFeet"], serde_json::json!(500));
    assert_eq!(value["totalBedrooms"], serde_json::json!(2));
    assert_eq!(value["rent"], serde_json::json!(1200.0));
    assert_eq!(value["advanceAmount"], serde_json::json!(1200.0));
    assert_eq!(value["image"], "https://img.example/a.jpg");
}

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_role_parses_screaming_case() {
    let json = r#"{"id":"u1","username":"ann","email":"a@x.io","role":"ADMIN"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, None);
    assert_eq!(user.address, None);
}

#[test]
fn user_role_defaults_to_user() {
    let json = r#"{"id":"u1","username":"ann","email":"a@x.io","name":"Ann","address":"Main St"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.name.as_deref(), Some("Ann"));
}

#[test]
fn role_slug_is_lowercase() {
    assert_eq!(Role::Admin.slug(), "admin");
    assert_eq!(Role::User.slug(), "user");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn envelope_without_data_is_none() {
    let json = r#"{"success":false,"message":"You have already booked this flat"}"#;
    let env: ApiEnvelope<Booking> = serde_json::from_str(json).unwrap();
    assert!(env.data.is_none());
    assert_eq!(env.success, Some(false));
}

#[test]
fn envelope_with_booking_data() {
    let json = r#"{"success":true,"message":"ok","data":{"id":"b1","flatId":"f1","status":"PENDING"}}"#;
    let env: ApiEnvelope<Booking> = serde_json::from_str(json).unwrap();
    let booking = env.data.unwrap();
    assert_eq!(booking.id, "b1");
    assert_eq!(booking.flat_id.as_deref(), Some("f1"));
    assert_eq!(booking.user_id, None);
}

#[test]
fn envelope_with_only_data_leaves_other_fields_none() {
    let env: ApiEnvelope<Booking> = serde_json::from_str(r#"{"data":{"id":"b7"}}"#).unwrap();
    assert_eq!(env.success, None);
    assert_eq!(env.message, None);
    assert_eq!(env.data.map(|b| b.id).as_deref(), Some("b7"));
}

#[test]
fn booking_without_flat_id_still_decodes() {
    let booking: Booking = serde_json::from_str(r#"{"id":"b1","userId":"u1"}"#).unwrap();
    assert_eq!(booking.id, "b1");
    assert_eq!(booking.flat_id, None);
    assert_eq!(booking.user_id.as_deref(), Some("u1"));
}

#[test]
fn booking_request_serializes_flat_id_camel_case() {
    let body = BookingRequest { flat_id: "f9".to_owned() };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"flatId":"f9"}"#);
}

#[test]
fn login_response_tolerates_null_data() {
    let resp: LoginResponse = serde_json::from_str(r#"{"message":"Invalid credentials","data":null}"#).unwrap();
    assert_eq!(resp.message, "Invalid credentials");
    assert!(resp.data.is_none());
}

#[test]
fn review_rating_accepts_string() {
    let json = r#"{"id":"r1","flatName":"Loft","location":"Downtown","rating":"4","comment":"good"}"#;
    let review: Review = serde_json::from_str(json).unwrap();
    assert_eq!(review.rating, 4);
}
