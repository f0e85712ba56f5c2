use super::*;

fn review(id: &str, rating: u8) -> Review {
    Review {
        id: id.to_owned(),
        flat_name: format!("Flat {id}"),
        location: "Downtown".to_owned(),
        rating,
        comment: "quiet street".to_owned(),
    }
}

fn loaded() -> ReviewsState {
    let mut state = ReviewsState::default();
    state.apply_fetch(Ok(vec![review("r1", 4), review("r2", 2)]));
    state
}

// =============================================================
// ReviewsState
// =============================================================

#[test]
fn initial_state_is_loading_and_empty() {
    let state = ReviewsState::default();
    assert!(state.loading);
    assert!(state.rows.is_empty());
    assert_eq!(state.error, None);
    assert!(!state.is_modal_open());
}

#[test]
fn fetch_success_fills_rows() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.rows.len(), 2);
}

#[test]
fn fetch_error_keeps_rows_and_records_message() {
    let mut state = loaded();
    state.start_loading();
    state.apply_fetch(Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(!state.loading);
}

#[test]
fn select_opens_modal_with_row() {
    let mut state = loaded();
    assert!(state.select("r2"));
    assert_eq!(state.selected.as_ref().map(|r| r.rating), Some(2));
    state.close();
    assert!(!state.is_modal_open());
}

#[test]
fn select_unknown_id_keeps_modal_closed() {
    let mut state = loaded();
    assert!(!state.select("nope"));
    assert!(!state.is_modal_open());
}

#[test]
fn refetch_without_selected_row_closes_modal() {
    let mut state = loaded();
    state.select("r1");
    state.apply_fetch(Ok(vec![review("r2", 2)]));
    assert!(!state.is_modal_open());
}

// =============================================================
// edit form
// =============================================================

#[test]
fn edit_values_prefill_from_row() {
    let values = edit_values(&review("r1", 4));
    assert_eq!(values.get("rating"), "4");
    assert_eq!(values.get("comment"), "quiet street");
}

#[test]
fn build_update_accepts_valid_input() {
    let values = FormValues::from_pairs([("rating", "5"), ("comment", " great ")]);
    assert_eq!(build_update(&values), Ok(ReviewUpdate { rating: 5, comment: "great".to_owned() }));
}

#[test]
fn build_update_rejects_out_of_range_rating() {
    for raw in ["0", "6", "42"] {
        let values = FormValues::from_pairs([("rating", raw), ("comment", "ok")]);
        let errors = build_update(&values).unwrap_err();
        assert_eq!(errors.get("rating"), Some(RATING_RANGE_MESSAGE));
    }
}

#[test]
fn build_update_requires_comment() {
    let values = FormValues::from_pairs([("rating", "3"), ("comment", "")]);
    let errors = build_update(&values).unwrap_err();
    assert_eq!(errors.get("comment"), Some("Comment is required"));
}

#[test]
fn columns_include_delete() {
    assert_eq!(TABLE_COLUMNS.last(), Some(&"Delete"));
}
