use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Error, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "keep");
    let b = state.push(ToastKind::Info, "drop");
    state.dismiss(b);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "x");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE + 2) {
        state.push(ToastKind::Success, format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "t2");
}

#[test]
fn info_is_distinct_from_success() {
    assert_ne!(ToastKind::Info.css_modifier(), ToastKind::Success.css_modifier());
}
