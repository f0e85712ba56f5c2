use std::sync::atomic::Ordering;

use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn flag_starts_alive() {
    let owner = Owner::new();
    let alive = owner.with(alive_flag);
    assert!(alive.load(Ordering::Relaxed));
}

#[test]
fn flag_clears_when_page_owner_is_cleaned_up() {
    let owner = Owner::new();
    let alive = owner.with(alive_flag);
    let task_copy = alive.clone();

    owner.cleanup();

    assert!(!alive.load(Ordering::Relaxed));
    assert!(!task_copy.load(Ordering::Relaxed));
}

#[test]
fn sibling_pages_have_independent_flags() {
    let left = Owner::new();
    let right = Owner::new();
    let left_alive = left.with(alive_flag);
    let right_alive = right.with(alive_flag);

    left.cleanup();

    assert!(!left_alive.load(Ordering::Relaxed));
    assert!(right_alive.load(Ordering::Relaxed));
}
