//! Dashboard review table with edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come from the cached `review` read. Update and delete both invalidate
//! that tag, so the refetch that follows every write goes to the network.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures render above the table; write failures are toasts. All
//! completions are dropped once the page has unmounted.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;

use leptos::prelude::*;

use crate::components::loading::Spinner;
use crate::components::update_review_modal::UpdateReviewModal;
use crate::net::types::ReviewUpdate;
use crate::state::reviews::{ReviewsState, TABLE_COLUMNS};
use crate::state::toast::ToastState;
use crate::util::lifetime::alive_flag;

/// Refetch the review list into `state` unless the page is gone.
fn load_reviews(state: RwSignal<ReviewsState>, alive: Arc<AtomicBool>) {
    state.update(ReviewsState::start_loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_reviews().await;
        if alive.load(Ordering::Relaxed) {
            state.update(|s| s.apply_fetch(result));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = alive;
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ReviewsState::default());
    let saving = RwSignal::new(false);
    let alive = alive_flag();

    load_reviews(state, alive.clone());

    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));
    let on_close = Callback::new(move |()| state.update(ReviewsState::close));

    let on_save = Callback::new({
        let alive = alive.clone();
        move |(review_id, update): (String, ReviewUpdate)| {
            saving.set(true);
            #[cfg(feature = "hydrate")]
            {
                use crate::components::toaster::notify;
                use crate::state::toast::ToastKind;

                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::update_review(&review_id, &update).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    saving.set(false);
                    match result {
                        Ok(()) => {
                            notify(toasts, ToastKind::Success, "Review updated");
                            state.update(ReviewsState::close);
                            load_reviews(state, alive);
                        }
                        Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (review_id, update, &alive, toasts);
            }
        }
    });

    let on_delete = Callback::new({
        let alive = alive.clone();
        move |review_id: String| {
            #[cfg(feature = "hydrate")]
            {
                use crate::components::toaster::notify;
                use crate::state::toast::ToastKind;

                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::delete_review(&review_id).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(()) => {
                            notify(toasts, ToastKind::Success, "Review deleted");
                            load_reviews(state, alive);
                        }
                        Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (review_id, &alive);
            }
        }
    });

    view! {
        <section class="reviews-page">
            <h1>"All Reviews"</h1>
            <Show when=move || state.get().error.is_some()>
                <p class="reviews-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !state.get().loading || !state.get().rows.is_empty() fallback=|| view! { <Spinner/> }>
                <table class="reviews-table">
                    <thead>
                        <tr>{TABLE_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.get().rows
                            key=|row| (row.id.clone(), row.rating, row.comment.clone())
                            children=move |row| {
                                let edit_id = row.id.clone();
                                let delete_id = row.id.clone();
                                view! {
                                    <tr>
                                        <th scope="row">{row.flat_name}</th>
                                        <td>{row.location}</td>
                                        <td>{row.rating}</td>
                                        <td>{row.comment}</td>
                                        <td>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    state.update(|s| {
                                                        s.select(&edit_id);
                                                    });
                                                }
                                            >
                                                "Update"
                                            </button>
                                        </td>
                                        <td>
                                            <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
            {move || {
                selected
                    .get()
                    .map(|review| view! { <UpdateReviewModal review=review on_close=on_close on_save=on_save saving=saving/> })
            }}
        </section>
    }
}
