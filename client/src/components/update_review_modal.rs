//! Edit dialog for one review row.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::net::types::{Review, ReviewUpdate};
use crate::state::reviews::{REVIEW_SCHEMA, build_update, edit_values};
use crate::util::form::FieldErrors;

/// Modal pre-filled from `review`. `on_save` receives the validated update
/// with the row id; invalid input stays in the dialog.
#[component]
pub fn UpdateReviewModal(
    review: Review,
    on_close: Callback<()>,
    on_save: Callback<(String, ReviewUpdate)>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let values = RwSignal::new(edit_values(&review));
    let errors = RwSignal::new(FieldErrors::default());
    let review_id = review.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        match build_update(&values.get_untracked()) {
            Ok(update) => on_save.run((review_id.clone(), update)),
            Err(field_errors) => errors.set(field_errors),
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--review"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Update Review"</h2>
                <p class="dialog__subtitle">{review.flat_name} " · " {review.location}</p>
                <form class="dialog__form" on:submit=on_submit>
                    {REVIEW_SCHEMA
                        .fields
                        .iter()
                        .map(|spec| view! { <FormField spec=*spec values=values errors=errors disabled=saving/> })
                        .collect_view()}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
