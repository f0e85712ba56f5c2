//! Loading placeholders.

use leptos::prelude::*;

/// Full-area spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="progressbar" aria-label="Loading">
            <span class="spinner__ring"></span>
        </div>
    }
}

/// One-line loading text for inline placements.
#[component]
pub fn InlineLoading(#[prop(default = "Loading...")] text: &'static str) -> impl IntoView {
    view! { <p class="loading-inline">{text}</p> }
}
