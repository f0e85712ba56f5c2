//! Checkout confirmation shown after a booking request is accepted.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let params = use_params_map();
    let booking_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="checkout-page">
            <h1>"Booking Request Sent"</h1>
            <p>"Your booking request has been received."</p>
            <p class="checkout-page__id">"Booking ID: " <code>{booking_id}</code></p>
            <a class="btn btn--primary" href="/flats">"Browse more flats"</a>
        </div>
    }
}
