//! Booking page: flat summary, renter details, and the booking request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/booking/{id}` behind the session guard. The flat and the
//! renter profile are cached reads, reloaded whenever `id` changes; the
//! booking request invalidates both `booking` and `flat` entries.
//!
//! ERROR HANDLING
//! ==============
//! A failed request shows the configured failure toast, renders the error
//! under the submit button, and releases the submit lock for a retry.
//! Responses that land after the page unmounts are dropped.

#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::flat_card::FlatCard;
use crate::components::loading::{InlineLoading, Spinner};
use crate::net::types::{Flat, User};
use crate::state::auth::AuthState;
use crate::state::booking::{BookingConfig, BookingState, LoadingStyle, MISSING_FLAT_MESSAGE, or_not_provided, route_flat_id};
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::lifetime::alive_flag;

#[derive(Clone, Debug, Default)]
struct BookingData {
    flat: Option<Flat>,
    profile: Option<User>,
    loading: bool,
    error: Option<String>,
}

#[component]
pub fn BookingPage(#[prop(optional)] config: BookingConfig) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    install_unauth_redirect(auth, navigate.clone());

    let flat_id = Memo::new(move |_| route_flat_id(params.with(|p| p.get("id"))));
    let data = RwSignal::new(BookingData { loading: true, ..BookingData::default() });
    let booking = RwSignal::new(BookingState::default());
    let alive = alive_flag();

    // Reload flat and profile whenever the route id changes.
    Effect::new({
        let alive = alive.clone();
        move |_| {
            let Some(id) = flat_id.get() else {
                data.set(BookingData { error: Some(MISSING_FLAT_MESSAGE.to_owned()), ..BookingData::default() });
                return;
            };
            data.set(BookingData { loading: true, ..BookingData::default() });
            booking.set(BookingState::default());
            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let (flat, profile) =
                        futures::join!(crate::net::api::fetch_flat(&id), crate::net::api::fetch_current_user());
                    if !alive.load(Ordering::Relaxed) || flat_id.get_untracked().as_deref() != Some(id.as_str()) {
                        return;
                    }
                    let error = flat.as_ref().err().or(profile.as_ref().err()).map(ToString::to_string);
                    data.set(BookingData { flat: flat.ok(), profile: profile.ok(), loading: false, error });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&alive, id);
            }
        }
    });

    let on_book = move |_| {
        let Some(id) = flat_id.get_untracked() else {
            return;
        };
        if !booking.try_update(BookingState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::state::booking::{classify_booking, resolve};

            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = classify_booking(crate::net::api::request_booking(&id).await);
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let crate::state::booking::BookingOutcome::Failed(message) = &outcome {
                    log::warn!("booking request failed: {message}");
                }
                let resolution = resolve(&config, &outcome);
                crate::components::toaster::notify(toasts, resolution.toast_kind, resolution.toast_message);
                // The route moved to another flat while this request ran.
                if flat_id.get_untracked().as_deref() != Some(id.as_str()) {
                    return;
                }
                booking.update(|b| b.finish(&outcome));
                if let Some(route) = resolution.navigate_to {
                    navigate(&route, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&alive, id, toasts);
        }
    };

    let profile_field = move |pick: fn(&User) -> Option<String>| {
        or_not_provided(data.get().profile.as_ref().and_then(pick).as_deref())
    };
    let flat_field = move |pick: fn(&Flat) -> String| data.get().flat.as_ref().map(pick).unwrap_or_default();

    let details = view! {
        <section class="booking-page__details">
            <div class="info-box">
                <h2>"User Information"</h2>
                <p>"Username: " {move || profile_field(|u| Some(u.username.clone()))}</p>
                <p>"Email: " {move || profile_field(|u| Some(u.email.clone()))}</p>
                <p>"Name: " {move || profile_field(|u| u.name.clone())}</p>
                <p>"Address: " {move || profile_field(|u| u.address.clone())}</p>
            </div>
            <div class="info-box">
                <h2>"Flat Information"</h2>
                <p>"Title: " {move || flat_field(|f| f.title.clone())}</p>
                <p>"Location: " {move || flat_field(|f| f.location.clone())}</p>
                <p>"Bedrooms: " {move || flat_field(|f| f.total_bedrooms.to_string())}</p>
                <p>"Total Rooms: " {move || flat_field(|f| f.total_rooms.to_string())}</p>
                <p>"Advance Amount: " {move || flat_field(|f| f.advance_amount.to_string())}</p>
                <p>"Rent: " {move || flat_field(|f| f.rent.to_string())}</p>
            </div>
        </section>
    };

    let spinner_active = move || config.loading == LoadingStyle::Spinner && data.get().loading;

    view! {
        <Show when=spinner_active>
            <Spinner/>
        </Show>
        <div class="booking-page" class:hidden=spinner_active>
            <h1>"Book Your Desired Flat"</h1>
            <p class="booking-page__subtitle">"Always we are with you!"</p>
            <Show when=move || data.get().loading>
                <InlineLoading/>
            </Show>
            <Show when=move || data.get().error.is_some()>
                <p class="booking-page__error">{move || data.get().error.unwrap_or_default()}</p>
            </Show>
            {move || data.get().flat.map(|flat| view! { <FlatCard flat=flat/> })}
            {details}
            <button
                class="btn btn--primary booking-page__submit"
                disabled=move || !booking.get().can_submit() || data.get().flat.is_none()
                on:click=on_book
            >
                "Book Now"
            </button>
            <Show when=move || booking.get().error.is_some()>
                <p class="booking-page__error">{move || booking.get().error.unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
