//! Post-a-flat page: listing form plus one required image upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The image is relayed through the host's `/upload/image` endpoint as soon
//! as it is picked; the listing is only created once the hosted URL is known.
//! A created listing invalidates the `flat` cache tag and sends the user to
//! the flats index.
//!
//! ERROR HANDLING
//! ==============
//! Field problems render next to the inputs, upload and missing-image
//! problems are toasts, and a failed create request renders above the submit
//! button. Upload and create answers that land after the page unmounts are
//! dropped.

#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::toaster::notify;
use crate::state::auth::AuthState;
use crate::state::listing::{FLAT_SCHEMA, ListingError, MISSING_IMAGE_MESSAGE, UploadState, build_listing};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::FieldErrors;
use crate::util::lifetime::alive_flag;

#[component]
pub fn PostFlatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let values = RwSignal::new(FLAT_SCHEMA.blank_values());
    let errors = RwSignal::new(FieldErrors::default());
    let upload = RwSignal::new(UploadState::Idle);
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let alive = alive_flag();

    let upload_alive = alive.clone();
    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::listing::{UPLOAD_FAILED_MESSAGE, UPLOAD_OK_MESSAGE};

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            upload.set(UploadState::Uploading);
            let alive = upload_alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_image(file).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(url) => {
                        upload.set(UploadState::Uploaded(url));
                        notify(toasts, ToastKind::Success, UPLOAD_OK_MESSAGE);
                    }
                    Err(e) => {
                        log::warn!("image upload failed: {e}");
                        upload.set(UploadState::Failed(e.to_string()));
                        notify(toasts, ToastKind::Error, UPLOAD_FAILED_MESSAGE);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &upload_alive);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let flat = match build_listing(&values.get_untracked(), &upload.get_untracked()) {
            Ok(flat) => flat,
            Err(ListingError::Fields(field_errors)) => {
                errors.set(field_errors);
                return;
            }
            Err(ListingError::MissingImage) => {
                notify(toasts, ToastKind::Error, MISSING_IMAGE_MESSAGE);
                return;
            }
        };
        busy.set(true);
        submit_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::listing::{FLATS_ROUTE, NOT_CREATED_MESSAGE, POSTED_MESSAGE, created_flat_id};

            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_flat(&flat).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(envelope) if created_flat_id(&envelope).is_some() => {
                        notify(toasts, ToastKind::Success, POSTED_MESSAGE);
                        values.set(FLAT_SCHEMA.blank_values());
                        upload.set(UploadState::Idle);
                        navigate(FLATS_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Ok(_) => notify(toasts, ToastKind::Error, NOT_CREATED_MESSAGE),
                    Err(e) => {
                        log::warn!("create flat failed: {e}");
                        submit_error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (flat, &navigate, &alive);
        }
    };

    let upload_status = move || match upload.get() {
        UploadState::Idle => "No image selected".to_owned(),
        UploadState::Uploading => "Uploading...".to_owned(),
        UploadState::Uploaded(_) => "Image ready".to_owned(),
        UploadState::Failed(message) => format!("Upload failed: {message}"),
    };

    view! {
        <div class="post-page">
            <h1>"Post Your Flat"</h1>
            <form class="post-form" on:submit=on_submit>
                <div class="post-form__grid">
                    {FLAT_SCHEMA
                        .fields
                        .iter()
                        .map(|spec| view! { <FormField spec=*spec values=values errors=errors/> })
                        .collect_view()}
                </div>
                <label class="form-field">
                    <span class="form-field__label">"Flat Image*"</span>
                    <input
                        class="form-field__input"
                        type="file"
                        accept="image/*"
                        disabled=move || upload.get().is_uploading()
                        on:change=on_file
                    />
                    <span class="form-field__hint">{upload_status}</span>
                    <Show when=move || upload.get().url().is_some()>
                        <img class="post-form__preview" src=move || upload.get().url().unwrap_or_default().to_owned() alt="Uploaded flat"/>
                    </Show>
                </label>
                <Show when=move || submit_error.get().is_some()>
                    <p class="post-form__error">{move || submit_error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || upload.get().is_uploading()
                >
                    {move || if busy.get() { "Posting..." } else { "Post Flat" }}
                </button>
            </form>
        </div>
    }
}
