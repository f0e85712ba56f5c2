//! Flats index: every listing as a card linking to its booking page.

#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;

use leptos::prelude::*;

use crate::components::flat_card::FlatCard;
use crate::components::loading::Spinner;
use crate::net::types::Flat;
use crate::util::lifetime::alive_flag;

#[component]
pub fn FlatsPage() -> impl IntoView {
    let flats = RwSignal::new(Vec::<Flat>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let alive = alive_flag();

    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_flats().await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(list) => flats.set(list),
                Err(e) => {
                    log::warn!("flat list fetch failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = alive;

    view! {
        <div class="flats-page">
            <h1>"Available Flats"</h1>
            <Show when=move || error.get().is_some()>
                <p class="flats-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !flats.get().is_empty()
                    fallback=|| view! { <p class="flats-page__empty">"No flats listed yet."</p> }
                >
                    <div class="flats-page__grid">
                        <For
                            each=move || flats.get()
                            key=|flat| flat.id.clone()
                            children=|flat| view! { <FlatCard flat=flat link=true/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
