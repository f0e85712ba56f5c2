//! Toast stack rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `notify` with the shared `RwSignal<ToastState>`; each toast is
//! dismissed after `TOAST_TTL_MS` or when clicked.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
