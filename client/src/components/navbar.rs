//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session context; shows a placeholder until the session has
//! resolved so signed-in users never see the signed-out links flash.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let account_link = move || {
        let state = auth.get();
        match state.user {
            Some(_) => {
                let label = if state.is_admin() { "Dashboard" } else { "My Profile" };
                view! { <a class="navbar__link" href="/dashboard">{label}</a> }.into_any()
            }
            None => view! { <a class="navbar__link" href="/register">"Register"</a> }.into_any(),
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <header class="navbar navbar--loading"><span class="navbar__brand">"FlatBook"</span></header> }
        >
            <header class="navbar">
                <a class="navbar__brand" href="/">"FlatBook"</a>
                <button
                    class="navbar__menu-toggle"
                    aria-label="menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    <a class="navbar__link" href="/">"Home"</a>
                    <a class="navbar__link" href="/flats">"Flats"</a>
                    <a class="navbar__link" href="/about">"About Us"</a>
                    {account_link}
                </nav>
                <div class="navbar__actions">
                    <a class="btn btn--primary" href="/post">"Add Listing"</a>
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=|| view! { <a class="btn" href="/login">"Login"</a> }
                    >
                        <button class="btn btn--danger" on:click=move |_| sign_out(auth)>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </header>
        </Show>
    }
}
