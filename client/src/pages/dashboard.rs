//! Dashboard layout and the profile page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/*` route renders inside `DashboardLayout`, which owns the
//! session guard and the role-aware sidebar. Child pages read the session
//! from context and never re-check it.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Spinner;
use crate::components::sidebar::SideBar;
use crate::state::auth::AuthState;
use crate::state::booking::or_not_provided;
use crate::util::auth::{install_unauth_redirect, sign_out};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let greeting = move || auth.get().user.map(|u| format!("Hi, {}", u.username)).unwrap_or_default();

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        {move || if auth.get().loading { view! { <Spinner/> }.into_any() } else { view! { <p>"Redirecting to login..."</p> }.into_any() }}
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <SideBar/>
                <main class="dashboard-page__main">
                    <header class="dashboard-page__header toolbar">
                        <span class="toolbar__self">{greeting}</span>
                        <span class="toolbar__spacer"></span>
                        <button class="btn toolbar__logout" on:click=move |_| sign_out(auth) title="Logout">
                            "Logout"
                        </button>
                    </header>
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |pick: fn(&crate::net::types::User) -> Option<String>| {
        or_not_provided(auth.get().user.as_ref().and_then(pick).as_deref())
    };

    view! {
        <section class="profile-page">
            <h1>"My Profile"</h1>
            <dl class="profile-page__fields">
                <dt>"Username"</dt>
                <dd>{move || field(|u| Some(u.username.clone()))}</dd>
                <dt>"Email"</dt>
                <dd>{move || field(|u| Some(u.email.clone()))}</dd>
                <dt>"Name"</dt>
                <dd>{move || field(|u| u.name.clone())}</dd>
                <dt>"Address"</dt>
                <dd>{move || field(|u| u.address.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{move || field(|u| Some(u.role.slug().to_owned()))}</dd>
            </dl>
        </section>
    }
}
