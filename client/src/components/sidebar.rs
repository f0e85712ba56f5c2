//! Dashboard sidebar built from the role's drawer items.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::drawer::drawer_items;

#[component]
pub fn SideBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let items = move || auth.get().role().map(drawer_items).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/">"FlatBook"</a>
            <ul class="sidebar__list">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| {
                            let href = item.href();
                            let active = move || item.is_active(&pathname.get());
                            view! {
                                <li class="sidebar__item" class:sidebar__item--active=active>
                                    <a href=href>{item.title}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}
