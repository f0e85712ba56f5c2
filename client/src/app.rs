//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::pages::{
    booking::BookingPage,
    checkout::CheckoutPage,
    dashboard::{DashboardLayout, ProfilePage},
    flats::FlatsPage,
    login::LoginPage,
    post_flat::PostFlatPage,
    reviews::ReviewsPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::auth::resolve_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Booking route with the default copy and checkout redirect.
fn booking_view() -> impl IntoView {
    view! { <BookingPage/> }
}

/// Root application component.
///
/// Provides the session and toast contexts, starts session resolution, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    resolve_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/flatbook.css"/>
        <Title text="FlatBook"/>

        <Router>
            <Navbar/>
            <Toaster/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FlatsPage/>
                    <Route path=StaticSegment("flats") view=FlatsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("post") view=PostFlatPage/>
                    <Route path=(StaticSegment("booking"), ParamSegment("id")) view=booking_view/>
                    <Route path=(StaticSegment("checkout"), ParamSegment("id")) view=CheckoutPage/>
                    <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                        <Route path=StaticSegment("") view=ProfilePage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("reviews")) view=ReviewsPage/>
                        <Route path=StaticSegment("all-reviews") view=ReviewsPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
