//! Login page: identifier + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the token, hands it to the host so the session
//! cookie is set, and then forces a full page load so every server-rendered
//! view sees the new session. A rejected login renders the backend message
//! above the form and touches nothing else.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::form_field::FormField;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify;
use crate::net::types::{LoginRequest, LoginResponse};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;
use crate::util::form::{FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues};

pub const LOGIN_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSpec::new("identifier", "Username or Email", FieldKind::Text, "Username or email is required"),
        FieldSpec::new("password", "Password", FieldKind::Password, "Password is required"),
    ],
};

/// Target handed to the host's token setter.
pub const POST_LOGIN_ROUTE: &str = "/dashboard";

const REJECTED_FALLBACK: &str = "Login failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { token: String, message: String },
    Rejected(String),
}

/// A login succeeded only when the response carries a non-empty token.
pub fn login_outcome(response: &LoginResponse) -> LoginOutcome {
    let token = response
        .data
        .as_ref()
        .and_then(|d| d.token.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty());
    match token {
        Some(token) => LoginOutcome::Success { token: token.to_owned(), message: response.message.clone() },
        None if response.message.trim().is_empty() => LoginOutcome::Rejected(REJECTED_FALLBACK.to_owned()),
        None => LoginOutcome::Rejected(response.message.clone()),
    }
}

/// Where to send the browser after the token setter answers.
pub fn redirect_target(echoed: Option<&str>) -> String {
    match echoed.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

pub(crate) fn login_request(values: &FormValues) -> Result<LoginRequest, FieldErrors> {
    let form = LOGIN_SCHEMA.validate(values)?;
    Ok(LoginRequest {
        identifier: form.text("identifier").unwrap_or_default().to_owned(),
        password: form.text("password").unwrap_or_default().to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let values = RwSignal::new(LOGIN_SCHEMA.blank_values());
    let errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match login_request(&values.get_untracked()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await.map(|r| login_outcome(&r)) {
                    Ok(LoginOutcome::Success { token, message }) => {
                        notify(toasts, ToastKind::Success, message);
                        crate::util::storage::save_token(&token);
                        let echoed = match crate::net::api::set_access_token(&token, POST_LOGIN_ROUTE).await {
                            Ok(redirect) => Some(redirect),
                            Err(e) => {
                                log::warn!("session cookie not set: {e}");
                                None
                            }
                        };
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&redirect_target(echoed.as_deref()));
                        }
                    }
                    Ok(LoginOutcome::Rejected(message)) => {
                        error.set(message);
                        busy.set(false);
                    }
                    Err(e) => {
                        log::warn!("login request failed: {e}");
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back!"</h1>
                <p class="login-card__subtitle">
                    "Still don't have an account? "
                    <a href="/register">"Create an account"</a>
                </p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    {LOGIN_SCHEMA
                        .fields
                        .iter()
                        .map(|spec| view! { <FormField spec=*spec values=values errors=errors/> })
                        .collect_view()}
                    <a class="login-form__forgot" href="/">"Forgot Password?"</a>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
