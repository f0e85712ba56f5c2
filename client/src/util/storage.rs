//! Durable browser storage for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the token under a single `localStorage` key; session
//! resolution reads it on every load and the REST helpers attach it to
//! authenticated requests. SSR paths no-op.

/// `localStorage` key holding the backend session token.
pub const AUTH_KEY: &str = "accessToken";

/// Read the stored session token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(AUTH_KEY).ok().flatten()?;
        normalize_token(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(AUTH_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the session token.
pub fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(AUTH_KEY);
        }
    }
}

/// Trim a stored token; blank strings count as absent.
pub fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
