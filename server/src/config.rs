//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one `Config` that is
//! shared read-only through `AppState`. Every variable has a default except
//! the image host key; without it uploads answer 503 and the rest of the
//! host works normally.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_IMAGE_HOST_URL: &str = "https://api.imgbb.com/1/upload";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend REST base URL without a trailing `/`.
    pub backend_url: String,
    pub image_host_url: String,
    pub image_host_api_key: Option<String>,
    pub upstream_timeout: Duration,
    pub cookie_secure: bool,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:5000`
    /// - `IMAGE_HOST_URL`: default imgbb upload endpoint
    /// - `IMAGE_HOST_API_KEY`: uploads disabled when absent
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default off
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let backend_url = non_blank("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let image_host_url = non_blank("IMAGE_HOST_URL").unwrap_or_else(|| DEFAULT_IMAGE_HOST_URL.to_owned());
        let timeout_secs = env_parse(non_blank("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Self {
            port: env_parse(non_blank("PORT"), DEFAULT_PORT),
            backend_url,
            image_host_url,
            image_host_api_key: non_blank("IMAGE_HOST_API_KEY"),
            upstream_timeout: Duration::from_secs(timeout_secs),
            cookie_secure: non_blank("COOKIE_SECURE").and_then(|raw| parse_bool(&raw)).unwrap_or(false),
        }
    }
}

fn env_parse<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
