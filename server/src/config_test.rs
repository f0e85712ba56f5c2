use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.image_host_url, DEFAULT_IMAGE_HOST_URL);
    assert_eq!(config.image_host_api_key, None);
    assert_eq!(config.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
    assert!(!config.cookie_secure);
}

#[test]
fn backend_url_trailing_slashes_trimmed() {
    let config = config_from(&[("BACKEND_URL", "https://api.example.com//")]);
    assert_eq!(config.backend_url, "https://api.example.com");
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "eighty"), ("UPSTREAM_TIMEOUT_SECS", "-3")]);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
}

#[test]
fn explicit_values_are_used() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("IMAGE_HOST_API_KEY", " k-123 "),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
        ("COOKIE_SECURE", "yes"),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.image_host_api_key.as_deref(), Some("k-123"));
    assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    assert!(config.cookie_secure);
}

#[test]
fn blank_api_key_counts_as_absent() {
    assert_eq!(config_from(&[("IMAGE_HOST_API_KEY", "   ")]).image_host_api_key, None);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn from_env_reads_process_environment() {
    // Values depend on the runner's environment; trimming always holds.
    let config = Config::from_env();
    assert!(!config.backend_url.ends_with('/'));
}
