//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls through the host proxy, `cache` holds the
//! tag-invalidated read cache, and `types` defines the shared wire schema.

pub mod api;
pub mod cache;
pub mod types;
