//! Page lifetime flag for async completions.
//!
//! DESIGN
//! ======
//! Pages spawn requests with `spawn_local`; nothing cancels them when the
//! page unmounts. Each task holds a clone of the page's flag and checks it
//! before touching signals or navigating.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Flag that reads `true` until the current reactive owner is cleaned up.
pub fn alive_flag() -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let on_unmount = alive.clone();
    on_cleanup(move || on_unmount.store(false, Ordering::Relaxed));
    alive
}
