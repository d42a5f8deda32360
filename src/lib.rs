//! Browser client for land-analysis image classification.
//!
//! ARCHITECTURE
//! ============
//! A client-side-rendered Leptos app. `pages` own route-scoped orchestration,
//! `components` render the interaction surfaces, `net` talks to the external
//! prediction service, `state` holds the shared signals, and `util` isolates
//! browser/environment concerns so page and component logic stays testable.
//!
//! Browser-only code is gated behind the `csr` feature; with default features
//! the crate compiles natively with no-op fallbacks so the unit-test suite
//! runs under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Initialize logging and mount the root component onto the document body.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
