//! # chat-widget
//!
//! Leptos + WASM floating chat widget for a web front-end. Renders a
//! toggleable chat panel bound to a single persistent conversation session,
//! sends user messages to a backend chat service, and displays the
//! exchange. The backend is an external collaborator reached through two
//! REST endpoints; this crate is the UI layer only.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
