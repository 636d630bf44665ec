//! # medicare-client
//!
//! Leptos + WASM frontend for the MediCare clinic management console.
//! Role-gated CRUD screens for patients, doctors, and billing records,
//! backed by a remote REST API.
//!
//! The interesting parts live in `state::session` (the credential store),
//! `net::api` (the authenticated request pipeline), and
//! `components::protected_route` (the per-navigation route guard). The
//! pages are uniform list/form/detail plumbing over the API client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrates the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
