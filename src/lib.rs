//! # vibes-frame
//!
//! Leptos + WASM widget that walks a viewer through designing, previewing,
//! and deploying a Farcaster frame from a natural-language prompt.
//!
//! The crate holds the host bridge (`sdk`), the generation/deployment
//! capability traits (`services`), the tab flow state machine (`state`), and
//! the Leptos components that render it. Pure logic compiles without any
//! feature so it can be unit-tested natively; browser glue sits behind the
//! `hydrate` feature and server rendering behind `ssr`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod sdk;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
