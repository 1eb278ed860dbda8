//! Agentia World Web Frontend
//!
//! Leptos-based WASM single page. Built with `trunk build --release`, which
//! writes into the server's static directory.

mod api;
mod app;
mod components;
mod pages;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
