//! Browser half of the invitation site.
//!
//! The server sends fully rendered pages; this crate attaches the event
//! handlers to them so "Browse Templates" and "Go Back" work without a reload.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Called by the generated JS glue once the WASM module has loaded.
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("attaching invitation views to server markup");
    leptos::mount::hydrate_body(app::component);
}
