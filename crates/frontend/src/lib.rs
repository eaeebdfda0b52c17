//! BackstagePass challenge feed - Yew WASM frontend
//!
//! Renders the nine-day challenge screen on top of `challenge_core`.

mod app;
mod components;
mod pages;
mod storage;

pub use app::App;

/// WASM entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
