pub mod api;
pub mod app;
pub mod components;
pub mod llm;
pub mod models;
pub mod prompt;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
