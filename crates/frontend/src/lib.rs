pub mod app;
pub mod document;
pub mod layout;
pub mod pages;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // The API base URL is required; without it nothing renders except a
    // fatal error screen.
    match shared::config::ApiConfig::from_document() {
        Ok(config) => {
            leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
        }
        Err(err) => {
            log::error!("startup aborted: {err}");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <app::ConfigErrorPage message=message /> });
        }
    }
}
