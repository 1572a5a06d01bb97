pub mod app;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod views;

use leptos::prelude::*;
use routes::dom::{self, DomHost, ShellError};
use routes::{Router, RouterConfig};
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;

fn start_router(config: RouterConfig) -> Result<(), ShellError> {
    let table = views::clinic_routes()?;
    let host = DomHost::new(config.clone())?;
    dom::install(Rc::new(Router::new(table, config)), host)
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = RouterConfig::load_from_document();
    let shell_config = config.clone();
    leptos::mount::mount_to_body(move || view! { <app::App config=shell_config /> });

    // the shell is mounted synchronously, so the router finds its elements
    if let Err(e) = start_router(config) {
        log::error!("router not started: {e}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
