// ============================================================================
// ANNAPURNA AI - canteen attendance client (Rust + WASM, no JS framework)
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::utils::constants::USE_MOCK_DATA;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Full re-render of the mounted app. Views call this indirectly through
/// the AppState change subscription.
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Render failed: {:?}", e);
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!(
        "🍛 Annapurna AI client starting (data source: {})",
        if USE_MOCK_DATA { "mock" } else { "live" }
    );

    let app = App::new()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    rerender_app();
    Ok(())
}
