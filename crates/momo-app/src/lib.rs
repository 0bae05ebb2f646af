//! MoMo App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters, builds the session client and hands
//! both to the egui UI.

mod app;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use momo_core::config_store::load_config;
use momo_core::SessionClient;
use momo_platform::http::FetchTransport;
use momo_platform::storage::auto_detect_storage;

const CANVAS_ID: &str = "momo_canvas";

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("MoMo WASM starting...");

    let storage = auto_detect_storage();
    let config = load_config(storage.as_ref()).await;
    log::info!("Backend: {}", config.base_url);
    let client = Rc::new(SessionClient::new(config, Rc::new(FetchTransport::new()), storage));

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        log::error!("No canvas element with id '{}'", CANVAS_ID);
        return;
    };

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::MomoApp::new(cc, client)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}
