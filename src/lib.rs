#![cfg(target_arch = "wasm32")]
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod anchor;
mod banner;
mod classes;
mod constants;
mod dom;
mod events;
mod motion;
mod state;
mod styles;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-fx starting");

    if let Err(e) = schedule_init() {
        log::error!("init error: {:?}", e);
    }
    banner::print();
    Ok(())
}

// Run `init` once the document structure exists
fn schedule_init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if !state::should_defer(&document.ready_state()) {
        return init(&window, &document);
    }

    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::once_into_js(move || {
        if let Err(e) = init(&win, &doc) {
            log::error!("init error: {:?}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Behaviors are independent; one failing does not stop the rest
    if let Err(e) = styles::inject_all(document) {
        log::warn!("[styles] {:?}", e);
    }

    let cards = events::tilt::wire(document);
    log::info!("[tilt] wired {} cards", cards);

    let anchors = events::nav::wire(document);
    log::info!("[nav] wired {} anchors", anchors);

    match events::reveal::wire(document) {
        Ok(n) => log::info!("[reveal] observing {} elements", n),
        Err(e) => log::warn!("[reveal] {:?}", e),
    }

    let decorations = events::parallax::wire(window, document);
    log::info!("[parallax] tracking {} decorations", decorations);

    events::ripple::wire(document);

    match events::typing::wire(document) {
        Ok(true) => log::info!("[typing] watching terminal prompt"),
        Ok(false) => log::debug!("[typing] no terminal prompt, skipped"),
        Err(e) => log::warn!("[typing] {:?}", e),
    }

    Ok(())
}
