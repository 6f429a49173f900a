use crate::constants::{PARALLAX_BASE_SPEED, PARALLAX_SELECTOR, PARALLAX_SPEED_STEP};
use crate::dom;
use crate::motion;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(decorations: &[web::HtmlElement], scroll_y: f64) {
    for (i, deco) in decorations.iter().enumerate() {
        let y = motion::parallax_offset(scroll_y, i, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP);
        dom::set_style(deco, "transform", &motion::parallax_transform(y));
    }
}

/// Drift decorations against the scroll direction. Decorations are collected
/// once here; later additions to the page are not tracked.
pub fn wire(window: &web::Window, document: &web::Document) -> usize {
    let decorations = dom::query_all(document, PARALLAX_SELECTOR);
    let count = decorations.len();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scroll_y = win.page_y_offset().unwrap_or(0.0);
        apply(&decorations, scroll_y);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
    count
}
