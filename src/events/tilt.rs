use crate::constants::{
    TILT_DIVISOR, TILT_LIFT_PX, TILT_NEUTRAL_TRANSFORM, TILT_PERSPECTIVE_PX, TILT_SELECTOR,
};
use crate::dom;
use crate::motion;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn current_element(ev: &web::MouseEvent) -> Option<web::HtmlElement> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
}

fn on_mousemove(ev: &web::MouseEvent) {
    let Some(card) = current_element(ev) else {
        return;
    };
    let rect = card.get_bounding_client_rect();
    let local = DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    let size = DVec2::new(rect.width(), rect.height());
    let (rx, ry) = motion::tilt_angles(local, size, TILT_DIVISOR);
    let transform = motion::tilt_transform(rx, ry, TILT_PERSPECTIVE_PX, TILT_LIFT_PX);
    dom::set_style(&card, "transform", &transform);
}

fn on_mouseleave(ev: &web::MouseEvent) {
    if let Some(card) = current_element(ev) {
        dom::set_style(&card, "transform", TILT_NEUTRAL_TRANSFORM);
    }
}

/// Attach hover tilt to every tiltable card. Returns the number of cards.
pub fn wire(document: &web::Document) -> usize {
    let cards = dom::query_all(document, TILT_SELECTOR);
    if cards.is_empty() {
        return 0;
    }

    // One closure per event kind, shared by all cards
    let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_mousemove(&ev);
    }) as Box<dyn FnMut(_)>);
    let leave_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_mouseleave(&ev);
    }) as Box<dyn FnMut(_)>);

    for card in &cards {
        _ = card
            .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
        _ = card
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
    }
    move_closure.forget();
    leave_closure.forget();
    cards.len()
}
