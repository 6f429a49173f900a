use crate::anchor;
use crate::constants::ANCHOR_SELECTOR;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn scroll_to_fragment(document: &web::Document, href: &str) {
    let Some(target) = anchor::resolve_target(href, |id| document.get_element_by_id(id)) else {
        log::debug!("[nav] no target for {}", href);
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Replace jump navigation on same-page links with smooth scrolling.
pub fn wire(document: &web::Document) -> usize {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for link in &anchors {
        let doc = document.clone();
        let link_for_click = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(href) = link_for_click.get_attribute("href") {
                scroll_to_fragment(&doc, &href);
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    anchors.len()
}
