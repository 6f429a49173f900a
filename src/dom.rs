use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`, in document order. An invalid selector
/// yields an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_styles(el: &web::HtmlElement, pairs: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in pairs {
        _ = style.set_property(property, value);
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
