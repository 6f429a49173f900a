use crate::classes;
use crate::constants::{
    RIPPLE_ANIMATION, RIPPLE_FALLBACK_DURATION_MS, RIPPLE_HOST_STYLE, RIPPLE_OVERLAY_STYLE,
    RIPPLE_TRIGGER_CLASS,
};
use crate::dom;
use crate::motion;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn spawn(document: &web::Document, host: &web::HtmlElement) -> anyhow::Result<()> {
    let ripple = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_styles(&ripple, &RIPPLE_OVERLAY_STYLE);
    dom::set_styles(host, &RIPPLE_HOST_STYLE);
    host.append_child(&ripple)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Each overlay owns its own timer
    let lifetime = motion::ripple_lifetime_ms(RIPPLE_ANIMATION, RIPPLE_FALLBACK_DURATION_MS);
    dom::set_timeout(lifetime, move || ripple.remove())?;
    Ok(())
}

/// Spawn a ripple overlay when the click lands directly on a trigger tag.
pub fn wire(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(host) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        if !classes::has_class(&host.class_name(), RIPPLE_TRIGGER_CLASS) {
            return;
        }
        if let Err(e) = spawn(&doc, &host) {
            log::warn!("[ripple] {:?}", e);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
