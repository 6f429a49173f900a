use crate::constants::{
    REVEALED_CLASS, REVEAL_HIDDEN_OPACITY, REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_TRANSITION,
};
use crate::dom;
use crate::state::RevealState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Build an intersection observer whose callback receives each entry with
/// its observer. The closure is leaked for the page lifetime.
pub fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &obs);
                }
            }
        },
    ) as Box<ObserverCallback>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let obs =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    Ok(obs)
}

fn on_entry(entry: &web::IntersectionObserverEntry, obs: &web::IntersectionObserver) {
    let target = entry.target();
    let classes = target.class_list();
    let mut state = RevealState::from_revealed(classes.contains(REVEALED_CLASS));
    if state.observe(entry.is_intersecting()) {
        _ = classes.add_1(REVEALED_CLASS);
        obs.unobserve(&target);
    } else if state.is_revealed() {
        // Late notification for an element revealed earlier
        obs.unobserve(&target);
    }
}

/// Hide every revealable element and watch it until it first scrolls into
/// view. Returns the number of elements observed.
pub fn wire(document: &web::Document) -> anyhow::Result<usize> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(0);
    }
    let obs = observer(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), on_entry)?;
    for el in &elements {
        dom::set_styles(
            el,
            &[
                ("opacity", REVEAL_HIDDEN_OPACITY),
                ("transform", REVEAL_HIDDEN_TRANSFORM),
                ("transition", REVEAL_TRANSITION),
            ],
        );
        obs.observe(el);
    }
    Ok(elements.len())
}
