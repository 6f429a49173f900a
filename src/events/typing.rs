use crate::constants::{
    TERMINAL_PROMPT_SELECTOR, TYPING_ANIMATION, TYPING_RESTART_DELAY_MS, TYPING_TEXT_SELECTOR,
    TYPING_THRESHOLD,
};
use crate::dom;
use crate::state::ResetLatch;
use web_sys as web;

fn restart(document: &web::Document) {
    let Some(text) = dom::query_one(document, TYPING_TEXT_SELECTOR) else {
        return;
    };
    dom::set_style(&text, "animation", "none");
    let text_later = text.clone();
    let scheduled = dom::set_timeout(TYPING_RESTART_DELAY_MS, move || {
        dom::set_style(&text_later, "animation", TYPING_ANIMATION);
    });
    if let Err(e) = scheduled {
        log::warn!("[typing] {:?}", e);
        // Without the timer, restore immediately so the text stays animated
        dom::set_style(&text, "animation", TYPING_ANIMATION);
    }
}

/// Restart the typing animation the first time the terminal prompt is at
/// least half visible. Returns false when the page has no prompt.
pub fn wire(document: &web::Document) -> anyhow::Result<bool> {
    let Some(prompt) = dom::query_one(document, TERMINAL_PROMPT_SELECTOR) else {
        return Ok(false);
    };
    let latch = ResetLatch::new();
    let doc = document.clone();
    let obs = super::reveal::observer(TYPING_THRESHOLD, None, move |entry, obs| {
        if latch.try_fire(entry.is_intersecting()) {
            log::debug!("[typing] restarting animation");
            restart(&doc);
        }
        if latch.has_fired() {
            obs.unobserve(&entry.target());
        }
    })?;
    obs.observe(&prompt);
    Ok(true)
}
