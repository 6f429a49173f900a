use wasm_bindgen::JsValue;
use web_sys as web;

const LINES: [(&str, &str); 3] = [
    (
        "%c🚀 Claude Skills Showcase",
        "font-size: 24px; font-weight: bold; color: #06b6d4;",
    ),
    (
        "%cBuilt with Neo-Brutalist Terminal Aesthetic",
        "font-size: 14px; color: #84cc16;",
    ),
    (
        "%cExplore the power of Claude Code Skills!",
        "font-size: 12px; color: #94a3b8;",
    ),
];

// Styled greeting in the devtools console
pub fn print() {
    for (text, css) in LINES {
        web::console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
    }
}
