// Host-side tests for constants and the bundled stylesheets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use constants::*;

const REVEAL_CSS: &str = include_str!("../styles/reveal.css");
const RIPPLE_CSS: &str = include_str!("../styles/ripple.css");

fn overlay_style(property: &str) -> Option<&'static str> {
    RIPPLE_OVERLAY_STYLE
        .iter()
        .find(|(p, _)| *p == property)
        .map(|(_, v)| *v)
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(TYPING_THRESHOLD > 0.0 && TYPING_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_positive() {
    assert!(TILT_DIVISOR > 0.0);
    assert!(TILT_PERSPECTIVE_PX > 0.0);
    assert!(PARALLAX_BASE_SPEED > 0.0);
    assert!(PARALLAX_SPEED_STEP > 0.0);
    assert!(RIPPLE_FALLBACK_DURATION_MS > 0);
    assert!(TYPING_RESTART_DELAY_MS > 0);
}

#[test]
fn ripple_removal_matches_animation_length() {
    // The overlay must outlive its animation and go away right after it
    let animation = overlay_style("animation").expect("overlay has an animation");
    assert_eq!(animation, RIPPLE_ANIMATION);
    assert_eq!(motion::animation_duration_ms(animation), Some(600));
}

#[test]
fn ripple_is_removed_when_its_animation_ends() {
    let lifetime = motion::ripple_lifetime_ms(RIPPLE_ANIMATION, RIPPLE_FALLBACK_DURATION_MS);
    assert_eq!(lifetime, 600);
    // Not before the animation has finished
    assert!(lifetime >= motion::animation_duration_ms(RIPPLE_ANIMATION).unwrap_or(0));
}

#[test]
fn ripple_lifetime_falls_back_without_a_duration() {
    assert_eq!(
        motion::ripple_lifetime_ms("ripple ease-out", RIPPLE_FALLBACK_DURATION_MS),
        RIPPLE_FALLBACK_DURATION_MS
    );
    assert_eq!(motion::ripple_lifetime_ms("ripple 1.2s linear", 600), 1200);
}

#[test]
fn ripple_animation_is_defined_in_stylesheet() {
    let animation = overlay_style("animation").expect("overlay has an animation");
    let name = animation.split_whitespace().next().expect("animation name");
    assert!(RIPPLE_CSS.contains(&format!("@keyframes {}", name)));
    assert!(RIPPLE_CSS.contains("scale(0)"));
    assert!(RIPPLE_CSS.contains("scale(2)"));
}

#[test]
fn ripple_overlay_fills_its_host() {
    assert_eq!(overlay_style("position"), Some("absolute"));
    assert_eq!(overlay_style("width"), Some("100%"));
    assert_eq!(overlay_style("height"), Some("100%"));
    assert!(RIPPLE_HOST_STYLE.contains(&("position", "relative")));
    assert!(RIPPLE_HOST_STYLE.contains(&("overflow", "hidden")));
}

#[test]
fn revealed_class_has_a_rule() {
    let selector = format!(".{}", REVEALED_CLASS);
    assert!(REVEAL_CSS.contains(&selector));
    assert!(REVEAL_CSS.contains("opacity: 1"));
    assert!(REVEAL_CSS.contains("translateY(0)"));
}

#[test]
fn tiltable_cards_are_also_revealed() {
    for sel in TILT_SELECTOR.split(',').map(str::trim) {
        assert!(REVEAL_SELECTOR.contains(sel), "{} not revealed", sel);
    }
}

#[test]
fn style_ids_are_distinct() {
    assert_ne!(REVEAL_STYLE_ID, RIPPLE_STYLE_ID);
}
