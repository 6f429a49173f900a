/// Selectors and tuning constants for the page interactions.
///
/// Kept free of imports so host tests can `include!` this file directly.
// Elements that tilt under the pointer
pub const TILT_SELECTOR: &str = ".skill-card, .intro-card, .benefit-card";

// Tilt sensitivity: pixels of pointer offset per degree of rotation
pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = -4.0;
pub const TILT_NEUTRAL_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

// Same-page navigation
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Scroll-triggered reveal
pub const REVEAL_SELECTOR: &str =
    ".skill-card, .intro-card, .benefit-card, .step-item, .section-title";
pub const REVEALED_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Parallax decorations: speed = base + index * step
pub const PARALLAX_SELECTOR: &str = ".deco-line, .deco-circle";
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

// Click ripple
pub const RIPPLE_TRIGGER_CLASS: &str = "trigger-tag";
// Removal delay when the overlay animation has no parsable duration
pub const RIPPLE_FALLBACK_DURATION_MS: i32 = 600;
pub const RIPPLE_ANIMATION: &str = "ripple 0.6s ease-out";
pub const RIPPLE_OVERLAY_STYLE: [(&str, &str); 6] = [
    ("position", "absolute"),
    ("width", "100%"),
    ("height", "100%"),
    ("background", "rgba(6, 182, 212, 0.3)"),
    ("border-radius", "inherit"),
    ("animation", RIPPLE_ANIMATION),
];
pub const RIPPLE_HOST_STYLE: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

// Typing animation reset
pub const TERMINAL_PROMPT_SELECTOR: &str = ".terminal-prompt";
pub const TYPING_TEXT_SELECTOR: &str = ".typing-text";
pub const TYPING_THRESHOLD: f64 = 0.5;
pub const TYPING_RESTART_DELAY_MS: i32 = 100;
pub const TYPING_ANIMATION: &str = "typing 3s steps(35) forwards, blink 0.7s step-end infinite";

// Injected stylesheet element ids
pub const REVEAL_STYLE_ID: &str = "fx-reveal-style";
pub const RIPPLE_STYLE_ID: &str = "fx-ripple-style";
