use glam::DVec2;

// Pure transform math for tilt and parallax. No DOM access here so host
// tests can include this file.

/// Rotation in degrees as `(rotate_x, rotate_y)`.
///
/// `local` is the pointer position relative to the element's top-left corner,
/// `size` the element's width and height. Pointer below center tips the top
/// edge away (positive X); pointer right of center turns the face right
/// (negative Y).
#[inline]
pub fn tilt_angles(local: DVec2, size: DVec2, divisor: f64) -> (f64, f64) {
    let center = size * 0.5;
    let rotate_x = (local.y - center.y) / divisor;
    let rotate_y = (center.x - local.x) / divisor;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64, perspective_px: f64, lift_px: f64) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
        css_num(perspective_px),
        css_num(rotate_x),
        css_num(rotate_y),
        css_num(lift_px)
    )
}

#[inline]
pub fn parallax_speed(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

/// Vertical offset in px for the decoration at `index`.
#[inline]
pub fn parallax_offset(scroll_y: f64, index: usize, base: f64, step: f64) -> f64 {
    -(scroll_y * parallax_speed(index, base, step))
}

pub fn parallax_transform(offset_px: f64) -> String {
    format!("translateY({}px)", css_num(offset_px))
}

/// Format a number for a CSS value. `-0` prints as `0`.
#[inline]
pub fn css_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

/// How long a ripple overlay lives: the length of its CSS animation.
#[inline]
pub fn ripple_lifetime_ms(animation: &str, fallback_ms: i32) -> i32 {
    animation_duration_ms(animation).unwrap_or(fallback_ms)
}

/// Duration in ms of the first time value in a CSS animation shorthand,
/// e.g. `"ripple 0.6s ease-out"` -> 600.
pub fn animation_duration_ms(shorthand: &str) -> Option<i32> {
    shorthand.split_whitespace().find_map(|tok| {
        if let Some(ms) = tok.strip_suffix("ms") {
            ms.parse::<f64>().ok().map(|v| v.round() as i32)
        } else if let Some(s) = tok.strip_suffix('s') {
            s.parse::<f64>().ok().map(|v| (v * 1000.0).round() as i32)
        } else {
            None
        }
    })
}
