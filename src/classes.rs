/// Whether a `class` attribute value contains `class` as a whole token.
#[inline]
pub fn has_class(class_attr: &str, class: &str) -> bool {
    class_attr.split_whitespace().any(|c| c == class)
}
