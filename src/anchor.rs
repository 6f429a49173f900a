/// Element id named by a same-page link, or `None` for a bare `#`,
/// an empty href or a link to another page.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Look up the element a same-page link points at. `lookup` is only called
/// for a non-empty fragment; a missing element yields `None`.
pub fn resolve_target<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    fragment_id(href).and_then(lookup)
}
