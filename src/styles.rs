use crate::constants::{REVEAL_STYLE_ID, RIPPLE_STYLE_ID};
use web_sys as web;

// Style rules the behaviors depend on, bundled as static resources
pub static REVEAL_CSS: &str = include_str!("../styles/reveal.css");
pub static RIPPLE_CSS: &str = include_str!("../styles/ripple.css");

/// Append a `<style id=..>` block to `<head>` unless one with that id exists.
pub fn inject(document: &web::Document, id: &str, css: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn inject_all(document: &web::Document) -> anyhow::Result<()> {
    inject(document, REVEAL_STYLE_ID, REVEAL_CSS)?;
    inject(document, RIPPLE_STYLE_ID, RIPPLE_CSS)?;
    Ok(())
}
