use crate::constants::{overlay_id, overlay_style, SVG_NS};
use std::cell::Cell;
use web_sys as web;

thread_local! {
    static NEXT_OVERLAY: Cell<u32> = const { Cell::new(1) };
}

/// Create a full-viewport SVG root and append it to `body`. Every call gets
/// its own element, so concurrent mounts each keep their overlay.
pub fn create(document: &web::Document) -> anyhow::Result<web::Element> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let serial = NEXT_OVERLAY.with(|n| {
        let serial = n.get();
        n.set(serial.wrapping_add(1));
        serial
    });
    let svg = create_svg_element(document, "svg")?;
    _ = svg.set_attribute("id", &overlay_id(serial));
    _ = svg.set_attribute("aria-hidden", "true");
    _ = svg.set_attribute("style", &overlay_style(None));
    body.append_child(&svg)
        .map_err(|e| anyhow::anyhow!("append overlay: {:?}", e))?;
    Ok(svg)
}

pub fn create_svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}
