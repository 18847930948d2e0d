// DOM-side constants for the SVG overlay.
// Kept free of `web-sys` types so host tests can `include!` this file.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Overlay root; each mount gets `<prefix>-<serial>` so overlays never collide
pub const OVERLAY_ID_PREFIX: &str = "animated-cursor-overlay";
pub const OVERLAY_Z_INDEX: u32 = 2_147_483_647; // above everything the page can stack
pub const OVERLAY_BASE_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;overflow:visible;";

// Element easing; the engine switches states instantly and leaves tweening to CSS
pub const TRANSITION_MS: u32 = 150;

// Native pointer suppression
pub const CURSOR_PROPERTY: &str = "cursor";
pub const CURSOR_HIDDEN: &str = "none";

// Decimal places written into SVG coordinate attributes
pub const COORD_PRECISION: usize = 2;

#[inline]
pub fn overlay_id(serial: u32) -> String {
    format!("{}-{}", OVERLAY_ID_PREFIX, serial)
}

#[inline]
pub fn overlay_style(blend_mode: Option<&str>) -> String {
    match blend_mode {
        Some(mode) => format!(
            "{}z-index:{};mix-blend-mode:{};",
            OVERLAY_BASE_STYLE, OVERLAY_Z_INDEX, mode
        ),
        None => format!("{}z-index:{};", OVERLAY_BASE_STYLE, OVERLAY_Z_INDEX),
    }
}

#[inline]
pub fn transition_style() -> String {
    format!(
        "transition:r {ms}ms ease,opacity {ms}ms ease;",
        ms = TRANSITION_MS
    )
}

/// `x,y x,y ...` as consumed by `<polyline points>`.
pub fn polyline_points<I>(points: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut out = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!(
            "{:.p$},{:.p$}",
            x,
            y,
            p = COORD_PRECISION
        ));
    }
    out
}
