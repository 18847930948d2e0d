//! SVG implementation of the cursor renderer.
//!
//! Three children under the overlay root: the trailing `<polyline>`, the dot
//! `<circle>` and the hover marker `<circle>`. Attributes are only written
//! here; the engine decides every value.

use crate::constants::{overlay_style, polyline_points, transition_style, COORD_PRECISION};
use crate::overlay;
use cursor_core::{Renderer, TrailPoint, VisualState};
use web_sys as web;

pub struct SvgRenderer {
    root: web::Element,
    line: web::Element,
    dot: web::Element,
    marker: web::Element,
}

impl SvgRenderer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = overlay::create(document)?;

        let line = overlay::create_svg_element(document, "polyline")?;
        _ = line.set_attribute("fill", "none");
        _ = line.set_attribute("stroke-linecap", "round");
        _ = line.set_attribute("stroke-linejoin", "round");
        _ = line.set_attribute("style", &transition_style());

        let dot = overlay::create_svg_element(document, "circle")?;
        _ = dot.set_attribute("style", &transition_style());

        let marker = overlay::create_svg_element(document, "circle")?;
        _ = marker.set_attribute("r", "0");
        _ = marker.set_attribute("style", &transition_style());

        for child in [&line, &dot, &marker] {
            root.append_child(child)
                .map_err(|e| anyhow::anyhow!("append overlay child: {:?}", e))?;
        }

        Ok(Self {
            root,
            line,
            dot,
            marker,
        })
    }

    /// Detach this renderer's overlay from the document.
    pub fn remove(&self) {
        self.root.remove();
    }
}

#[inline]
fn set_number(el: &web::Element, name: &str, value: f64) {
    _ = el.set_attribute(name, &format!("{:.p$}", value, p = COORD_PRECISION));
}

impl Renderer for SvgRenderer {
    fn set_dot_position(&mut self, x: f64, y: f64, radius: f64) {
        set_number(&self.dot, "cx", x);
        set_number(&self.dot, "cy", y);
        set_number(&self.dot, "r", radius.max(0.0));
    }

    fn set_trail_points(&mut self, points: &[TrailPoint]) {
        let points = polyline_points(points.iter().map(|p| (p.x, p.y)));
        _ = self.line.set_attribute("points", &points);
    }

    fn set_marker_position(&mut self, x: f64, y: f64) {
        set_number(&self.marker, "cx", x);
        set_number(&self.marker, "cy", y);
    }

    fn apply_visual_state(&mut self, state: &VisualState) {
        _ = self.dot.set_attribute("fill", &state.dot_color);
        set_number(&self.dot, "r", state.dot_radius.max(0.0));
        set_number(&self.dot, "opacity", state.dot_opacity);

        _ = self.line.set_attribute("stroke", &state.line_color);
        set_number(&self.line, "stroke-width", state.line_width);
        set_number(&self.line, "opacity", state.line_opacity);

        _ = self.marker.set_attribute("fill", &state.marker_color);
        set_number(&self.marker, "r", state.marker_radius.max(0.0));
        set_number(&self.marker, "opacity", state.marker_opacity);

        let blend = state.blend_mode.map(|b| b.as_css());
        _ = self.root.set_attribute("style", &overlay_style(blend));
        log::debug!(
            "[render] visual state dot_r={} marker_r={} blend={:?}",
            state.dot_radius,
            state.marker_radius,
            blend
        );
    }
}
