//! Interaction state to visual attributes.
//!
//! | visible | clicked | hovered | dot r        | dot/line α | marker r    | blend      |
//! |---------|---------|---------|--------------|------------|-------------|------------|
//! | false   | *       | *       | dotSize      | 0          | 0           | unset      |
//! | true    | false   | false   | dotSize      | 1          | 0           | unset      |
//! | true    | true    | false   | dotSize - 2  | 1          | 0           | unset      |
//! | true    | *       | true    | 0            | 0          | dotSize * 3 | difference |
//!
//! Hover wins over click. Rows switch instantly; any easing belongs to the
//! renderer's own transition styling.

use crate::config::CursorConfig;
use crate::constants::{CLICK_SHRINK_PX, MARKER_SCALE};
use crate::interaction::InteractionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Difference,
}

impl BlendMode {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::Difference => "difference",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub dot_radius: f64,
    pub dot_opacity: f64,
    pub line_opacity: f64,
    pub marker_radius: f64,
    pub marker_opacity: f64,
    pub blend_mode: Option<BlendMode>,
    pub dot_color: String,
    pub line_color: String,
    pub line_width: f64,
    pub marker_color: String,
}

impl VisualState {
    pub fn resolve(interaction: InteractionState, config: &CursorConfig) -> Self {
        let hovering = interaction.visible && interaction.hovered;
        let (body_opacity, marker_opacity) = match (interaction.visible, interaction.hovered) {
            (false, _) => (0.0, 0.0),
            (true, true) => (0.0, 1.0),
            (true, false) => (1.0, 1.0),
        };
        Self {
            dot_radius: dot_radius(interaction, config),
            dot_opacity: body_opacity,
            line_opacity: body_opacity,
            marker_radius: if hovering {
                config.dot_size * MARKER_SCALE
            } else {
                0.0
            },
            marker_opacity,
            blend_mode: (hovering && config.marker_blend_mode_enabled)
                .then_some(BlendMode::Difference),
            dot_color: config.dot_color.clone(),
            line_color: config.line_color.clone(),
            line_width: config.line_width,
            marker_color: config.marker_color.clone(),
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.dot_opacity == 0.0 && self.line_opacity == 0.0 && self.marker_opacity == 0.0
    }
}

/// Base dot radius for `interaction`, before the per-frame scale factor.
#[inline]
pub fn dot_radius(interaction: InteractionState, config: &CursorConfig) -> f64 {
    match interaction {
        InteractionState { visible: false, .. } => config.dot_size,
        InteractionState { hovered: true, .. } => 0.0,
        InteractionState { clicked: true, .. } => config.dot_size - CLICK_SHRINK_PX,
        _ => config.dot_size,
    }
}
