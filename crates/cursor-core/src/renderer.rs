use crate::interaction::InteractionState;
use crate::sampler::RawPointer;
use crate::smoothing::SmoothedState;
use crate::trail::{TrailPoint, TrailSnapshot};
use crate::visual::VisualState;

/// Everything one tick hands to the renderer.
#[derive(Clone, Debug)]
pub struct Frame {
    pub raw: RawPointer,
    pub smoothed: SmoothedState,
    pub trail: TrailSnapshot,
    pub interaction: InteractionState,
}

/// Drawing surface owned by the host (SVG, canvas, ...).
pub trait Renderer {
    fn set_dot_position(&mut self, x: f64, y: f64, radius: f64);
    fn set_trail_points(&mut self, points: &[TrailPoint]);
    fn set_marker_position(&mut self, x: f64, y: f64);
    fn apply_visual_state(&mut self, state: &VisualState);

    /// Per-tick entry point. The dot sits at the smoothed head scaled by the
    /// jitter factor; the marker follows the raw pointer only while hovering.
    fn draw_frame(&mut self, frame: &Frame, dot_radius: f64) {
        self.set_trail_points(&frame.trail);
        self.set_dot_position(
            frame.smoothed.px,
            frame.smoothed.py,
            dot_radius * frame.smoothed.scale,
        );
        if frame.interaction.hovered {
            self.set_marker_position(frame.raw.x, frame.raw.y);
        }
    }
}
