//! Per-frame easing of the raw pointer.
//!
//! A single-pole IIR filter per axis. `dist` is the magnitude of the *signed
//! sum* of per-axis divergence, not a Euclidean norm: existing tuned
//! configurations depend on it, so it is kept exactly.

use crate::constants::*;
use crate::sampler::RawPointer;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedState {
    pub px: f64,
    pub py: f64,
    pub dist: f64,
    pub scale: f64,
}

impl Default for SmoothedState {
    fn default() -> Self {
        Self {
            px: 0.0,
            py: 0.0,
            dist: 0.0,
            scale: SCALE_INITIAL,
        }
    }
}

impl SmoothedState {
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.px, self.py)
    }
}

/// Advance `prev` one tick toward `raw`.
///
/// `speed` is the configured `lineDelay`; larger values lag more. The result's
/// `scale` never drops below `reduction_ratio`.
#[inline]
pub fn step(raw: RawPointer, prev: SmoothedState, speed: f64, reduction_ratio: f64) -> SmoothedState {
    let px = prev.px + (raw.x - prev.px) / speed;
    let py = prev.py + (raw.y - prev.py) / speed;
    let dist = (raw.x - px + (raw.y - py)).abs();
    let target = (SCALE_TARGET_BASE - dist * DIST_GAIN) * SCALE_TARGET_UNIT;
    let scale = (prev.scale + (target - prev.scale) * SCALE_EASE).max(reduction_ratio);
    SmoothedState { px, py, dist, scale }
}
