use glam::DVec2;
use std::cell::Cell;

/// Last real pointer position in viewport pixels.
pub type RawPointer = DVec2;

/// Latest raw coordinate from pointer-move events. No history is kept and
/// values are stored untouched, NaN included.
#[derive(Debug, Default)]
pub struct PointerSampler {
    latest: Cell<RawPointer>,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_move(&self, x: f64, y: f64) {
        self.latest.set(DVec2::new(x, y));
    }

    #[inline]
    pub fn current(&self) -> RawPointer {
        self.latest.get()
    }
}
