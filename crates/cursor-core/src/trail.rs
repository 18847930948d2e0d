use glam::DVec2;
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::constants::LINE_LENGTH_MAX;

/// A historical smoothed sample.
pub type TrailPoint = DVec2;

/// Ordered vertices for one rendered line, oldest first.
pub type TrailSnapshot = SmallVec<[TrailPoint; LINE_LENGTH_MAX]>;

/// Fixed-capacity FIFO of recent smoothed coordinates.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `point`, evicting from the front until the length fits.
    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn snapshot(&self) -> TrailSnapshot {
        self.points.iter().copied().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
