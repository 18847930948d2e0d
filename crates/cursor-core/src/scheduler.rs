//! Frame and timer scheduling capability.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};

pub type FrameCallback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

/// Display-synchronized callbacks plus one-shot timers.
///
/// Implementations must never invoke a callback synchronously from inside the
/// call that registered it. Returning `None` means the primitive is not
/// available in this environment.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
    fn set_timeout(&self, delay_ms: u32, callback: FrameCallback) -> Option<TimerHandle>;
    fn clear_timeout(&self, handle: TimerHandle);
}

struct PendingTimer {
    due_ms: f64,
    callback: FrameCallback,
}

/// Deterministic scheduler for tests and non-DOM hosts. Frames run only on
/// [`ManualScheduler::run_frame`], timers only on [`ManualScheduler::advance`].
pub struct ManualScheduler {
    now_ms: Cell<f64>,
    next_id: Cell<u32>,
    frames_supported: bool,
    timers_supported: bool,
    frames: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    timers: RefCell<FnvHashMap<TimerHandle, PendingTimer>>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0.0),
            next_id: Cell::new(1),
            frames_supported: true,
            timers_supported: true,
            frames: RefCell::new(Vec::new()),
            timers: RefCell::new(FnvHashMap::default()),
        }
    }

    /// A scheduler whose environment has no frame primitive.
    pub fn without_frames() -> Self {
        Self {
            frames_supported: false,
            ..Self::new()
        }
    }

    /// A scheduler whose environment has frames but no timer primitive.
    pub fn without_timers() -> Self {
        Self {
            timers_supported: false,
            ..Self::new()
        }
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        id
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Run every frame callback registered before this call. Callbacks that
    /// register new frames are deferred to the next call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.frames.borrow_mut());
        let count = batch.len();
        for (_, callback) in batch {
            callback();
        }
        count
    }

    /// Move the clock forward by `ms`, firing due timers in deadline order.
    pub fn advance(&self, ms: f64) {
        let target = self.now_ms.get() + ms;
        loop {
            let due = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by(|a, b| a.1.due_ms.total_cmp(&b.1.due_ms).then(a.0 .0.cmp(&b.0 .0)))
                    .map(|(h, _)| *h)
            };
            let Some(handle) = due else { break };
            let Some(timer) = self.timers.borrow_mut().remove(&handle) else {
                break;
            };
            self.now_ms.set(timer.due_ms.max(self.now_ms.get()));
            (timer.callback)();
        }
        self.now_ms.set(target);
    }

    /// Alternate clock advance and frame dispatch `count` times.
    pub fn step_frames(&self, count: usize, frame_ms: f64) {
        for _ in 0..count {
            self.advance(frame_ms);
            self.run_frame();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        if !self.frames_supported {
            return None;
        }
        let handle = FrameHandle(self.next_id());
        self.frames.borrow_mut().push((handle, callback));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.frames.borrow_mut().retain(|(h, _)| *h != handle);
    }

    fn set_timeout(&self, delay_ms: u32, callback: FrameCallback) -> Option<TimerHandle> {
        if !self.timers_supported {
            return None;
        }
        let handle = TimerHandle(self.next_id());
        self.timers.borrow_mut().insert(
            handle,
            PendingTimer {
                due_ms: self.now_ms.get() + f64::from(delay_ms),
                callback,
            },
        );
        Some(handle)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.timers.borrow_mut().remove(&handle);
    }
}
