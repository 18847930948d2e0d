//! Frame-synchronized driver: sample, smooth, trail, render.
//!
//! Two states. `Idle` has no frame scheduled; `Running` always has exactly one
//! pending frame callback. Every [`RenderLoop::arm`] restarts a debounce
//! timer and the loop stops itself when that timer fires.

use crate::config::CursorConfig;
use crate::interaction::InteractionState;
use crate::renderer::{Frame, Renderer};
use crate::sampler::PointerSampler;
use crate::scheduler::{FrameHandle, FrameScheduler, TimerHandle};
use crate::smoothing::{self, SmoothedState};
use crate::trail::{TrailBuffer, TrailSnapshot};
use crate::visual;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Collaborators the loop reads from or draws into.
pub struct LoopParts {
    pub config: Rc<CursorConfig>,
    pub sampler: Rc<PointerSampler>,
    pub interaction: Rc<Cell<InteractionState>>,
    pub renderer: Rc<RefCell<dyn Renderer>>,
    pub scheduler: Rc<dyn FrameScheduler>,
}

struct LoopInner {
    parts: LoopParts,
    state: LoopState,
    pending_frame: Option<FrameHandle>,
    debounce: Option<TimerHandle>,
    smoothed: SmoothedState,
    trail: TrailBuffer,
    ticks: u64,
}

pub struct RenderLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl RenderLoop {
    pub fn new(parts: LoopParts) -> Self {
        let trail = TrailBuffer::new(parts.config.line_length);
        Self {
            inner: Rc::new(RefCell::new(LoopInner {
                parts,
                state: LoopState::Idle,
                pending_frame: None,
                debounce: None,
                smoothed: SmoothedState::default(),
                trail,
                ticks: 0,
            })),
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.inner.borrow().state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    pub fn smoothed(&self) -> SmoothedState {
        self.inner.borrow().smoothed
    }

    pub fn trail(&self) -> TrailSnapshot {
        self.inner.borrow().trail.snapshot()
    }

    /// Ticks completed since construction.
    pub fn ticks(&self) -> u64 {
        self.inner.borrow().ticks
    }

    /// Start the loop if idle and restart the debounce window. Returns the
    /// resulting state; `Idle` means the environment cannot schedule frames
    /// or timers.
    pub fn arm(&self) -> LoopState {
        let (scheduler, stale_timer, delay_ms) = {
            let mut s = self.inner.borrow_mut();
            (
                s.parts.scheduler.clone(),
                s.debounce.take(),
                s.parts.config.debounce_ms(),
            )
        };
        if let Some(timer) = stale_timer {
            scheduler.clear_timeout(timer);
        }

        if self.state() == LoopState::Idle {
            if !Self::schedule_frame(&self.inner) {
                log::debug!("[loop] frame scheduling unavailable, staying idle");
                return LoopState::Idle;
            }
            self.inner.borrow_mut().state = LoopState::Running;
            log::debug!("[loop] started (debounce {}ms)", delay_ms);
        }

        let weak = Rc::downgrade(&self.inner);
        let timer = scheduler.set_timeout(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().debounce = None;
                    log::debug!("[loop] debounce expired");
                    Self::stop(&inner);
                }
            }),
        );
        if timer.is_none() {
            // without a debounce the loop could never stop on its own
            log::warn!("[loop] debounce timer unavailable, stopping");
            Self::stop(&self.inner);
            return LoopState::Idle;
        }
        self.inner.borrow_mut().debounce = timer;
        LoopState::Running
    }

    /// Cancel the pending frame and the debounce timer. Safe to repeat.
    pub fn cancel(&self) {
        Self::stop(&self.inner);
    }

    fn stop(inner: &Rc<RefCell<LoopInner>>) {
        let (scheduler, frame, timer, was_running) = {
            let mut s = inner.borrow_mut();
            let was_running = s.state == LoopState::Running;
            s.state = LoopState::Idle;
            (
                s.parts.scheduler.clone(),
                s.pending_frame.take(),
                s.debounce.take(),
                was_running,
            )
        };
        if let Some(frame) = frame {
            scheduler.cancel_frame(frame);
        }
        if let Some(timer) = timer {
            scheduler.clear_timeout(timer);
        }
        if was_running {
            log::debug!("[loop] stopped");
        }
    }

    fn schedule_frame(inner: &Rc<RefCell<LoopInner>>) -> bool {
        let scheduler = inner.borrow().parts.scheduler.clone();
        let weak = Rc::downgrade(inner);
        let handle = scheduler.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::on_frame(&inner);
            }
        }));
        match handle {
            Some(h) => {
                inner.borrow_mut().pending_frame = Some(h);
                true
            }
            None => false,
        }
    }

    fn on_frame(inner: &Rc<RefCell<LoopInner>>) {
        let (frame, renderer, dot_radius) = {
            let mut s = inner.borrow_mut();
            s.pending_frame = None;
            if s.state != LoopState::Running {
                return;
            }
            let raw = s.parts.sampler.current();
            let (speed, ratio) = (s.parts.config.line_delay, s.parts.config.dot_reduction_ratio);
            s.smoothed = smoothing::step(raw, s.smoothed, speed, ratio);
            let head = s.smoothed.position();
            s.trail.push(head);
            s.ticks += 1;
            let interaction = s.parts.interaction.get();
            let frame = Frame {
                raw,
                smoothed: s.smoothed,
                trail: s.trail.snapshot(),
                interaction,
            };
            let dot_radius = visual::dot_radius(interaction, &s.parts.config);
            (frame, s.parts.renderer.clone(), dot_radius)
        };

        renderer.borrow_mut().draw_frame(&frame, dot_radius);

        // the renderer may have torn us down
        if inner.borrow().state != LoopState::Running {
            return;
        }
        if !Self::schedule_frame(inner) {
            log::warn!("[loop] could not schedule next frame");
            Self::stop(inner);
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
