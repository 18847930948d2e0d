//! Mount/unmount lifecycle and state-to-visual wiring.

use crate::config::CursorConfig;
use crate::interaction::{InteractionState, InteractionTracker};
use crate::lease::RootPointerLease;
use crate::render_loop::{LoopParts, LoopState, RenderLoop};
use crate::renderer::Renderer;
use crate::sampler::PointerSampler;
use crate::scheduler::FrameScheduler;
use crate::smoothing::SmoothedState;
use crate::surface::{CursorEvent, EventSink, HoverableElementSource, InputSurface, Subscription};
use crate::trail::TrailSnapshot;
use crate::visual::{self, VisualState};
use std::cell::RefCell;
use std::rc::Rc;

/// Host capabilities a mount is wired to.
#[derive(Clone)]
pub struct CursorEnvironment {
    pub input: Rc<dyn InputSurface>,
    pub elements: Rc<dyn HoverableElementSource>,
    pub scheduler: Rc<dyn FrameScheduler>,
    pub renderer: Rc<RefCell<dyn Renderer>>,
}

struct EffectInner {
    config: Rc<CursorConfig>,
    tracker: InteractionTracker,
    render_loop: RenderLoop,
    renderer: Rc<RefCell<dyn Renderer>>,
    input_subscription: Option<Subscription>,
    root_lease: Option<RootPointerLease>,
    applied: Option<VisualState>,
    mounted: bool,
}

impl EffectInner {
    fn handle(&mut self, event: CursorEvent) {
        if !self.mounted {
            return;
        }
        let changed = self.tracker.apply(event);
        if let CursorEvent::PointerMove { x, y } = event {
            if self.render_loop.arm() == LoopState::Idle {
                // no frame primitive: keep a static dot under the pointer
                let radius = visual::dot_radius(self.tracker.state(), &self.config);
                self.renderer.borrow_mut().set_dot_position(x, y, radius);
            }
        }
        if changed {
            self.apply_visuals();
        }
    }

    fn apply_visuals(&mut self) {
        let next = VisualState::resolve(self.tracker.state(), &self.config);
        if self.applied.as_ref() == Some(&next) {
            return;
        }
        self.renderer.borrow_mut().apply_visual_state(&next);
        self.applied = Some(next);
    }

    fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.render_loop.cancel();
        if let Some(mut subscription) = self.input_subscription.take() {
            subscription.cancel();
        }
        self.tracker.detach_hoverables();
        if let Some(mut lease) = self.root_lease.take() {
            lease.release();
        }
        log::info!("[cursor] unmounted");
    }
}

/// One mounted cursor effect. Configuration is fixed for the mount's
/// lifetime; to change it, unmount and mount a new controller.
pub struct CursorEffectController {
    inner: Rc<RefCell<EffectInner>>,
}

impl CursorEffectController {
    pub fn mount(config: CursorConfig, env: CursorEnvironment) -> Self {
        let config = Rc::new(config);
        let sampler = Rc::new(PointerSampler::new());
        let tracker = InteractionTracker::new(sampler.clone());
        let render_loop = RenderLoop::new(LoopParts {
            config: config.clone(),
            sampler,
            interaction: tracker.shared_state(),
            renderer: env.renderer.clone(),
            scheduler: env.scheduler.clone(),
        });

        let inner = Rc::new(RefCell::new(EffectInner {
            config,
            tracker,
            render_loop,
            renderer: env.renderer.clone(),
            input_subscription: None,
            root_lease: None,
            applied: None,
            mounted: true,
        }));

        let sink: EventSink = {
            let weak = Rc::downgrade(&inner);
            Rc::new(move |event: CursorEvent| {
                let Some(inner) = weak.upgrade() else { return };
                match inner.try_borrow_mut() {
                    Ok(mut effect) => effect.handle(event),
                    Err(_) => log::warn!("[cursor] dropped re-entrant {:?}", event),
                };
            })
        };

        {
            let mut effect = inner.borrow_mut();
            effect.root_lease = Some(RootPointerLease::acquire(env.elements.root()));
            let selectors = effect.config.hover_selector();
            let targets = effect
                .tracker
                .attach_hoverables(&*env.elements, &selectors, sink.clone());
            effect.input_subscription = Some(env.input.subscribe(sink));
            effect.apply_visuals();
            let state = effect.render_loop.arm();
            log::info!(
                "[cursor] mounted: {} hover targets, loop {:?}",
                targets,
                state
            );
        }

        Self { inner }
    }

    /// Detach every listener, cancel the loop and release the root pointer.
    /// Repeated calls are no-ops.
    pub fn unmount(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut effect) => effect.teardown(),
            Err(_) => log::error!("[cursor] unmount while busy"),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    pub fn interaction(&self) -> InteractionState {
        self.inner.borrow().tracker.state()
    }

    /// The row most recently pushed to the renderer.
    pub fn visual_state(&self) -> Option<VisualState> {
        self.inner.borrow().applied.clone()
    }

    pub fn loop_state(&self) -> LoopState {
        self.inner.borrow().render_loop.state()
    }

    pub fn smoothed(&self) -> SmoothedState {
        self.inner.borrow().render_loop.smoothed()
    }

    pub fn trail(&self) -> TrailSnapshot {
        self.inner.borrow().render_loop.trail()
    }

    pub fn hover_target_count(&self) -> usize {
        self.inner.borrow().tracker.hover_target_count()
    }

    pub fn config(&self) -> Rc<CursorConfig> {
        self.inner.borrow().config.clone()
    }
}

impl Drop for CursorEffectController {
    fn drop(&mut self) {
        self.unmount();
    }
}
