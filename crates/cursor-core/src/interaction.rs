//! Pointer visibility, press and hover tracking.

use crate::sampler::PointerSampler;
use crate::surface::{CursorEvent, ElementHandle, EventSink, HoverableElementSource, Subscription};
use std::cell::Cell;
use std::rc::Rc;

/// Three independent flags; any combination is legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub visible: bool,
    pub clicked: bool,
    pub hovered: bool,
}

struct HoverTarget {
    element: Rc<dyn ElementHandle>,
    subscription: Subscription,
}

/// Sole writer of [`InteractionState`]. Readers hold the shared cell from
/// [`InteractionTracker::shared_state`].
pub struct InteractionTracker {
    sampler: Rc<PointerSampler>,
    state: Rc<Cell<InteractionState>>,
    hover_targets: Vec<HoverTarget>,
}

impl InteractionTracker {
    pub fn new(sampler: Rc<PointerSampler>) -> Self {
        Self {
            sampler,
            state: Rc::new(Cell::new(InteractionState::default())),
            hover_targets: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> InteractionState {
        self.state.get()
    }

    pub fn shared_state(&self) -> Rc<Cell<InteractionState>> {
        self.state.clone()
    }

    /// Apply one input event. Returns `true` when [`InteractionState`] changed;
    /// pointer moves only update the sampler and always return `false`.
    pub fn apply(&self, event: CursorEvent) -> bool {
        let before = self.state.get();
        let mut next = before;
        match event {
            CursorEvent::PointerMove { x, y } => {
                self.sampler.on_move(x, y);
                return false;
            }
            CursorEvent::PointerOver => next.visible = true,
            CursorEvent::PointerOut => next.visible = false,
            CursorEvent::PointerDown => next.clicked = true,
            CursorEvent::PointerUp => next.clicked = false,
            CursorEvent::HoverEnter => next.hovered = true,
            CursorEvent::HoverLeave => next.hovered = false,
        }
        self.state.set(next);
        next != before
    }

    /// Query `selectors` once, hide the native pointer on every match and
    /// route their enter/leave events to `sink`. Elements inserted into the
    /// document afterwards are not picked up. Re-attaching replaces the
    /// previous set. Returns the number of tracked elements.
    pub fn attach_hoverables(
        &mut self,
        source: &dyn HoverableElementSource,
        selectors: &str,
        sink: EventSink,
    ) -> usize {
        self.detach_hoverables();
        self.hover_targets = source
            .query_all(selectors)
            .into_iter()
            .map(|element| {
                element.set_pointer_visual_suppressed(true);
                let subscription = element.subscribe_hover(sink.clone());
                HoverTarget {
                    element,
                    subscription,
                }
            })
            .collect();
        if self.hover_targets.is_empty() {
            log::debug!("[hover] no elements match '{}'", selectors);
        } else {
            log::debug!("[hover] tracking {} elements", self.hover_targets.len());
        }
        self.hover_targets.len()
    }

    /// Cancel every hover subscription and restore native pointers.
    pub fn detach_hoverables(&mut self) {
        for mut target in self.hover_targets.drain(..) {
            target.subscription.cancel();
            target.element.set_pointer_visual_suppressed(false);
        }
    }

    #[inline]
    pub fn hover_target_count(&self) -> usize {
        self.hover_targets.len()
    }
}

impl Drop for InteractionTracker {
    fn drop(&mut self) {
        self.detach_hoverables();
    }
}
