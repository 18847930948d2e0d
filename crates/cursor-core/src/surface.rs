//! Event and element capabilities supplied by the host.
//!
//! The engine never touches a DOM directly. A browser front-end implements
//! these traits over `web-sys`; tests implement them with synthetic elements.

use std::rc::Rc;

/// Input the engine reacts to. Coordinates are raw viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorEvent {
    PointerMove { x: f64, y: f64 },
    /// Pointer entered the document.
    PointerOver,
    /// Pointer left the document.
    PointerOut,
    PointerDown,
    PointerUp,
    /// Pointer entered a hoverable element.
    HoverEnter,
    /// Pointer left a hoverable element.
    HoverLeave,
}

pub type EventSink = Rc<dyn Fn(CursorEvent)>;

/// An attached listener. Cancelling runs the detach hook once; later calls
/// and the eventual drop are no-ops.
#[must_use = "dropping a Subscription detaches the listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn empty() -> Self {
        Self { detach: None }
    }

    pub fn cancel(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// The global input surface: pointer move/over/out/down/up.
pub trait InputSurface {
    fn subscribe(&self, sink: EventSink) -> Subscription;
}

/// One element the hover subsystem manages.
pub trait ElementHandle {
    /// Hide (`true`) or restore (`false`) the native pointer over this element.
    fn set_pointer_visual_suppressed(&self, suppressed: bool);

    /// Deliver [`CursorEvent::HoverEnter`] / [`CursorEvent::HoverLeave`] to `sink`.
    fn subscribe_hover(&self, sink: EventSink) -> Subscription;
}

/// Document-wide element lookup.
pub trait HoverableElementSource {
    /// Every element matching the comma-separated `selectors`, in document order.
    fn query_all(&self, selectors: &str) -> Vec<Rc<dyn ElementHandle>>;

    /// The root element whose native pointer is hidden while any cursor is mounted.
    fn root(&self) -> Rc<dyn ElementHandle>;
}
