//! Process-wide suppression of the root element's native pointer.
//!
//! Several cursors may be mounted at once. The first lease hides the root
//! pointer, the last release restores it. Restoring always goes through the
//! handle that hid it, since only that handle knows the prior pointer style.

use crate::surface::ElementHandle;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RootHolders {
    count: usize,
    hidden_by: Option<Rc<dyn ElementHandle>>,
}

thread_local! {
    static ROOT_POINTER: RefCell<RootHolders> = RefCell::new(RootHolders::default());
}

pub struct RootPointerLease {
    held: bool,
}

impl RootPointerLease {
    pub fn acquire(root: Rc<dyn ElementHandle>) -> Self {
        let first = ROOT_POINTER.with(|r| {
            let mut r = r.borrow_mut();
            r.count += 1;
            if r.count == 1 {
                r.hidden_by = Some(root.clone());
                true
            } else {
                false
            }
        });
        if first {
            root.set_pointer_visual_suppressed(true);
            log::debug!("[cursor] root pointer hidden");
        }
        Self { held: true }
    }

    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        let restore = ROOT_POINTER.with(|r| {
            let mut r = r.borrow_mut();
            r.count = r.count.saturating_sub(1);
            if r.count == 0 {
                r.hidden_by.take()
            } else {
                None
            }
        });
        if let Some(root) = restore {
            root.set_pointer_visual_suppressed(false);
            log::debug!("[cursor] root pointer restored");
        }
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Live leases on this thread.
    pub fn holders() -> usize {
        ROOT_POINTER.with(|r| r.borrow().count)
    }
}

impl Drop for RootPointerLease {
    fn drop(&mut self) {
        self.release();
    }
}
