use cursor_core::{FrameCallback, FrameHandle, FrameScheduler, TimerHandle};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type PendingFrames = Rc<RefCell<VecDeque<(FrameHandle, FrameCallback)>>>;
type PendingTimers = Rc<RefCell<FnvHashMap<TimerHandle, (i32, FrameCallback)>>>;

/// `requestAnimationFrame` + `setTimeout` behind [`FrameScheduler`].
///
/// Two long-lived trampolines are registered with the browser instead of one
/// closure per request. Animation frames fire in request order, so the frame
/// trampoline pops the oldest pending callback; timers receive their token as
/// the `setTimeout` argument.
///
/// The scheduler must outlive every request it hands out: cancel everything
/// (unmount) before dropping it.
pub struct RafScheduler {
    window: web::Window,
    frames: PendingFrames,
    timers: PendingTimers,
    next_timer: Cell<u32>,
    frame_trampoline: Closure<dyn FnMut()>,
    timer_trampoline: Closure<dyn FnMut(JsValue)>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        let frames: PendingFrames = Rc::new(RefCell::new(VecDeque::new()));
        let timers: PendingTimers = Rc::new(RefCell::new(FnvHashMap::default()));

        let frames_tick = frames.clone();
        let frame_trampoline = Closure::wrap(Box::new(move || {
            let next = frames_tick.borrow_mut().pop_front();
            if let Some((_, callback)) = next {
                callback();
            }
        }) as Box<dyn FnMut()>);

        let timers_fire = timers.clone();
        let timer_trampoline = Closure::wrap(Box::new(move |token: JsValue| {
            let Some(token) = token.as_f64() else { return };
            let entry = timers_fire.borrow_mut().remove(&TimerHandle(token as u32));
            if let Some((_, callback)) = entry {
                callback();
            }
        }) as Box<dyn FnMut(JsValue)>);

        Self {
            window,
            frames,
            timers,
            next_timer: Cell::new(1),
            frame_trampoline,
            timer_trampoline,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        match self
            .window
            .request_animation_frame(self.frame_trampoline.as_ref().unchecked_ref())
        {
            Ok(id) => {
                let handle = FrameHandle(id as u32);
                self.frames.borrow_mut().push_back((handle, callback));
                Some(handle)
            }
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame unavailable: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0 as i32);
        self.frames.borrow_mut().retain(|(h, _)| *h != handle);
    }

    fn set_timeout(&self, delay_ms: u32, callback: FrameCallback) -> Option<TimerHandle> {
        let handle = TimerHandle(self.next_timer.get());
        self.next_timer.set(handle.0.wrapping_add(1));
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                self.timer_trampoline.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
                &JsValue::from(handle.0),
            )
            .map_err(|e| log::warn!("[frame] setTimeout failed: {:?}", e))
            .ok()?;
        self.timers.borrow_mut().insert(handle, (id, callback));
        Some(handle)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        let entry = self.timers.borrow_mut().remove(&handle);
        if let Some((id, _)) = entry {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
