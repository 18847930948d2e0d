use crate::dom::listen;
use cursor_core::{CursorEvent, EventSink, InputSurface, Subscription};
use web_sys as web;

/// Global pointer input: moves and presses on the window, enter/leave on the
/// document. Only the primary pointer is followed.
pub struct WindowInput {
    window: web::Window,
    document: web::Document,
}

impl WindowInput {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl InputSurface for WindowInput {
    fn subscribe(&self, sink: EventSink) -> Subscription {
        let subscriptions = vec![
            wire_pointermove(&self.window, sink.clone()),
            wire_pointerdown(&self.window, sink.clone()),
            wire_pointerup(&self.window, sink.clone()),
            wire_pointerover(&self.document, sink.clone()),
            wire_pointerout(&self.document, sink),
        ];
        Subscription::new(move || drop(subscriptions))
    }
}

fn wire_pointermove(window: &web::Window, sink: EventSink) -> Subscription {
    listen(window, "pointermove", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        sink(CursorEvent::PointerMove {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        });
    })
}

fn wire_pointerdown(window: &web::Window, sink: EventSink) -> Subscription {
    listen(window, "pointerdown", move |ev: web::PointerEvent| {
        if ev.is_primary() {
            sink(CursorEvent::PointerDown);
        }
    })
}

fn wire_pointerup(window: &web::Window, sink: EventSink) -> Subscription {
    listen(window, "pointerup", move |ev: web::PointerEvent| {
        if ev.is_primary() {
            sink(CursorEvent::PointerUp);
        }
    })
}

fn wire_pointerover(document: &web::Document, sink: EventSink) -> Subscription {
    listen(document, "pointerover", move |_: web::PointerEvent| {
        sink(CursorEvent::PointerOver);
    })
}

fn wire_pointerout(document: &web::Document, sink: EventSink) -> Subscription {
    listen(document, "pointerout", move |ev: web::PointerEvent| {
        // moving between elements also fires pointerout; only a missing
        // related target means the pointer left the document
        if ev.related_target().is_none() {
            sink(CursorEvent::PointerOut);
        }
    })
}
