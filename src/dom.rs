use crate::constants::{CURSOR_HIDDEN, CURSOR_PROPERTY};
use cursor_core::{CursorEvent, ElementHandle, EventSink, HoverableElementSource, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target`; cancelling the returned
/// subscription removes the listener and frees the closure.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);

    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[dom] could not listen for '{}'", event);
        return Subscription::empty();
    }

    let target = target.clone();
    Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

/// A document element whose native pointer can be hidden. The inline
/// `cursor` value present before suppression is put back on restore.
pub struct DomElement {
    element: web::Element,
    saved_cursor: RefCell<Option<String>>,
}

impl DomElement {
    pub fn new(element: web::Element) -> Self {
        Self {
            element,
            saved_cursor: RefCell::new(None),
        }
    }
}

impl ElementHandle for DomElement {
    fn set_pointer_visual_suppressed(&self, suppressed: bool) {
        let Some(html) = self.element.dyn_ref::<web::HtmlElement>() else {
            return;
        };
        let style = html.style();
        if suppressed {
            if self.saved_cursor.borrow().is_none() {
                let previous = style.get_property_value(CURSOR_PROPERTY).unwrap_or_default();
                *self.saved_cursor.borrow_mut() = Some(previous);
            }
            _ = style.set_property(CURSOR_PROPERTY, CURSOR_HIDDEN);
        } else if let Some(previous) = self.saved_cursor.borrow_mut().take() {
            if previous.is_empty() {
                _ = style.remove_property(CURSOR_PROPERTY);
            } else {
                _ = style.set_property(CURSOR_PROPERTY, &previous);
            }
        }
    }

    fn subscribe_hover(&self, sink: EventSink) -> Subscription {
        let enter_sink = sink.clone();
        let enter = listen(&self.element, "mouseenter", move |_: web::MouseEvent| {
            enter_sink(CursorEvent::HoverEnter);
        });
        let leave = listen(&self.element, "mouseleave", move |_: web::MouseEvent| {
            sink(CursorEvent::HoverLeave);
        });
        Subscription::new(move || drop((enter, leave)))
    }
}

/// Selector queries against the live document; `body` is the root whose
/// pointer stays hidden while any cursor is mounted.
pub struct DomDocument {
    document: web::Document,
    root: Rc<DomElement>,
}

impl DomDocument {
    pub fn new(document: web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        Ok(Self {
            document,
            root: Rc::new(DomElement::new(body.into())),
        })
    }
}

impl HoverableElementSource for DomDocument {
    fn query_all(&self, selectors: &str) -> Vec<Rc<dyn ElementHandle>> {
        let list = match self.document.query_selector_all(selectors) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[hover] invalid selector '{}': {:?}", selectors, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .map(|el| Rc::new(DomElement::new(el)) as Rc<dyn ElementHandle>)
            .collect()
    }

    fn root(&self) -> Rc<dyn ElementHandle> {
        self.root.clone()
    }
}
