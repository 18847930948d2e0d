// Synthetic DOM, input and renderer doubles shared by the host tests.

#![allow(dead_code)]
use cursor_core::*;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Sinks = Rc<RefCell<Vec<(u32, EventSink)>>>;

#[derive(Default)]
struct SinkList {
    sinks: Sinks,
    next: Cell<u32>,
}

impl SinkList {
    fn add(&self, sink: EventSink) -> Subscription {
        let id = self.next.get();
        self.next.set(id + 1);
        self.sinks.borrow_mut().push((id, sink));
        let sinks = self.sinks.clone();
        Subscription::new(move || sinks.borrow_mut().retain(|(i, _)| *i != id))
    }

    fn emit(&self, event: CursorEvent) {
        // collect first so a sink may unsubscribe while we dispatch
        let sinks: Vec<EventSink> = self.sinks.borrow().iter().map(|(_, s)| s.clone()).collect();
        for sink in sinks {
            sink(event);
        }
    }

    fn len(&self) -> usize {
        self.sinks.borrow().len()
    }
}

#[derive(Default)]
pub struct FakeInput {
    listeners: SinkList,
}

impl FakeInput {
    pub fn emit(&self, event: CursorEvent) {
        self.listeners.emit(event);
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.emit(CursorEvent::PointerMove { x, y });
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl InputSurface for FakeInput {
    fn subscribe(&self, sink: EventSink) -> Subscription {
        self.listeners.add(sink)
    }
}

pub struct FakeElement {
    pub tag: String,
    suppressed: Cell<bool>,
    listeners: SinkList,
}

impl FakeElement {
    pub fn new(tag: &str) -> Rc<Self> {
        Rc::new(Self {
            tag: tag.to_string(),
            suppressed: Cell::new(false),
            listeners: SinkList::default(),
        })
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn enter(&self) {
        self.listeners.emit(CursorEvent::HoverEnter);
    }

    pub fn leave(&self) {
        self.listeners.emit(CursorEvent::HoverLeave);
    }
}

impl ElementHandle for FakeElement {
    fn set_pointer_visual_suppressed(&self, suppressed: bool) {
        self.suppressed.set(suppressed);
    }

    fn subscribe_hover(&self, sink: EventSink) -> Subscription {
        self.listeners.add(sink)
    }
}

/// Elements match when their tag appears verbatim in the selector list.
pub struct FakeDocument {
    pub root: Rc<FakeElement>,
    elements: RefCell<Vec<Rc<FakeElement>>>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeDocument {
    pub fn with_tags(tags: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            root: FakeElement::new("body"),
            elements: RefCell::new(tags.iter().map(|t| FakeElement::new(t)).collect()),
            queries: RefCell::new(Vec::new()),
        })
    }

    pub fn element(&self, tag: &str) -> Rc<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .find(|e| e.tag == tag)
            .cloned()
            .expect("no element with that tag")
    }

    pub fn insert(&self, tag: &str) -> Rc<FakeElement> {
        let el = FakeElement::new(tag);
        self.elements.borrow_mut().push(el.clone());
        el
    }

    pub fn total_hover_listeners(&self) -> usize {
        self.elements.borrow().iter().map(|e| e.listener_count()).sum()
    }
}

impl HoverableElementSource for FakeDocument {
    fn query_all(&self, selectors: &str) -> Vec<Rc<dyn ElementHandle>> {
        self.queries.borrow_mut().push(selectors.to_string());
        let wanted: Vec<&str> = selectors.split(',').map(str::trim).collect();
        self.elements
            .borrow()
            .iter()
            .filter(|e| wanted.contains(&e.tag.as_str()))
            .map(|e| e.clone() as Rc<dyn ElementHandle>)
            .collect()
    }

    fn root(&self) -> Rc<dyn ElementHandle> {
        self.root.clone()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Dot { x: f64, y: f64, radius: f64 },
    Trail(Vec<DVec2>),
    Marker { x: f64, y: f64 },
    Visual(VisualState),
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn visuals(&self) -> Vec<VisualState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Visual(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn dots(&self) -> Vec<(f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Dot { x, y, radius } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Marker { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn set_dot_position(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(Call::Dot { x, y, radius });
    }

    fn set_trail_points(&mut self, points: &[TrailPoint]) {
        self.calls.push(Call::Trail(points.to_vec()));
    }

    fn set_marker_position(&mut self, x: f64, y: f64) {
        self.calls.push(Call::Marker { x, y });
    }

    fn apply_visual_state(&mut self, state: &VisualState) {
        self.calls.push(Call::Visual(state.clone()));
    }
}

pub struct Harness {
    pub input: Rc<FakeInput>,
    pub document: Rc<FakeDocument>,
    pub scheduler: Rc<ManualScheduler>,
    pub renderer: Rc<RefCell<RecordingRenderer>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_scheduler(ManualScheduler::new())
    }

    pub fn with_scheduler(scheduler: ManualScheduler) -> Self {
        Self {
            input: Rc::new(FakeInput::default()),
            document: FakeDocument::with_tags(&["a", "button", "div"]),
            scheduler: Rc::new(scheduler),
            renderer: Rc::new(RefCell::new(RecordingRenderer::default())),
        }
    }

    pub fn env(&self) -> CursorEnvironment {
        CursorEnvironment {
            input: self.input.clone(),
            elements: self.document.clone(),
            scheduler: self.scheduler.clone(),
            renderer: self.renderer.clone(),
        }
    }

    pub fn mount(&self, config: CursorConfig) -> CursorEffectController {
        CursorEffectController::mount(config, self.env())
    }

    pub fn loop_parts(&self, config: CursorConfig) -> (LoopParts, Rc<PointerSampler>, Rc<Cell<InteractionState>>) {
        let sampler = Rc::new(PointerSampler::new());
        let interaction = Rc::new(Cell::new(InteractionState::default()));
        let parts = LoopParts {
            config: Rc::new(config),
            sampler: sampler.clone(),
            interaction: interaction.clone(),
            renderer: self.renderer.clone(),
            scheduler: self.scheduler.clone(),
        };
        (parts, sampler, interaction)
    }
}
