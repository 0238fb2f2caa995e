#![allow(dead_code)]

use std::time::Duration;

use antiscroll::{
    Document, Event, EventKind, EventResult, MemoryDocument, NodeId, Options, Pane, Rect,
    INNER_CLASS,
};
use simplelog::{Config, LevelFilter, TestLogger};

pub struct Fixture {
    pub doc: MemoryDocument,
    pub container: NodeId,
    pub inner: NodeId,
}

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// A `width` x `height` container at the page origin whose inner element
/// scrolls over `content_width` x `content_height`.
pub fn fixture(width: f64, height: f64, content_width: f64, content_height: f64) -> Fixture {
    init_logging();

    let mut doc = MemoryDocument::new();
    let root = doc.root();
    let container = doc.create_element(&["antiscroll-wrap"]);
    let inner = doc.create_element(&[INNER_CLASS]);
    doc.append_child(root, container);
    doc.append_child(container, inner);

    doc.set_size(container, width, height);
    doc.set_size(inner, width, height);
    doc.set_scrollable(inner, true, true);
    doc.set_content_size(inner, content_width, content_height);
    doc.set_bounds(container, Rect::from_size(width, height));
    doc.set_bounds(inner, Rect::from_size(width, height));

    Fixture {
        doc,
        container,
        inner,
    }
}

impl Fixture {
    pub fn pane(&mut self, options: Options) -> Pane {
        Pane::create(&mut self.doc, self.container, options).expect("pane attaches")
    }

    /// Deliver `event`, then any scroll notifications it caused.
    pub fn dispatch(&mut self, pane: &mut Pane, mut event: Event) -> (EventResult, Event) {
        let result = pane.dispatch(&mut self.doc, &mut event);
        self.doc.apply_default(&event);
        self.settle(pane);
        (result, event)
    }

    pub fn settle(&mut self, pane: &mut Pane) {
        loop {
            let pending = self.doc.take_pending_events();
            if pending.is_empty() {
                break;
            }
            for mut event in pending {
                pane.dispatch(&mut self.doc, &mut event);
            }
        }
    }

    pub fn enter(&mut self, pane: &mut Pane) {
        let event = Event::mouse(EventKind::MouseEnter, self.container, 10.0, 10.0);
        self.dispatch(pane, event);
    }

    pub fn leave(&mut self, pane: &mut Pane) {
        let event = Event::mouse(EventKind::MouseLeave, self.container, -10.0, -10.0);
        self.dispatch(pane, event);
    }

    pub fn scroll_to(&mut self, pane: &mut Pane, left: f64, top: f64) {
        self.doc.set_scroll_left(self.inner, left);
        self.doc.set_scroll_top(self.inner, top);
        self.settle(pane);
    }

    /// Advance the clock and fire every timer that comes due.
    pub fn wait(&mut self, pane: &mut Pane, millis: u64) {
        for timer in self.doc.advance(Duration::from_millis(millis)) {
            pane.fire_timer(&mut self.doc, timer);
        }
    }

    pub fn shown(&self, thumb: NodeId) -> bool {
        self.doc.has_class(thumb, antiscroll::SHOWN_CLASS)
    }
}
