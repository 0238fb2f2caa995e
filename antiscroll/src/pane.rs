//! The pane controller: decides which axes need a scrollbar and owns them.

use log::debug;

use crate::dom::{Document, NodeId, TimerId};
use crate::error::{Error, Result};
use crate::event::{Event, EventResult};
use crate::measure::scrollbar_size;
use crate::options::Options;
use crate::scrollbar::{Axis, PaneFrame, Scrollbar};
use crate::style::{px, INNER_CLASS};

/// A scrollable container with overlay scrollbars.
///
/// The container must hold an element with the `antiscroll-inner` class; that
/// element scrolls natively and the pane draws thumbs over it. The document
/// is passed into every call, and events for the pane must be handed to
/// [`Pane::dispatch`], timers to [`Pane::fire_timer`].
///
/// ```
/// use antiscroll::{Document, MemoryDocument, Options, Pane, INNER_CLASS};
///
/// let mut doc = MemoryDocument::new();
/// let container = doc.create_element(&["antiscroll-wrap"]);
/// let inner = doc.create_element(&[INNER_CLASS]);
/// let root = doc.root();
/// doc.append_child(root, container);
/// doc.append_child(container, inner);
/// doc.set_size(container, 200.0, 100.0);
/// doc.set_size(inner, 200.0, 100.0);
/// doc.set_content_size(inner, 1000.0, 100.0);
///
/// let pane = Pane::create(&mut doc, container, Options::default()).unwrap();
/// assert!(pane.horizontal().is_some());
/// assert!(pane.vertical().is_none());
/// ```
#[derive(Debug)]
pub struct Pane {
    frame: PaneFrame,
    options: Options,
    horizontal: Option<Scrollbar>,
    vertical: Option<Scrollbar>,
}

impl Pane {
    /// Attach scrollbars to `container` and build them for the current content.
    pub fn create(doc: &mut dyn Document, container: NodeId, options: Options) -> Result<Self> {
        if !doc.contains(container) {
            return Err(Error::MissingContainer(container));
        }
        let inner = doc
            .query_selector(container, INNER_CLASS)
            .ok_or(Error::MissingInner(container))?;

        let mut pane = Self {
            frame: PaneFrame {
                container,
                inner,
                padding: options.padding,
                auto_hide: options.auto_hide,
            },
            options,
            horizontal: None,
            vertical: None,
        };
        pane.rebuild(doc);
        Ok(pane)
    }

    pub fn container(&self) -> NodeId {
        self.frame.container
    }

    pub fn inner(&self) -> NodeId {
        self.frame.inner
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn horizontal(&self) -> Option<&Scrollbar> {
        self.horizontal.as_ref()
    }

    pub fn vertical(&self) -> Option<&Scrollbar> {
        self.vertical.as_ref()
    }

    pub fn scrollbar(&self, axis: Axis) -> Option<&Scrollbar> {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// Create, update or remove each enabled axis's scrollbar to match the
    /// current content size.
    pub fn refresh(&mut self, doc: &mut dyn Document) -> &mut Self {
        let size = scrollbar_size(doc);
        let x = self.options.horizontal_enabled();
        let y = self.options.vertical_enabled();
        let (container, inner) = (self.frame.container, self.frame.inner);

        // Native scrollbars of the other axis are pushed out of view, so the
        // content may exceed the container by that much without overflowing.
        let need_horizontal =
            doc.scroll_width(inner) > doc.offset_width(container) + if y { size } else { 0.0 };
        let need_vertical =
            doc.scroll_height(inner) > doc.offset_height(container) + if x { size } else { 0.0 };

        if x {
            self.sync(doc, Axis::Horizontal, need_horizontal);
        }
        if y {
            self.sync(doc, Axis::Vertical, need_vertical);
        }
        self
    }

    fn sync(&mut self, doc: &mut dyn Document, axis: Axis, needed: bool) {
        let slot = match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        };

        match (slot.take(), needed) {
            (None, true) => {
                *slot = Some(Scrollbar::new(
                    doc,
                    &self.frame,
                    axis,
                    self.options.initial_display,
                ));
            }
            (Some(scrollbar), false) => scrollbar.destroy(doc),
            (Some(mut scrollbar), true) => {
                scrollbar.update(doc, &self.frame);
                *slot = Some(scrollbar);
            }
            (None, false) => {}
        }
    }

    /// Tear down the scrollbars, resize the inner element so its native
    /// scrollbars fall outside the container, and refresh.
    pub fn rebuild(&mut self, doc: &mut dyn Document) -> &mut Self {
        self.destroy(doc);

        let inner = self.frame.inner;
        doc.clear_style(inner);

        let size = scrollbar_size(doc);
        let width = doc.offset_width(inner)
            + if self.options.vertical_enabled() { size } else { 0.0 };
        let height = doc.offset_height(inner)
            + if self.options.horizontal_enabled() { size } else { 0.0 };
        doc.set_style(inner, "width", &px(width));
        doc.set_style(inner, "height", &px(height));
        debug!("rebuilt pane {}: inner sized {width}x{height}", self.frame.container);

        self.refresh(doc)
    }

    /// Remove both scrollbars.
    pub fn destroy(&mut self, doc: &mut dyn Document) -> &mut Self {
        if let Some(scrollbar) = self.horizontal.take() {
            scrollbar.destroy(doc);
        }
        if let Some(scrollbar) = self.vertical.take() {
            scrollbar.destroy(doc);
        }
        self
    }

    /// Deliver an event to every scrollbar listener it reaches.
    pub fn dispatch(&mut self, doc: &mut dyn Document, event: &mut Event) -> EventResult {
        let mut result = EventResult::Ignored;

        for listener in doc.route(event) {
            let scrollbar = [self.horizontal.as_mut(), self.vertical.as_mut()]
                .into_iter()
                .flatten()
                .find(|scrollbar| scrollbar.listens(listener));

            // Listeners removed by an earlier handler are skipped
            if let Some(scrollbar) = scrollbar {
                result = result.or(scrollbar.handle(doc, &self.frame, listener, event));
            }
        }

        result
    }

    /// Run the hide scheduled under `timer`. Returns false if no scrollbar
    /// of this pane owns the timer.
    pub fn fire_timer(&mut self, doc: &mut dyn Document, timer: TimerId) -> bool {
        [self.horizontal.as_mut(), self.vertical.as_mut()]
            .into_iter()
            .flatten()
            .any(|scrollbar| scrollbar.fire_timer(doc, &self.frame, timer))
    }
}
