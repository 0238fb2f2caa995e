//! The overlay scrollbar widget.
//!
//! One [`Scrollbar`] type serves both axes; the [`Axis`] value chosen at
//! construction supplies the geometry. A scrollbar is owned by its pane and
//! is handed a [`PaneFrame`] (the pane's elements and options) on every call.
//!
//! Visibility follows hover, scroll and drag activity:
//! - entering the pane shows the thumb, leaving it hides the thumb unless a
//!   drag is in progress
//! - scrolling shows the thumb and, when the pointer is elsewhere, hides it
//!   again after [`SCROLL_HIDE_DELAY`]
//! - releasing a drag outside the pane hides the thumb
//!
//! Hiding only happens with auto-hide enabled.

mod axis;

use std::time::Duration;

use log::{debug, trace};

pub use axis::{Axis, Measure, ThumbGeometry, MIN_VERTICAL_THUMB};

use crate::dom::{Document, ListenerId, NodeId, TimerId};
use crate::event::{Bindings, Event, EventKind, EventResult};
use crate::options::InitialDisplay;
use crate::style::{matrix_position, DRAGGING_CLASS, SCROLLBAR_CLASS, SHOWN_CLASS};

/// Delay before a thumb revealed by scrolling hides again.
pub const SCROLL_HIDE_DELAY: Duration = Duration::from_millis(1500);

/// The pane state a scrollbar reads on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneFrame {
    /// The pane element, whose size is the viewport.
    pub container: NodeId,
    /// The natively scrolling content element.
    pub inner: NodeId,
    pub padding: f64,
    pub auto_hide: bool,
}

#[derive(Debug)]
pub struct Scrollbar {
    axis: Axis,
    thumb: NodeId,

    dragging: bool,
    hovering: bool,
    shown: bool,
    /// Pending hide, if any.
    hiding: Option<TimerId>,
    /// Pointer position minus thumb translation when the drag started.
    drag_origin: (f64, f64),

    pane_events: Bindings,
    thumb_events: Bindings,
    inner_events: Bindings,
    /// Document-level listeners, bound only while dragging.
    owner_events: Option<Bindings>,
}

impl Scrollbar {
    /// Insert a thumb into the pane and start listening.
    pub fn new(
        doc: &mut dyn Document,
        frame: &PaneFrame,
        axis: Axis,
        initial_display: InitialDisplay,
    ) -> Self {
        let thumb = doc.create_element(&[SCROLLBAR_CLASS, axis.class()]);
        doc.append_child(frame.container, thumb);

        // hovering
        let mut pane_events = Bindings::new(frame.container);
        pane_events
            .bind(doc, EventKind::MouseEnter)
            .bind(doc, EventKind::MouseLeave);

        // dragging
        let mut thumb_events = Bindings::new(thumb);
        thumb_events.bind(doc, EventKind::MouseDown);

        // scrolling
        let mut inner_events = Bindings::new(frame.inner);
        inner_events
            .bind(doc, EventKind::Scroll)
            .bind(doc, EventKind::Wheel);

        let mut scrollbar = Self {
            axis,
            thumb,
            dragging: false,
            hovering: false,
            shown: false,
            hiding: None,
            drag_origin: (0.0, 0.0),
            pane_events,
            thumb_events,
            inner_events,
            owner_events: None,
        };
        debug!("created {} scrollbar {thumb}", axis.name());

        if let InitialDisplay::After(delay) = initial_display {
            scrollbar.show(doc, frame);
            if frame.auto_hide {
                scrollbar.schedule_hide(doc, delay);
            }
        }

        scrollbar
    }

    /// Unbind every listener, cancel the pending hide and remove the thumb.
    pub fn destroy(mut self, doc: &mut dyn Document) {
        self.inner_events.unbind_all(doc);
        self.thumb_events.unbind_all(doc);
        self.pane_events.unbind_all(doc);
        if let Some(mut owner) = self.owner_events.take() {
            owner.unbind_all(doc);
            doc.set_selection_suppressed(false);
        }
        self.cancel_hide(doc);
        doc.remove(self.thumb);
        debug!("destroyed {} scrollbar {}", self.axis.name(), self.thumb);
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The thumb element.
    pub fn thumb(&self) -> NodeId {
        self.thumb
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Timer that will hide the thumb, if one is scheduled.
    pub fn pending_hide(&self) -> Option<TimerId> {
        self.hiding
    }

    /// Whether `listener` is one of this scrollbar's registrations.
    pub fn listens(&self, listener: ListenerId) -> bool {
        self.kind_of(listener).is_some()
    }

    fn kind_of(&self, listener: ListenerId) -> Option<EventKind> {
        self.pane_events
            .kind_of(listener)
            .or_else(|| self.thumb_events.kind_of(listener))
            .or_else(|| self.inner_events.kind_of(listener))
            .or_else(|| {
                self.owner_events
                    .as_ref()
                    .and_then(|owner| owner.kind_of(listener))
            })
    }

    // -------------------------------------------------------------------------
    // Geometry and visibility
    // -------------------------------------------------------------------------

    /// Recompute thumb length and position. Returns whether the content
    /// overflows along this axis.
    pub fn update(&mut self, doc: &mut dyn Document, frame: &PaneFrame) -> bool {
        let measure = self.axis.measure(doc, frame.container, frame.inner);
        let geometry = self.axis.geometry(measure, frame.padding);
        self.axis.apply(doc, self.thumb, geometry);
        trace!(
            "{} thumb: length {} offset {} ({measure:?})",
            self.axis.name(),
            geometry.length,
            geometry.offset
        );
        geometry.overflowing
    }

    /// Show the thumb if it is hidden and there is something to scroll.
    pub fn show(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        if !self.shown && self.update(doc, frame) {
            doc.add_class(self.thumb, SHOWN_CLASS);
            self.cancel_hide(doc);
            self.shown = true;
        }
    }

    /// Hide the thumb. Does nothing with auto-hide off.
    pub fn hide(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        if frame.auto_hide && self.shown {
            doc.remove_class(self.thumb, SHOWN_CLASS);
            self.shown = false;
        }
    }

    fn schedule_hide(&mut self, doc: &mut dyn Document, delay: Duration) {
        self.cancel_hide(doc);
        self.hiding = Some(doc.set_timeout(delay));
    }

    fn cancel_hide(&mut self, doc: &mut dyn Document) {
        if let Some(timer) = self.hiding.take() {
            doc.clear_timeout(timer);
        }
    }

    /// Run the hide scheduled under `timer`. Returns false if the timer is
    /// not this scrollbar's pending hide.
    pub fn fire_timer(&mut self, doc: &mut dyn Document, frame: &PaneFrame, timer: TimerId) -> bool {
        if self.hiding != Some(timer) {
            return false;
        }
        self.hiding = None;
        self.hide(doc, frame);
        true
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// Deliver an event reached through one of this scrollbar's listeners.
    pub fn handle(
        &mut self,
        doc: &mut dyn Document,
        frame: &PaneFrame,
        listener: ListenerId,
        event: &mut Event,
    ) -> EventResult {
        let Some(kind) = self.kind_of(listener) else {
            return EventResult::Ignored;
        };

        match kind {
            EventKind::MouseEnter => self.mouse_enter(doc, frame),
            EventKind::MouseLeave => self.mouse_leave(doc, frame),
            EventKind::Scroll => self.scroll(doc, frame),
            EventKind::Wheel => return self.wheel(doc, frame, event),
            EventKind::MouseDown => return self.mouse_down(doc, event),
            EventKind::MouseMove => self.mouse_move(doc, frame, event),
            EventKind::MouseUp => self.cancel_dragging(doc, frame),
        }
        EventResult::Ignored
    }

    fn mouse_enter(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        self.hovering = true;
        self.show(doc, frame);
    }

    fn mouse_leave(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        self.hovering = false;
        if !self.dragging && frame.auto_hide {
            self.hide(doc, frame);
        }
    }

    fn scroll(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        if !self.shown {
            self.show(doc, frame);
            if !self.hovering && !self.dragging && frame.auto_hide {
                self.schedule_hide(doc, SCROLL_HIDE_DELAY);
            }
        }
        self.update(doc, frame);
    }

    /// Swallow the wheel only when the content is already at the end the
    /// wheel pushes towards, so outer scroll containers get it otherwise.
    fn wheel(&mut self, doc: &mut dyn Document, frame: &PaneFrame, event: &mut Event) -> EventResult {
        let measure = self.axis.measure(doc, frame.container, frame.inner);
        if self.axis.wheel_blocked(measure, self.axis.wheel_delta(event)) {
            event.prevent_default();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn mouse_down(&mut self, doc: &mut dyn Document, event: &mut Event) -> EventResult {
        event.prevent_default();

        self.dragging = true;
        doc.add_class(self.thumb, DRAGGING_CLASS);

        let transform = doc.computed_style(self.thumb, "transform").unwrap_or_default();
        let (x, y) = matrix_position(&transform);
        self.drag_origin = (event.page_x - x, event.page_y - y);

        doc.set_selection_suppressed(true);

        if let Some(mut stale) = self.owner_events.take() {
            stale.unbind_all(doc);
        }
        let mut owner = Bindings::new(doc.root());
        owner
            .bind(doc, EventKind::MouseMove)
            .bind(doc, EventKind::MouseUp);
        self.owner_events = Some(owner);

        debug!("{} drag started at {:?}", self.axis.name(), self.drag_origin);
        EventResult::Consumed
    }

    fn mouse_move(&mut self, doc: &mut dyn Document, frame: &PaneFrame, event: &Event) {
        if !self.dragging {
            return;
        }

        let origin = match self.axis {
            Axis::Horizontal => self.drag_origin.0,
            Axis::Vertical => self.drag_origin.1,
        };
        let pointer = self.axis.pointer(event) - origin;
        let measure = self.axis.measure(doc, frame.container, frame.inner);
        let thumb = self.axis.thumb_length(doc, self.thumb);

        if let Some(offset) = self.axis.drag_offset(measure, frame.padding, thumb, pointer) {
            self.axis.set_scroll(doc, frame.inner, offset);
        }
    }

    /// End a drag. Does nothing when no drag is in progress.
    pub fn cancel_dragging(&mut self, doc: &mut dyn Document, frame: &PaneFrame) {
        if !self.dragging {
            return;
        }

        self.dragging = false;
        doc.remove_class(self.thumb, DRAGGING_CLASS);
        doc.set_selection_suppressed(false);

        if let Some(mut owner) = self.owner_events.take() {
            owner.unbind_all(doc);
        }
        self.cancel_hide(doc);
        debug!("{} drag ended", self.axis.name());

        if !self.hovering {
            self.hide(doc, frame);
        }
    }
}
