use crate::dom::{Document, ListenerId, NodeId};

/// Event types the scrollbars listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer entered an element (does not bubble)
    MouseEnter,
    /// Pointer left an element (does not bubble)
    MouseLeave,
    /// Primary button pressed
    MouseDown,
    /// Pointer moved
    MouseMove,
    /// Primary button released
    MouseUp,
    /// Element scroll offset changed (does not bubble)
    Scroll,
    /// Mouse wheel turned
    Wheel,
}

impl EventKind {
    /// Whether the event propagates from its target to the ancestors.
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::MouseEnter | Self::MouseLeave | Self::Scroll)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::Scroll => "scroll",
            Self::Wheel => "wheel",
        }
    }
}

/// A dispatched event.
///
/// Pointer coordinates are page coordinates in pixels. Wheel deltas are
/// positive towards the end of the content (right, down).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    pub page_x: f64,
    pub page_y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    default_prevented: bool,
}

impl Event {
    pub fn mouse(kind: EventKind, target: NodeId, page_x: f64, page_y: f64) -> Self {
        Self {
            kind,
            target,
            page_x,
            page_y,
            delta_x: 0.0,
            delta_y: 0.0,
            default_prevented: false,
        }
    }

    pub fn scroll(target: NodeId) -> Self {
        Self::mouse(EventKind::Scroll, target, 0.0, 0.0)
    }

    pub fn wheel(target: NodeId, page_x: f64, page_y: f64, delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            ..Self::mouse(EventKind::Wheel, target, page_x, page_y)
        }
    }

    /// Cancel the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Outcome of dispatching an event to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// No scrollbar acted on the event.
    #[default]
    Ignored,
    /// A scrollbar handled the event and cancelled its default action.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }

    /// Combine two results; consumed wins.
    pub fn or(self, other: Self) -> Self {
        if self.is_consumed() { self } else { other }
    }
}

/// Handle for one listener registration. Release it with [`Subscription::unbind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: ListenerId,
    kind: EventKind,
}

impl Subscription {
    pub fn bind(doc: &mut dyn Document, node: NodeId, kind: EventKind) -> Self {
        Self {
            id: doc.add_listener(node, kind),
            kind,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn unbind(self, doc: &mut dyn Document) {
        doc.remove_listener(self.id);
    }
}

/// Listeners bound on a single element, released together.
#[derive(Debug)]
pub struct Bindings {
    node: NodeId,
    subscriptions: Vec<Subscription>,
}

impl Bindings {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            subscriptions: Vec::new(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Bind `kind` on the element. Binding a kind twice keeps the first registration.
    pub fn bind(&mut self, doc: &mut dyn Document, kind: EventKind) -> &mut Self {
        if !self.subscriptions.iter().any(|sub| sub.kind == kind) {
            self.subscriptions
                .push(Subscription::bind(doc, self.node, kind));
        }
        self
    }

    pub fn unbind(&mut self, doc: &mut dyn Document, kind: EventKind) {
        if let Some(pos) = self.subscriptions.iter().position(|sub| sub.kind == kind) {
            self.subscriptions.remove(pos).unbind(doc);
        }
    }

    pub fn unbind_all(&mut self, doc: &mut dyn Document) {
        for sub in self.subscriptions.drain(..) {
            sub.unbind(doc);
        }
    }

    /// Event kind a listener was bound for, if it belongs to this set.
    pub fn kind_of(&self, listener: ListenerId) -> Option<EventKind> {
        self.subscriptions
            .iter()
            .find(|sub| sub.id == listener)
            .map(|sub| sub.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }
}
