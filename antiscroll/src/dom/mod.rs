//! Element model the scrollbars are attached to.
//!
//! The widget never touches a concrete UI toolkit. Everything it needs from
//! the page (selector lookup, class and style access, box metrics, listener
//! registration and timers) goes through the [`Document`] trait, which the
//! embedding host implements. [`MemoryDocument`] is a complete in-process
//! implementation used by the tests and the terminal demo.

mod memory;
mod rect;

use std::fmt;
use std::time::Duration;

pub use memory::MemoryDocument;
pub use rect::Rect;

use crate::event::{Event, EventKind};

/// Identifies an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ID value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Identifies a listener registered with [`Document::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ID value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Identifies a single-shot timer registered with [`Document::set_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ID value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Host element API.
///
/// Geometry is reported in pixels with the same meaning as the browser
/// properties of the same name. Operations on nodes the document no longer
/// knows about are no-ops and getters return zero.
pub trait Document {
    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// The body element that detached helpers are appended to.
    fn root(&self) -> NodeId;

    /// Whether `node` is currently part of this document.
    fn contains(&self, node: NodeId) -> bool;

    /// First descendant of `scope` carrying `class`, in tree order.
    fn query_selector(&self, scope: NodeId, class: &str) -> Option<NodeId>;

    /// Create a detached element with the given classes.
    fn create_element(&mut self, classes: &[&str]) -> NodeId;

    /// Append `child` as the last child of `parent`, detaching it first.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Remove `node` and its subtree, dropping listeners bound on them.
    fn remove(&mut self, node: NodeId);

    // -------------------------------------------------------------------------
    // Classes and styles
    // -------------------------------------------------------------------------

    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Inline style value.
    fn style(&self, node: NodeId, property: &str) -> Option<String>;
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Drop every inline style of `node`.
    fn clear_style(&mut self, node: NodeId);

    /// Resolved style value, as `getComputedStyle` would report it.
    fn computed_style(&self, node: NodeId, property: &str) -> Option<String>;

    // -------------------------------------------------------------------------
    // Box metrics
    // -------------------------------------------------------------------------

    fn offset_width(&self, node: NodeId) -> f64;
    fn offset_height(&self, node: NodeId) -> f64;
    fn client_width(&self, node: NodeId) -> f64;
    fn client_height(&self, node: NodeId) -> f64;
    fn scroll_width(&self, node: NodeId) -> f64;
    fn scroll_height(&self, node: NodeId) -> f64;
    fn scroll_left(&self, node: NodeId) -> f64;
    fn scroll_top(&self, node: NodeId) -> f64;
    fn set_scroll_left(&mut self, node: NodeId, value: f64);
    fn set_scroll_top(&mut self, node: NodeId, value: f64);

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    fn add_listener(&mut self, node: NodeId, kind: EventKind) -> ListenerId;
    fn remove_listener(&mut self, listener: ListenerId);

    /// Listeners reached by `event`, in delivery order.
    fn route(&self, event: &Event) -> Vec<ListenerId>;

    /// Toggle suppression of text selection for the whole document.
    fn set_selection_suppressed(&mut self, suppressed: bool);

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    fn set_timeout(&mut self, delay: Duration) -> TimerId;
    fn clear_timeout(&mut self, timer: TimerId);
}
