use std::collections::HashMap;
use std::time::Duration;

use log::{trace, warn};

use super::{Document, ListenerId, NodeId, Rect, TimerId};
use crate::event::{Event, EventKind};
use crate::style::{parse_px, resolve_transform};

#[derive(Debug, Clone, Default)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    /// Inline styles in insertion order.
    style: Vec<(String, String)>,
    /// Offset size when no inline width/height is set.
    natural: (f64, f64),
    /// Size of the scrolled content.
    content: (f64, f64),
    scroll: (f64, f64),
    /// Stylesheet-level `overflow: scroll` per axis (x, y).
    overflow: (bool, bool),
    bounds: Rect,
}

impl Node {
    fn inline(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    fn scrolls_x(&self) -> bool {
        self.overflow.0 || self.overflows_inline("overflow-x")
    }

    fn scrolls_y(&self) -> bool {
        self.overflow.1 || self.overflows_inline("overflow-y")
    }

    fn overflows_inline(&self, property: &str) -> bool {
        self.inline(property) == Some("scroll") || self.inline("overflow") == Some("scroll")
    }
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    node: NodeId,
    kind: EventKind,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    due: Duration,
}

/// In-process [`Document`] with explicit geometry and a virtual clock.
///
/// Nothing is laid out automatically: the host states each node's natural
/// size, content size and page bounds. Inline `width`/`height` pixel styles
/// override the natural size, and scrolling nodes give up
/// `native_scrollbar` pixels of client area per scrolling axis, the way a
/// browser with classic scrollbars does.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_node: u64,
    listeners: Vec<Listener>,
    next_listener: u64,
    timers: Vec<Timer>,
    next_timer: u64,
    now: Duration,
    native_scrollbar: f64,
    selection_suppressed: bool,
    /// Events produced by the document itself (scroll notifications).
    pending: Vec<Event>,
    /// Hovered chain, outermost first.
    hovered: Vec<NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Document whose native scrollbars take no space.
    pub fn new() -> Self {
        Self::with_native_scrollbar(0.0)
    }

    /// Document whose native scrollbars are `thickness` pixels wide.
    pub fn with_native_scrollbar(thickness: f64) -> Self {
        let root = NodeId::new(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::default());

        Self {
            nodes,
            root,
            next_node: 1,
            listeners: Vec::new(),
            next_listener: 0,
            timers: Vec::new(),
            next_timer: 0,
            now: Duration::ZERO,
            native_scrollbar: thickness,
            selection_suppressed: false,
            pending: Vec::new(),
            hovered: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Geometry setup
    // -------------------------------------------------------------------------

    /// Set the offset size a node has without inline sizing.
    pub fn set_size(&mut self, node: NodeId, width: f64, height: f64) {
        if let Some(n) = self.node_mut(node) {
            n.natural = (width, height);
        }
    }

    /// Set the size of the content a node scrolls over.
    pub fn set_content_size(&mut self, node: NodeId, width: f64, height: f64) {
        if let Some(n) = self.node_mut(node) {
            n.content = (width, height);
        }
        self.clamp_scroll(node);
    }

    /// Give a node stylesheet-level `overflow: scroll` on the chosen axes.
    pub fn set_scrollable(&mut self, node: NodeId, x: bool, y: bool) {
        if let Some(n) = self.node_mut(node) {
            n.overflow = (x, y);
        }
        self.clamp_scroll(node);
    }

    /// Place a node in page space for hit testing.
    pub fn set_bounds(&mut self, node: NodeId, bounds: Rect) {
        if let Some(n) = self.node_mut(node) {
            n.bounds = bounds;
        }
    }

    pub fn bounds(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(&node).map(|n| n.bounds)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn native_scrollbar(&self) -> f64 {
        self.native_scrollbar
    }

    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners registered on `node`.
    pub fn listeners_on(&self, node: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.node == node).count()
    }

    /// Drain events the document raised on its own, such as scroll
    /// notifications after a scroll offset changed.
    pub fn take_pending_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time until the earliest pending timer is due.
    pub fn next_timer_in(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and return the timers that became due, in
    /// deadline order. Returned timers are no longer pending.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<Timer> = self.timers.iter().filter(|t| t.due <= now).copied().collect();
        self.timers.retain(|t| t.due > now);
        due.sort_by_key(|t| (t.due, t.id));

        due.into_iter().map(|t| t.id).collect()
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// Deepest node whose bounds contain the point. Later siblings win.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        self.children(self.root)
            .iter()
            .rev()
            .find_map(|child| self.hit_test_node(*child, x, y))
    }

    fn hit_test_node(&self, node: NodeId, x: f64, y: f64) -> Option<NodeId> {
        let n = self.nodes.get(&node)?;
        if !n.bounds.contains(x, y) {
            return None;
        }

        // Check children in reverse order (last appended = on top)
        n.children
            .iter()
            .rev()
            .find_map(|child| self.hit_test_node(*child, x, y))
            .or(Some(node))
    }

    /// Target of a pointer event at the point; the root when nothing is hit.
    fn pointer_target(&self, x: f64, y: f64) -> NodeId {
        self.hit_test(x, y).unwrap_or(self.root)
    }

    /// Chain of nodes from the root's child down to `node`.
    fn chain(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                break;
            }
            chain.push(id);
            current = self.parent(id);
        }
        chain.reverse();
        chain
    }

    /// Move the pointer. Produces `mouseleave` for nodes left (innermost
    /// first), `mouseenter` for nodes entered (outermost first) and a
    /// `mousemove` at the deepest node under the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Vec<Event> {
        let target = self.pointer_target(x, y);
        let chain = self.chain(target);
        let mut events = Vec::new();

        for node in self.hovered.iter().rev() {
            if !chain.contains(node) && self.nodes.contains_key(node) {
                events.push(Event::mouse(EventKind::MouseLeave, *node, x, y));
            }
        }
        for node in &chain {
            if !self.hovered.contains(node) {
                events.push(Event::mouse(EventKind::MouseEnter, *node, x, y));
            }
        }
        events.push(Event::mouse(EventKind::MouseMove, target, x, y));

        self.hovered = chain;
        events
    }

    pub fn pointer_down(&self, x: f64, y: f64) -> Event {
        Event::mouse(EventKind::MouseDown, self.pointer_target(x, y), x, y)
    }

    pub fn pointer_up(&self, x: f64, y: f64) -> Event {
        Event::mouse(EventKind::MouseUp, self.pointer_target(x, y), x, y)
    }

    pub fn wheel(&self, x: f64, y: f64, delta_x: f64, delta_y: f64) -> Event {
        Event::wheel(self.pointer_target(x, y), x, y, delta_x, delta_y)
    }

    /// Run the default action of an event that was not cancelled. A wheel
    /// scrolls the nearest ancestor that has something to scroll.
    pub fn apply_default(&mut self, event: &Event) {
        if event.kind != EventKind::Wheel || event.default_prevented() {
            return;
        }

        let mut current = Some(event.target);
        while let Some(node) = current {
            let can_x = self.scroll_width(node) > self.client_width(node);
            let can_y = self.scroll_height(node) > self.client_height(node);
            if (can_x && event.delta_x != 0.0) || (can_y && event.delta_y != 0.0) {
                let left = self.scroll_left(node) + event.delta_x;
                let top = self.scroll_top(node) + event.delta_y;
                self.set_scroll_left(node, left);
                self.set_scroll_top(node, top);
                return;
            }
            current = self.parent(node);
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        let found = self.nodes.get_mut(&node);
        if found.is_none() {
            warn!("ignoring operation on unknown {node}");
        }
        found
    }

    fn max_scroll(&self, node: NodeId) -> (f64, f64) {
        (
            (self.scroll_width(node) - self.client_width(node)).max(0.0),
            (self.scroll_height(node) - self.client_height(node)).max(0.0),
        )
    }

    fn clamp_scroll(&mut self, node: NodeId) {
        let left = self.scroll_left(node);
        let top = self.scroll_top(node);
        self.set_scroll_left(node, left);
        self.set_scroll_top(node, top);
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|child| *child != node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = None;
        }
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node) && self.is_attached(node)
    }

    fn query_selector(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        // Depth-first, tree order
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.has_class(node, class) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev().copied());
        }
        None
    }

    fn create_element(&mut self, classes: &[&str]) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            Node {
                classes: classes.iter().map(|c| c.to_string()).collect(),
                ..Default::default()
            },
        );
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            warn!("cannot append {child} to {parent}: unknown node");
            return;
        }
        self.detach(child);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root {
            warn!("refusing to remove the document root");
            return;
        }
        if !self.nodes.contains_key(&node) {
            warn!("cannot remove unknown {node}");
            return;
        }
        self.detach(node);

        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(n) = self.nodes.remove(&id) {
                stack.extend(n.children);
            }
        }

        let nodes = &self.nodes;
        self.listeners.retain(|l| nodes.contains_key(&l.node));
        self.hovered.retain(|h| nodes.contains_key(h));
        trace!("removed {node}");
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node)
            && !n.classes.iter().any(|c| c == class)
        {
            n.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes
            .get(&node)
            .and_then(|n| n.inline(property))
            .map(str::to_string)
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            match n.style.iter_mut().find(|(name, _)| name == property) {
                Some(entry) => entry.1 = value.to_string(),
                None => n.style.push((property.to_string(), value.to_string())),
            }
        }
        self.clamp_scroll(node);
    }

    fn clear_style(&mut self, node: NodeId) {
        if let Some(n) = self.node_mut(node) {
            n.style.clear();
        }
        self.clamp_scroll(node);
    }

    fn computed_style(&self, node: NodeId, property: &str) -> Option<String> {
        let n = self.nodes.get(&node)?;
        match property {
            "transform" => Some(resolve_transform(n.inline("transform").unwrap_or(""))),
            _ => n.inline(property).map(str::to_string),
        }
    }

    fn offset_width(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map_or(0.0, |n| {
            n.inline("width")
                .and_then(parse_px)
                .unwrap_or(n.natural.0)
        })
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map_or(0.0, |n| {
            n.inline("height")
                .and_then(parse_px)
                .unwrap_or(n.natural.1)
        })
    }

    fn client_width(&self, node: NodeId) -> f64 {
        let Some(n) = self.nodes.get(&node) else {
            return 0.0;
        };
        let gutter = if n.scrolls_y() { self.native_scrollbar } else { 0.0 };
        (self.offset_width(node) - gutter).max(0.0)
    }

    fn client_height(&self, node: NodeId) -> f64 {
        let Some(n) = self.nodes.get(&node) else {
            return 0.0;
        };
        let gutter = if n.scrolls_x() { self.native_scrollbar } else { 0.0 };
        (self.offset_height(node) - gutter).max(0.0)
    }

    fn scroll_width(&self, node: NodeId) -> f64 {
        self.nodes
            .get(&node)
            .map_or(0.0, |n| n.content.0.max(self.client_width(node)))
    }

    fn scroll_height(&self, node: NodeId) -> f64 {
        self.nodes
            .get(&node)
            .map_or(0.0, |n| n.content.1.max(self.client_height(node)))
    }

    fn scroll_left(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map_or(0.0, |n| n.scroll.0)
    }

    fn scroll_top(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map_or(0.0, |n| n.scroll.1)
    }

    fn set_scroll_left(&mut self, node: NodeId, value: f64) {
        let (max_x, _) = self.max_scroll(node);
        let value = if value.is_finite() { value.clamp(0.0, max_x) } else { 0.0 };
        if let Some(n) = self.nodes.get_mut(&node)
            && n.scroll.0 != value
        {
            n.scroll.0 = value;
            self.pending.push(Event::scroll(node));
        }
    }

    fn set_scroll_top(&mut self, node: NodeId, value: f64) {
        let (_, max_y) = self.max_scroll(node);
        let value = if value.is_finite() { value.clamp(0.0, max_y) } else { 0.0 };
        if let Some(n) = self.nodes.get_mut(&node)
            && n.scroll.1 != value
        {
            n.scroll.1 = value;
            self.pending.push(Event::scroll(node));
        }
    }

    fn add_listener(&mut self, node: NodeId, kind: EventKind) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        if self.nodes.contains_key(&node) {
            self.listeners.push(Listener { id, node, kind });
        } else {
            warn!("listener for {} on unknown {node} will never fire", kind.name());
        }
        id
    }

    fn remove_listener(&mut self, listener: ListenerId) {
        self.listeners.retain(|l| l.id != listener);
    }

    fn route(&self, event: &Event) -> Vec<ListenerId> {
        if !self.nodes.contains_key(&event.target) {
            return Vec::new();
        }

        let path: Vec<NodeId> = if event.kind.bubbles() {
            let mut path = Vec::new();
            let mut current = Some(event.target);
            while let Some(node) = current {
                path.push(node);
                current = self.parent(node);
            }
            path
        } else {
            vec![event.target]
        };

        path.iter()
            .flat_map(|node| {
                self.listeners
                    .iter()
                    .filter(move |l| l.node == *node && l.kind == event.kind)
                    .map(|l| l.id)
            })
            .collect()
    }

    fn set_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId::new(self.next_timer);
        self.next_timer += 1;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
        });
        id
    }

    fn clear_timeout(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
    }
}
