//! Per-axis geometry: where the thumb goes and how a drag maps back to a
//! scroll offset.

use crate::dom::{Document, NodeId};
use crate::event::Event;
use crate::style::{px, HORIZONTAL_CLASS, VERTICAL_CLASS};

/// Smallest vertical thumb, in pixels.
pub const MIN_VERTICAL_THUMB: f64 = 20.0;

/// Gap kept below a vertical thumb that would otherwise run past the track.
const VERTICAL_END_MARGIN: f64 = 3.0;

/// Scroll axis a scrollbar serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Extents along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure {
    /// Visible length of the pane.
    pub viewport: f64,
    /// Scrollable length of the content.
    pub content: f64,
    /// Current scroll offset of the content.
    pub position: f64,
}

impl Measure {
    pub fn new(viewport: f64, content: f64, position: f64) -> Self {
        Self {
            viewport,
            content,
            position,
        }
    }
}

/// Thumb placement computed from a [`Measure`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    /// Thumb length along the axis.
    pub length: f64,
    /// Thumb offset from the start of the track.
    pub offset: f64,
    /// Whether the content is longer than the viewport.
    pub overflowing: bool,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Marker class of the thumb element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Horizontal => HORIZONTAL_CLASS,
            Self::Vertical => VERTICAL_CLASS,
        }
    }

    /// Track length available to the thumb.
    pub fn track(viewport: f64, padding: f64) -> f64 {
        viewport - padding * 2.0
    }

    /// Thumb length and offset for the current scroll state.
    pub fn geometry(self, m: Measure, padding: f64) -> ThumbGeometry {
        if m.content <= 0.0 {
            return ThumbGeometry::default();
        }

        let track = Self::track(m.viewport, padding);
        let overflowing = m.viewport < m.content;

        match self {
            Self::Horizontal => ThumbGeometry {
                length: (track * m.viewport / m.content).floor(),
                offset: (track * m.position / m.content).floor(),
                overflowing,
            },
            Self::Vertical => {
                let length = (track * m.viewport / m.content).max(MIN_VERTICAL_THUMB);
                let mut offset = track * m.position / m.content;

                // The minimum length can push the thumb past the track end
                if offset + length > track {
                    let overflow = offset + length - track;
                    offset -= overflow + VERTICAL_END_MARGIN;
                }

                ThumbGeometry {
                    length: length.floor(),
                    offset: offset.floor(),
                    overflowing,
                }
            }
        }
    }

    /// Scroll offset for a thumb dragged to `pointer` pixels from the track
    /// start. The thumb is clamped to the track. `None` when the thumb fills
    /// the whole track and cannot move.
    pub fn drag_offset(self, m: Measure, padding: f64, thumb: f64, pointer: f64) -> Option<f64> {
        let span = Self::track(m.viewport, padding) - thumb;
        if span <= 0.0 || !pointer.is_finite() {
            return None;
        }

        let clamped = pointer.clamp(0.0, span);
        Some((m.content - m.viewport) * clamped / span)
    }

    /// Content is scrolled all the way to the start.
    pub fn at_lower_bound(self, m: Measure) -> bool {
        m.position <= 0.0
    }

    /// Content is scrolled all the way to the end.
    pub fn at_upper_bound(self, m: Measure) -> bool {
        m.position + m.viewport.ceil() >= m.content
    }

    /// Whether a wheel turn by `delta` would push past the end it is already at.
    pub fn wheel_blocked(self, m: Measure, delta: f64) -> bool {
        (delta < 0.0 && self.at_lower_bound(m)) || (delta > 0.0 && self.at_upper_bound(m))
    }

    // -------------------------------------------------------------------------
    // Document access
    // -------------------------------------------------------------------------

    /// Read the axis extents of a pane.
    pub fn measure(self, doc: &dyn Document, container: NodeId, inner: NodeId) -> Measure {
        match self {
            Self::Horizontal => Measure::new(
                doc.offset_width(container),
                doc.scroll_width(inner),
                doc.scroll_left(inner),
            ),
            Self::Vertical => Measure::new(
                doc.offset_height(container),
                doc.scroll_height(inner),
                doc.scroll_top(inner),
            ),
        }
    }

    /// Pointer coordinate along the axis.
    pub fn pointer(self, event: &Event) -> f64 {
        match self {
            Self::Horizontal => event.page_x,
            Self::Vertical => event.page_y,
        }
    }

    /// Wheel delta along the axis.
    pub fn wheel_delta(self, event: &Event) -> f64 {
        match self {
            Self::Horizontal => event.delta_x,
            Self::Vertical => event.delta_y,
        }
    }

    /// Current thumb length as laid out by the document.
    pub fn thumb_length(self, doc: &dyn Document, thumb: NodeId) -> f64 {
        match self {
            Self::Horizontal => doc.offset_width(thumb),
            Self::Vertical => doc.offset_height(thumb),
        }
    }

    pub fn set_scroll(self, doc: &mut dyn Document, inner: NodeId, value: f64) {
        match self {
            Self::Horizontal => doc.set_scroll_left(inner, value),
            Self::Vertical => doc.set_scroll_top(inner, value),
        }
    }

    /// Write thumb length and position as inline styles.
    pub fn apply(self, doc: &mut dyn Document, thumb: NodeId, geometry: ThumbGeometry) {
        let (size, function) = match self {
            Self::Horizontal => ("width", "translateX"),
            Self::Vertical => ("height", "translateY"),
        };
        doc.set_style(
            thumb,
            "transform",
            &format!("{function}({})", px(geometry.offset)),
        );
        doc.set_style(thumb, size, &px(geometry.length));
    }
}
