//! Auto-hiding overlay scrollbars for a scrollable pane.
//!
//! A [`Pane`] wraps a container element holding an `antiscroll-inner`
//! content element. The content scrolls natively with its own scrollbars
//! pushed out of view, and the pane draws a styleable thumb per overflowing
//! axis that follows the scroll position, can be dragged, and fades out when
//! the pointer is elsewhere.

pub mod dom;
pub mod error;
pub mod event;
pub mod measure;
pub mod options;
pub mod pane;
pub mod scrollbar;
pub mod style;

pub use dom::{Document, ListenerId, MemoryDocument, NodeId, Rect, TimerId};
pub use error::{Error, Result};
pub use event::{Bindings, Event, EventKind, EventResult, Subscription};
pub use measure::{scrollbar_size, FALLBACK_SCROLLBAR_SIZE};
pub use options::{InitialDisplay, Options, DEFAULT_INITIAL_DISPLAY};
pub use pane::Pane;
pub use scrollbar::{
    Axis, Measure, PaneFrame, Scrollbar, ThumbGeometry, MIN_VERTICAL_THUMB, SCROLL_HIDE_DELAY,
};
pub use style::*;
