//! Native scrollbar thickness detection.

use std::sync::OnceLock;

use log::debug;

use crate::dom::Document;
use crate::style::{px, INNER_CLASS};

/// Thickness assumed when native scrollbars take no layout space (overlay scrollbars).
pub const FALLBACK_SCROLLBAR_SIZE: f64 = 14.0;

static SCROLLBAR_SIZE: OnceLock<f64> = OnceLock::new();

/// Thickness of a native scrollbar, measured on first use and cached for the
/// life of the process.
pub fn scrollbar_size(doc: &mut dyn Document) -> f64 {
    *SCROLLBAR_SIZE.get_or_init(|| {
        let size = probe(doc);
        debug!("native scrollbar size: {size}px");
        size
    })
}

/// Insert an off-screen scrolling box, compare its outer and inner width,
/// then take it out again.
fn probe(doc: &mut dyn Document) -> f64 {
    let root = doc.root();
    let probe = doc.create_element(&[INNER_CLASS]);
    doc.set_style(probe, "width", &px(50.0));
    doc.set_style(probe, "height", &px(50.0));
    doc.set_style(probe, "overflow-y", "scroll");
    doc.set_style(probe, "position", "absolute");
    doc.set_style(probe, "top", &px(-200.0));
    doc.set_style(probe, "left", &px(-200.0));
    doc.append_child(root, probe);

    let size = doc.offset_width(probe) - doc.client_width(probe);
    doc.remove(probe);

    if size > 0.0 {
        size
    } else {
        FALLBACK_SCROLLBAR_SIZE
    }
}
