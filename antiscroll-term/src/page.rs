//! The demo page: one pane of generated text laid out on the terminal grid.
//!
//! The document works in pixels; a terminal cell is [`CELL_WIDTH`] by
//! [`CELL_HEIGHT`] of them.

use antiscroll::{
    Axis, DRAGGING_CLASS, Document, INNER_CLASS, MemoryDocument, NodeId, Pane, Rect, SHOWN_CLASS,
    Scrollbar, matrix_position,
};
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};
use crate::theme::Theme;

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

const WORDS: [&str; 12] = [
    "overlay",
    "scrollbar",
    "thumb",
    "track",
    "viewport",
    "content",
    "wheel",
    "drag",
    "hover",
    "fade",
    "スクロール",
    "滚动条",
];

/// Numbered lines of varying length, some with double-width words.
pub fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let words = 4 + (i * 7) % 31;
            let mut line = format!("{:>4}  ", i + 1);
            for w in 0..words {
                line.push_str(WORDS[(i * 3 + w * 5) % WORDS.len()]);
                line.push(' ');
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Page position of the middle of a terminal cell.
pub fn cell_center(column: u16, row: u16) -> (f64, f64) {
    (
        f64::from(column) * CELL_WIDTH + CELL_WIDTH / 2.0,
        f64::from(row) * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    /// Area the pane takes on a `columns` x `rows` terminal: a margin around
    /// it and the last row left for the status line.
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        Self {
            x: 2,
            y: 1,
            width: columns.saturating_sub(4).max(1),
            height: rows.saturating_sub(3).max(1),
        }
    }

    pub fn pixels(self) -> Rect {
        Rect::new(
            f64::from(self.x) * CELL_WIDTH,
            f64::from(self.y) * CELL_HEIGHT,
            f64::from(self.width) * CELL_WIDTH,
            f64::from(self.height) * CELL_HEIGHT,
        )
    }
}

pub struct Page {
    pub container: NodeId,
    pub inner: NodeId,
    area: Area,
    lines: Vec<String>,
}

impl Page {
    /// Insert the pane elements and size the content after `lines`.
    pub fn build(doc: &mut MemoryDocument, lines: Vec<String>) -> Self {
        let root = doc.root();
        let container = doc.create_element(&["antiscroll-wrap"]);
        let inner = doc.create_element(&[INNER_CLASS]);
        doc.append_child(root, container);
        doc.append_child(container, inner);

        let columns = lines.iter().map(|line| line.width()).max().unwrap_or(0);
        doc.set_scrollable(inner, true, true);
        doc.set_content_size(
            inner,
            columns as f64 * CELL_WIDTH,
            lines.len() as f64 * CELL_HEIGHT,
        );

        Self {
            container,
            inner,
            area: Area::default(),
            lines,
        }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Fit the pane to the terminal. The pane must be rebuilt afterwards.
    pub fn resize(&mut self, doc: &mut MemoryDocument, columns: u16, rows: u16) {
        self.area = Area::for_terminal(columns, rows);
        let bounds = self.area.pixels();

        for node in [self.container, self.inner] {
            doc.set_size(node, bounds.width, bounds.height);
            doc.set_bounds(node, bounds);
        }
    }

    /// Give each thumb page bounds from its inline styles so pointer input
    /// can hit it.
    pub fn place_thumbs(&self, doc: &mut MemoryDocument, pane: &Pane) {
        let frame = self.area.pixels();
        let padding = pane.options().padding;

        for scrollbar in [pane.horizontal(), pane.vertical()].into_iter().flatten() {
            let bounds = thumb_bounds(doc, frame, padding, scrollbar);
            doc.set_bounds(scrollbar.thumb(), bounds);
        }
    }

    pub fn paint(&self, doc: &MemoryDocument, pane: &Pane, buffer: &mut Buffer, theme: &Theme) {
        let area = self.area;
        buffer.fill(0, 0, buffer.width(), buffer.height(), theme.background);
        buffer.fill(area.x, area.y, area.width, area.height, theme.surface);

        let skip = (doc.scroll_left(self.inner) / CELL_WIDTH).floor() as usize;
        let first = (doc.scroll_top(self.inner) / CELL_HEIGHT).floor() as usize;
        let text = Cell::default().with_fg(theme.text).with_bg(theme.surface);

        for (row, line) in self
            .lines
            .iter()
            .skip(first)
            .take(area.height as usize)
            .enumerate()
        {
            buffer.draw_text(area.x, area.y + row as u16, area.width, line, skip, text);
        }

        for scrollbar in [pane.horizontal(), pane.vertical()].into_iter().flatten() {
            self.paint_thumb(doc, scrollbar, buffer, theme);
        }

        self.paint_status(doc, buffer, theme);
    }

    fn paint_thumb(
        &self,
        doc: &MemoryDocument,
        scrollbar: &Scrollbar,
        buffer: &mut Buffer,
        theme: &Theme,
    ) {
        let thumb = scrollbar.thumb();
        if !doc.has_class(thumb, SHOWN_CLASS) {
            return;
        }
        let Some(bounds) = doc.bounds(thumb) else {
            return;
        };

        let color = if doc.has_class(thumb, DRAGGING_CLASS) {
            theme.thumb_dragging
        } else {
            theme.thumb
        };
        let pen = Cell::default().with_fg(color).with_bg(theme.surface);
        let area = self.area;

        match scrollbar.axis() {
            Axis::Horizontal => {
                let (start, end) = span(bounds.x, bounds.right(), CELL_WIDTH, area.x, area.width);
                let row = area.y + area.height - 1;
                for column in start..end {
                    buffer.set(column, row, Cell { char: '▄', ..pen });
                }
            }
            Axis::Vertical => {
                let (start, end) =
                    span(bounds.y, bounds.bottom(), CELL_HEIGHT, area.y, area.height);
                let column = area.x + area.width - 1;
                for row in start..end {
                    buffer.set(column, row, Cell { char: '▐', ..pen });
                }
            }
        }
    }

    fn paint_status(&self, doc: &MemoryDocument, buffer: &mut Buffer, theme: &Theme) {
        let status = format!(
            " x {:.0}/{:.0}  y {:.0}/{:.0}  │  wheel or drag to scroll · r rebuild · q quit",
            doc.scroll_left(self.inner),
            doc.scroll_width(self.inner) - doc.client_width(self.inner),
            doc.scroll_top(self.inner),
            doc.scroll_height(self.inner) - doc.client_height(self.inner),
        );
        let pen = Cell::default().with_fg(theme.muted).with_bg(theme.background);
        let row = buffer.height().saturating_sub(1);
        buffer.draw_text(0, row, buffer.width(), &status, 0, pen);
    }
}

/// Page bounds of a thumb. Thumbs sit along the bottom and right edges of the
/// pane, inset by the padding along their track.
fn thumb_bounds(doc: &MemoryDocument, frame: Rect, padding: f64, scrollbar: &Scrollbar) -> Rect {
    let thumb = scrollbar.thumb();
    let transform = doc.computed_style(thumb, "transform").unwrap_or_default();
    let (x, y) = matrix_position(&transform);

    match scrollbar.axis() {
        Axis::Horizontal => Rect::new(
            frame.x + padding + x,
            frame.bottom() - CELL_HEIGHT,
            doc.offset_width(thumb),
            CELL_HEIGHT,
        ),
        Axis::Vertical => Rect::new(
            frame.right() - CELL_WIDTH,
            frame.y + padding + y,
            CELL_WIDTH,
            doc.offset_height(thumb),
        ),
    }
}

/// Cells covered by the pixel range `[from, to)`, at least one, kept inside
/// the `offset`..`offset + len` cells of the pane.
fn span(from: f64, to: f64, cell: f64, offset: u16, len: u16) -> (u16, u16) {
    let lo = f64::from(offset);
    let hi = f64::from(offset) + f64::from(len);
    let start = (from / cell).floor().clamp(lo, hi - 1.0);
    let end = (to / cell).ceil().clamp(start + 1.0, hi);
    (start as u16, end as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (MemoryDocument, Page, Pane) {
        let mut doc = MemoryDocument::with_native_scrollbar(CELL_WIDTH);
        let mut page = Page::build(&mut doc, vec!["x".repeat(300); 100]);
        page.resize(&mut doc, 80, 24);
        let pane = Pane::create(&mut doc, page.container, Default::default()).unwrap();
        page.place_thumbs(&mut doc, &pane);
        (doc, page, pane)
    }

    #[test]
    fn test_area_leaves_margin_and_status_line() {
        let area = Area::for_terminal(80, 24);
        assert_eq!(
            area,
            Area {
                x: 2,
                y: 1,
                width: 76,
                height: 21
            }
        );
        assert_eq!(area.pixels(), Rect::new(16.0, 16.0, 608.0, 336.0));
    }

    #[test]
    fn test_thumbs_are_hit_at_their_cells() {
        let (doc, _, pane) = page();
        let horizontal = pane.horizontal().map(|s| s.thumb());
        let vertical = pane.vertical().map(|s| s.thumb());
        assert!(horizontal.is_some() && vertical.is_some());

        let (x, y) = cell_center(3, 21);
        assert_eq!(doc.hit_test(x, y), horizontal);

        let (x, y) = cell_center(77, 2);
        assert_eq!(doc.hit_test(x, y), vertical);

        let (x, y) = cell_center(40, 10);
        assert_eq!(doc.hit_test(x, y), Some(pane.inner()));
    }

    #[test]
    fn test_span_stays_inside_pane() {
        assert_eq!(span(18.0, 171.0, CELL_WIDTH, 2, 76), (2, 22));
        assert_eq!(span(0.0, 1.0, CELL_WIDTH, 2, 76), (2, 3));
        assert_eq!(span(700.0, 900.0, CELL_WIDTH, 2, 76), (77, 78));
    }

    #[test]
    fn test_sample_lines_are_numbered() {
        let lines = sample_lines(3);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("   1  "));
        assert!(lines[2].starts_with("   3  "));
    }
}
