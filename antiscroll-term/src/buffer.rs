use unicode_width::UnicodeWidthChar;

use crate::theme::Rgb;

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    /// Right half of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).and_then(|i| self.cells.get(i))
    }

    /// Cells outside the grid are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.cells.get_mut(i)) {
            *slot = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Paint a rectangle with `bg`.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgb) {
        for row in y..y.saturating_add(height) {
            for col in x..x.saturating_add(width) {
                self.set(col, row, Cell::new(' ').with_bg(bg));
            }
        }
    }

    /// Draw `text` into a `width`-column window starting at (x, y), after
    /// skipping its first `skip` columns. Colors come from `pen`. Returns the
    /// columns drawn.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        skip: usize,
        pen: Cell,
    ) -> usize {
        let width = width as usize;
        let mut column = 0;
        let mut drawn = 0;

        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }

            if column < skip {
                // A wide character cut by the left edge leaves a blank
                if column + w > skip {
                    drawn = column + w - skip;
                }
                column += w;
                continue;
            }

            let pos = column - skip;
            if pos + w > width {
                break;
            }
            let col = x.saturating_add(pos as u16);
            self.set(col, y, Cell { char: ch, ..pen });
            if w == 2 {
                let continuation = Cell {
                    char: ' ',
                    wide_continuation: true,
                    ..pen
                };
                self.set(col.saturating_add(1), y, continuation);
            }
            column += w;
            drawn = pos + w;
        }

        drawn
    }

    /// Cells that differ from `previous`, row by row.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let row_len = usize::from(self.width).max(1);
        self.cells
            .chunks(row_len)
            .zip(previous.cells.chunks(row_len))
            .enumerate()
            .flat_map(|(y, (row, before))| {
                row.iter()
                    .zip(before)
                    .enumerate()
                    .filter(|(_, (now, then))| now != then)
                    .map(move |(x, (cell, _))| (x as u16, y as u16, cell))
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Cell {
        Cell::default()
            .with_fg(Rgb::new(200, 200, 200))
            .with_bg(Rgb::new(10, 10, 10))
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.width())
            .filter_map(|x| buffer.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    #[test]
    fn test_draw_text_clips_to_window() {
        let mut buffer = Buffer::new(8, 1);
        let drawn = buffer.draw_text(1, 0, 4, "scrollbar", 0, pen());
        assert_eq!(drawn, 4);
        assert_eq!(row(&buffer, 0), " scro   ");
    }

    #[test]
    fn test_draw_text_skips_columns() {
        let mut buffer = Buffer::new(6, 1);
        buffer.draw_text(0, 0, 6, "scrollbar", 6, pen());
        assert_eq!(row(&buffer, 0), "bar   ");
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        let mut buffer = Buffer::new(6, 1);
        let drawn = buffer.draw_text(0, 0, 6, "日本語", 0, pen());
        assert_eq!(drawn, 6);
        assert!(buffer.get(1, 0).is_some_and(|cell| cell.wide_continuation));
        assert_eq!(row(&buffer, 0), "日本語");

        // Half of the first character is scrolled away
        let mut buffer = Buffer::new(6, 1);
        buffer.draw_text(0, 0, 6, "日本語", 1, pen());
        assert_eq!(buffer.get(0, 0).map(|cell| cell.char), Some(' '));
        assert_eq!(buffer.get(1, 0).map(|cell| cell.char), Some('本'));
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let previous = Buffer::new(3, 2);
        let mut current = Buffer::new(3, 2);
        current.set(2, 1, Cell::new('x'));

        let changed: Vec<_> = current.diff(&previous).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(changed, vec![(2, 1)]);
    }

    #[test]
    fn test_set_outside_grid_is_ignored() {
        let mut buffer = Buffer::new(2, 2);
        buffer.set(2, 0, Cell::new('x'));
        buffer.set(0, 2, Cell::new('x'));
        assert!(buffer.get(2, 0).is_none());
        assert_eq!(buffer.diff(&Buffer::new(2, 2)).count(), 0);

        buffer.set(1, 1, Cell::new('x'));
        buffer.clear();
        assert_eq!(buffer.diff(&Buffer::new(2, 2)).count(), 0);
    }
}
