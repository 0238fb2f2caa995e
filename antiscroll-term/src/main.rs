//! Terminal playground for an antiscroll pane.
//!
//! Maps the terminal grid onto an in-memory document, feeds it crossterm
//! mouse input and drives hide timers from the poll timeout. Logs go to
//! `antiscroll.log`.

mod buffer;
mod page;
mod terminal;
mod theme;

use std::fs::File;
use std::io;
use std::time::Instant;

use antiscroll::{Event, MemoryDocument, Options, Pane};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info, trace};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::buffer::Buffer;
use crate::page::{cell_center, sample_lines, Page, CELL_HEIGHT, CELL_WIDTH};
use crate::terminal::Terminal;
use crate::theme::Theme;

/// Pixels scrolled per wheel notch.
const WHEEL_STEP: f64 = 3.0 * CELL_HEIGHT;

fn main() -> io::Result<()> {
    let log_file = File::create("antiscroll.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(io::Error::other)?;

    let mut term = Terminal::new()?;
    let mut app = App::new(term.size())?;

    loop {
        term.draw(|buffer| app.paint(buffer))?;

        let events = term.poll(app.doc.next_timer_in())?;
        app.tick();

        for event in events {
            if !app.handle(event) {
                info!("quit");
                return Ok(());
            }
        }
    }
}

struct App {
    doc: MemoryDocument,
    pane: Pane,
    page: Page,
    theme: Theme,
    /// When the document clock was last advanced.
    clock: Instant,
}

impl App {
    fn new((columns, rows): (u16, u16)) -> io::Result<Self> {
        // Native scrollbars are one cell wide
        let mut doc = MemoryDocument::with_native_scrollbar(CELL_WIDTH);
        let mut page = Page::build(&mut doc, sample_lines(240));
        page.resize(&mut doc, columns, rows);

        let pane = Pane::create(&mut doc, page.container, Options::default())
            .map_err(io::Error::other)?;
        page.place_thumbs(&mut doc, &pane);
        info!("pane ready in {:?} on a {columns}x{rows} terminal", page.area());

        Ok(Self {
            doc,
            pane,
            page,
            theme: Theme::default(),
            clock: Instant::now(),
        })
    }

    /// Advance the document clock to real time and run due hide timers.
    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.clock);
        self.clock = now;

        let mut fired = false;
        for timer in self.doc.advance(elapsed) {
            fired |= self.pane.fire_timer(&mut self.doc, timer);
        }
        if fired {
            trace!("hide timer fired");
        }
    }

    /// Returns false when the user asked to quit.
    fn handle(&mut self, event: CrosstermEvent) -> bool {
        match event {
            CrosstermEvent::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Char('r') => {
                    info!("rebuilding pane");
                    self.pane.rebuild(&mut self.doc);
                    self.settle();
                }
                _ => {}
            },
            CrosstermEvent::Mouse(mouse) => self.mouse(mouse),
            CrosstermEvent::Resize(columns, rows) => {
                debug!("terminal resized to {columns}x{rows}");
                self.page.resize(&mut self.doc, columns, rows);
                self.pane.rebuild(&mut self.doc);
                self.settle();
            }
            _ => {}
        }
        true
    }

    fn mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = cell_center(mouse.column, mouse.row);

        let events = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.doc.pointer_move(x, y)
            }
            MouseEventKind::Down(MouseButton::Left) => vec![self.doc.pointer_down(x, y)],
            MouseEventKind::Up(MouseButton::Left) => vec![self.doc.pointer_up(x, y)],
            MouseEventKind::ScrollDown => vec![self.doc.wheel(x, y, 0.0, WHEEL_STEP)],
            MouseEventKind::ScrollUp => vec![self.doc.wheel(x, y, 0.0, -WHEEL_STEP)],
            MouseEventKind::ScrollRight => vec![self.doc.wheel(x, y, WHEEL_STEP, 0.0)],
            MouseEventKind::ScrollLeft => vec![self.doc.wheel(x, y, -WHEEL_STEP, 0.0)],
            _ => Vec::new(),
        };

        for event in events {
            self.dispatch(event);
        }
    }

    /// Deliver an event, run its default action, then deliver the scroll
    /// notifications that followed.
    fn dispatch(&mut self, mut event: Event) {
        let result = self.pane.dispatch(&mut self.doc, &mut event);
        trace!("{} on {}: {result:?}", event.kind.name(), event.target);

        self.doc.apply_default(&event);
        self.settle();
    }

    fn settle(&mut self) {
        loop {
            let pending = self.doc.take_pending_events();
            if pending.is_empty() {
                break;
            }
            for mut event in pending {
                self.pane.dispatch(&mut self.doc, &mut event);
            }
        }
        self.page.place_thumbs(&mut self.doc, &self.pane);
    }

    fn paint(&self, buffer: &mut Buffer) {
        self.page.paint(&self.doc, &self.pane, buffer, &self.theme);
    }
}
