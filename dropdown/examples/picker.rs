//! Dropdown picker example
//!
//! Renders a dropdown into a terminal window and drives it with the mouse:
//! - Click the field to open or close the option list
//! - Click an option to select it
//! - Scroll over the open list to reach options past the fifth
//! - 'q' or Escape quits
//!
//! Terminal cells stand in for points: one cell is GLYPH_WIDTH points wide
//! and half a row height tall, so the 44 point header is two cells tall.

use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CtEvent, KeyCode, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use dropdown::{Dropdown, HEADER_HEIGHT};
use tapdom::text::{align_offset, char_width, display_width, truncate_to_width, GLYPH_WIDTH};
use tapdom::{
    shared, Button, Color, DrawCommand, Event, Label, Point, Rect, Scene, TextAlign, View, Window,
    ROW_HEIGHT,
};

/// Points per terminal cell.
const CELL_WIDTH: f32 = GLYPH_WIDTH;
const CELL_HEIGHT: f32 = ROW_HEIGHT / 2.0;

const BACKDROP: Color = Color::new(16, 18, 24);

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("picker.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut window = Window::new(f32::from(cols) * CELL_WIDTH, f32::from(rows) * CELL_HEIGHT);

    let title = shared(Label::new("Dropdown picker").color(Color::WHITE));
    title
        .borrow_mut()
        .set_frame(Rect::new(CELL_WIDTH * 2.0, CELL_HEIGHT, 300.0, CELL_HEIGHT));
    window.attach(title);

    let hint = shared(Label::new("click the field, scroll the list, q quits").color(Color::GRAY));
    hint.borrow_mut().set_frame(Rect::new(
        CELL_WIDTH * 2.0,
        CELL_HEIGHT * 2.0,
        500.0,
        CELL_HEIGHT,
    ));
    window.attach(hint);

    let chosen = shared(Label::new("").color(Color::new(120, 220, 140)));
    chosen.borrow_mut().set_frame(Rect::new(
        CELL_WIDTH * 2.0,
        CELL_HEIGHT * 18.0,
        500.0,
        CELL_HEIGHT,
    ));
    window.attach(chosen.clone());

    let picker = shared(
        Dropdown::new(vec![
            "Low".to_string(),
            "Medium".to_string(),
            "High".to_string(),
            "Critical".to_string(),
            "Deferred".to_string(),
            "Blocked".to_string(),
        ])
        .with_placeholder("Choose a priority"),
    );
    picker.borrow_mut().set_frame(Rect::new(
        CELL_WIDTH * 2.0,
        CELL_HEIGHT * 4.0,
        CELL_WIDTH * 28.0,
        HEADER_HEIGHT,
    ));
    {
        let chosen = chosen.clone();
        picker
            .borrow_mut()
            .set_header_configurator(move |header, option| {
                if let Some(button) = header.as_any_mut().downcast_mut::<Button>() {
                    button.set_title(option);
                }
                chosen.borrow_mut().set_text(format!("selected: {option}"));
            });
    }
    window.attach(picker.clone());

    loop {
        draw(stdout, &window)?;

        match event::read()? {
            CtEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            CtEvent::Mouse(mouse) => {
                let at = Point::new(
                    (f32::from(mouse.column) + 0.5) * CELL_WIDTH,
                    (f32::from(mouse.row) + 0.5) * CELL_HEIGHT,
                );
                let forwarded = match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(Event::Tap(at)),
                    MouseEventKind::ScrollDown => Some(Event::Scroll {
                        at,
                        delta_y: CELL_HEIGHT,
                    }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll {
                        at,
                        delta_y: -CELL_HEIGHT,
                    }),
                    _ => None,
                };
                if let Some(forwarded) = forwarded {
                    picker.borrow_mut().handle_event(&forwarded, &mut window);
                }
            }
            _ => {}
        }
    }

    picker.borrow_mut().dismiss(&mut window);
    Ok(())
}

fn draw(stdout: &mut io::Stdout, window: &Window) -> io::Result<()> {
    let scene = window.render();
    let cols = (window.bounds().width / CELL_WIDTH) as usize;
    let rows = (window.bounds().height / CELL_HEIGHT) as usize;
    let mut screen = Screen::new(cols, rows);
    screen.rasterize(&scene);
    screen.flush(stdout)
}

// ============================================================================
// Scene Rasterizer
// ============================================================================

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: BACKDROP,
        }
    }
}

struct Screen {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Screen {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    fn rasterize(&mut self, scene: &Scene) {
        for command in scene.commands() {
            match command {
                DrawCommand::Fill { rect, color } => self.fill(*rect, *color),
                DrawCommand::Border { rect, color, .. } => self.border(*rect, *color),
                DrawCommand::Text {
                    rect,
                    content,
                    color,
                    align,
                } => self.text(*rect, content, *color, *align),
            }
        }
    }

    fn col_span(&self, rect: Rect) -> (usize, usize) {
        let start = (rect.x / CELL_WIDTH).max(0.0) as usize;
        let end = ((rect.right() / CELL_WIDTH).ceil().max(0.0) as usize).min(self.cols);
        (start.min(end), end)
    }

    fn row_span(&self, rect: Rect) -> (usize, usize) {
        let start = (rect.y / CELL_HEIGHT).max(0.0) as usize;
        let end = ((rect.bottom() / CELL_HEIGHT).ceil().max(0.0) as usize).min(self.rows);
        (start.min(end), end)
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        let (col_start, col_end) = self.col_span(rect);
        let (row_start, row_end) = self.row_span(rect);
        for row in row_start..row_end {
            for col in col_start..col_end {
                let cell = &mut self.cells[row * self.cols + col];
                cell.ch = ' ';
                cell.bg = color;
            }
        }
    }

    fn border(&mut self, rect: Rect, color: Color) {
        let (col_start, col_end) = self.col_span(rect);
        let (row_start, row_end) = self.row_span(rect);
        if col_start >= col_end || row_start >= row_end {
            return;
        }
        let (top, bottom) = (row_start, row_end - 1);
        let (left, right) = (col_start, col_end - 1);

        for col in col_start..col_end {
            self.put(col, top, '─', color);
            self.put(col, bottom, '─', color);
        }
        for row in row_start..row_end {
            self.put(left, row, '│', color);
            self.put(right, row, '│', color);
        }
        self.put(left, top, '┌', color);
        self.put(right, top, '┐', color);
        self.put(left, bottom, '└', color);
        self.put(right, bottom, '┘', color);
    }

    fn text(&mut self, rect: Rect, content: &str, color: Color, align: TextAlign) {
        let (col_start, col_end) = self.col_span(rect);
        let available = col_end.saturating_sub(col_start);
        if available == 0 {
            return;
        }
        let row = ((rect.y + rect.height / 2.0) / CELL_HEIGHT) as usize;
        if row >= self.rows {
            return;
        }

        let content = truncate_to_width(content, available);
        let mut col = col_start + align_offset(display_width(&content), available, align);
        for ch in content.chars() {
            let width = char_width(ch).max(1);
            if col + width > col_end {
                break;
            }
            self.put(col, row, ch, color);
            // Blank out the continuation cell of wide glyphs
            for extra in 1..width {
                self.put(col + extra, row, '\0', color);
            }
            col += width;
        }
    }

    fn put(&mut self, col: usize, row: usize, ch: char, fg: Color) {
        if col < self.cols && row < self.rows {
            let cell = &mut self.cells[row * self.cols + col];
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    fn flush(&self, stdout: &mut io::Stdout) -> io::Result<()> {
        let mut last_fg = None;
        let mut last_bg = None;

        for row in 0..self.rows {
            queue!(stdout, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if cell.ch == '\0' {
                    continue;
                }
                if last_fg != Some(cell.fg) {
                    queue!(stdout, SetForegroundColor(ct_color(cell.fg)))?;
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    queue!(stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                    last_bg = Some(cell.bg);
                }
                write!(stdout, "{}", cell.ch)?;
            }
        }

        stdout.flush()
    }
}

fn ct_color(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
