//! Terminal ownership and the ratatui-backed [`Display`].
//!
//! [`TerminalDisplay`] switches the terminal into raw mode on the alternate
//! screen when created and puts it back when dropped. A panic hook does the
//! same so a crash never leaves the shell in raw mode.

use super::display::{Display, Glyph};
use crate::core::constants::{SCORE_ROW, WIDTH};
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;

/// Rows drawn inside the border: the field plus the score line.
pub const SCREEN_ROWS: u16 = (SCORE_ROW + 1) as u16;
/// Columns drawn inside the border. Walls spawn one column past the field.
pub const SCREEN_COLS: u16 = (WIDTH + 1) as u16;

const TITLE: &str = " Clippy Bird ";

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Cell {
    const BLANK: Cell = Cell {
        symbol: ' ',
        style: Style::new(),
    };
}

fn glyph_style(glyph: Glyph) -> Style {
    match glyph {
        Glyph::Wall => Style::default().fg(Color::Green),
        Glyph::Bird => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

/// Back buffer of styled characters. Writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::BLANK; rows as usize * cols as usize],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn put(&mut self, row: u16, col: u16, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[row as usize * self.cols as usize + col as usize] = cell;
        }
    }

    pub fn put_glyph(&mut self, row: u16, col: u16, glyph: Glyph) {
        self.put(
            row,
            col,
            Cell {
                symbol: glyph.symbol(),
                style: glyph_style(glyph),
            },
        );
    }

    pub fn put_text(&mut self, row: u16, col: u16, text: &str) {
        let style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        for (i, symbol) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            self.put(row, col.saturating_add(offset), Cell { symbol, style });
        }
    }

    /// Character at a position, for inspection.
    pub fn symbol_at(&self, row: u16, col: u16) -> Option<char> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[row as usize * self.cols as usize + col as usize].symbol)
    }

    /// Build one styled line per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|cell| Span::styled(cell.symbol.to_string(), cell.style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            default_hook(info);
        }));
    });
}

/// Restores the terminal when dropped, however the owner goes away.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RawModeGuard;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            log::error!("failed to restore terminal: {}", e);
        }
    }
}

/// The real screen. Owns the terminal for as long as it lives.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    grid: CellGrid,
    // Dropped last, after the terminal has flushed.
    _guard: RawModeGuard,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        let guard = RawModeGuard::acquire()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        log::debug!("terminal acquired");
        Ok(Self {
            terminal,
            grid: CellGrid::new(SCREEN_ROWS, SCREEN_COLS),
            _guard: guard,
        })
    }
}

impl Display for TerminalDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn draw_glyph(&mut self, row: u16, col: u16, glyph: Glyph) -> io::Result<()> {
        self.grid.put_glyph(row, col, glyph);
        Ok(())
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        self.grid.put_text(row, col, text);
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        let lines = self.grid.lines();
        self.terminal.draw(|frame| {
            let area = frame.size();
            let framed = Rect::new(
                area.x,
                area.y,
                (SCREEN_COLS + 2).min(area.width),
                (SCREEN_ROWS + 2).min(area.height),
            );

            let block = Block::default()
                .title(TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            let inner = block.inner(framed);
            frame.render_widget(block, framed);
            frame.render_widget(Paragraph::new(lines), inner);
        })?;
        Ok(())
    }
}
