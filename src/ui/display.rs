//! The drawing capability the game loop renders through.

use std::io;

/// Things the scene draws that are not plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Bird,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Wall => '█',
            Glyph::Bird => '@',
        }
    }
}

/// A character-cell screen. `row` is vertical, `col` horizontal.
///
/// Drawing calls only touch a back buffer; nothing is shown until
/// [`Display::refresh`].
pub trait Display {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_glyph(&mut self, row: u16, col: u16, glyph: Glyph) -> io::Result<()>;
    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;
    fn refresh(&mut self) -> io::Result<()>;
}
