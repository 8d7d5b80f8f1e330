//! Draws a session and the game-over prompt through a [`Display`].

use super::display::{Display, Glyph};
use crate::core::constants::{
    GAME_OVER_ROW, GAME_OVER_TEXT, HEIGHT, RESTART_ROW, RESTART_TEXT, SCORE_COL, SCORE_ROW, WIDTH,
};
use crate::core::game_state::GameState;
use std::io;

/// Screen position of a field coordinate, or `None` when it lies outside
/// the field (cells that just scrolled off the left edge).
pub fn field_position(x: i32, y: i32) -> Option<(u16, u16)> {
    if (0..HEIGHT).contains(&y) && (0..=WIDTH).contains(&x) {
        Some((y as u16, x as u16))
    } else {
        None
    }
}

/// Column at which `text` starts when centred on the middle of the field.
pub fn centred_col(text: &str) -> u16 {
    let half = text.chars().count() as i32 / 2;
    (WIDTH / 2 - half).max(0) as u16
}

/// Redraw the whole frame: walls, bird, score.
pub fn render_session<D: Display>(display: &mut D, state: &GameState) -> io::Result<()> {
    display.clear()?;

    for cell in &state.walls {
        if let Some((row, col)) = field_position(cell.x, cell.y) {
            display.draw_glyph(row, col, Glyph::Wall)?;
        }
    }

    if let Some((row, col)) = field_position(state.bird.x, state.bird.y) {
        display.draw_glyph(row, col, Glyph::Bird)?;
    }

    display.draw_text(SCORE_ROW as u16, SCORE_COL as u16, &state.score.to_string())?;
    display.refresh()
}

/// Draw the game-over prompt on top of whatever is on screen.
pub fn render_game_over<D: Display>(display: &mut D) -> io::Result<()> {
    display.draw_text(GAME_OVER_ROW as u16, centred_col(GAME_OVER_TEXT), GAME_OVER_TEXT)?;
    display.draw_text(RESTART_ROW as u16, centred_col(RESTART_TEXT), RESTART_TEXT)?;
    display.refresh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_position_transposes_to_row_col() {
        assert_eq!(field_position(25, 3), Some((3, 25)));
    }

    #[test]
    fn test_field_position_rejects_outside() {
        assert_eq!(field_position(-1, 3), None);
        assert_eq!(field_position(3, -1), None);
        assert_eq!(field_position(3, HEIGHT), None);
        assert_eq!(field_position(WIDTH + 1, 3), None);
    }

    #[test]
    fn test_centred_col() {
        assert_eq!(centred_col(GAME_OVER_TEXT), 21);
        assert_eq!(centred_col(RESTART_TEXT), 14);
        assert_eq!(centred_col(&"x".repeat(200)), 0);
    }
}
