//! Keyboard input: the [`Input`] capability and its crossterm implementation.

use crate::core::game_logic::Key;
use crate::interrupt::InterruptFlag;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Source of keys for the game loop.
pub trait Input {
    /// Return a pending key without waiting, if there is one.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
    /// Block until a key arrives.
    fn wait_key(&mut self) -> io::Result<Key>;
}

/// Map a terminal key press to a game key.
///
/// Raw mode turns Ctrl+C into an ordinary key event, so it is treated as quit.
pub fn map_key_event(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char(' ') | KeyCode::Up => Key::Jump,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        KeyCode::Enter => Key::Confirm,
        _ => Key::Unknown,
    }
}

fn key_from_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(map_key_event(key)),
        _ => None,
    }
}

/// How long a blocking wait sleeps before checking for an interrupt.
const WAIT_SLICE: Duration = Duration::from_millis(50);

/// Block until `next_event` yields a key or `interrupt` is raised, which
/// reads as [`Key::Quit`]. `next_event` waits at most the given slice.
fn wait_for_key<F>(interrupt: &InterruptFlag, mut next_event: F) -> io::Result<Key>
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    loop {
        if interrupt.is_raised() {
            return Ok(Key::Quit);
        }
        if let Some(key) = next_event(WAIT_SLICE)?.and_then(key_from_event) {
            return Ok(key);
        }
    }
}

/// Reads keys from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput {
    interrupt: InterruptFlag,
}

impl TerminalInput {
    pub fn new(interrupt: InterruptFlag) -> Self {
        Self { interrupt }
    }
}

impl Input for TerminalInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if self.interrupt.is_raised() {
            return Ok(Some(Key::Quit));
        }
        // Skip resize/mouse/release events; take at most one key per call.
        while event::poll(Duration::ZERO)? {
            if let Some(key) = key_from_event(event::read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        wait_for_key(&self.interrupt, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }
}
