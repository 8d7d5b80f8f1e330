//! Test doubles for the input and display capabilities.

#![allow(dead_code)]

use clippybird::input::Input;
use clippybird::ui::{Display, Glyph};
use clippybird::{InterruptFlag, Key};
use std::collections::VecDeque;
use std::io;

/// Replays scripted keys. Once the poll script runs out, polling returns no
/// key; once the wait script runs out, waiting returns quit.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    polls: VecDeque<Option<Key>>,
    waits: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(polls: Vec<Option<Key>>, waits: Vec<Key>) -> Self {
        Self {
            polls: polls.into(),
            waits: waits.into(),
        }
    }
}

impl Input for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.polls.pop_front().flatten())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        Ok(self.waits.pop_front().unwrap_or(Key::Quit))
    }
}

/// Raises an interrupt flag the way a signal landing mid-game would: on a
/// chosen poll, or while blocked on the restart prompt. Every wait hands
/// back `wait_reply`, so the loop itself has to notice the flag.
#[derive(Debug)]
pub struct InterruptingInput {
    flag: InterruptFlag,
    raise_on_poll: Option<usize>,
    raise_on_wait: bool,
    wait_reply: Key,
    polls: usize,
}

impl InterruptingInput {
    pub fn on_poll(flag: InterruptFlag, poll: usize) -> Self {
        Self {
            flag,
            raise_on_poll: Some(poll),
            raise_on_wait: false,
            wait_reply: Key::Quit,
            polls: 0,
        }
    }

    pub fn on_wait(flag: InterruptFlag, wait_reply: Key) -> Self {
        Self {
            flag,
            raise_on_poll: None,
            raise_on_wait: true,
            wait_reply,
            polls: 0,
        }
    }
}

impl Input for InterruptingInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        self.polls += 1;
        if self.raise_on_poll == Some(self.polls) {
            self.flag.raise();
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        if self.raise_on_wait {
            self.flag.raise();
        }
        Ok(self.wait_reply)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Glyph(u16, u16, Glyph),
    Text(u16, u16, String),
    Refresh,
}

/// Records every call in order.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DrawOp>,
}

impl RecordingDisplay {
    pub fn count(&self, op: &DrawOp) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|o| match o {
                DrawOp::Text(_, _, t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Display for RecordingDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn draw_glyph(&mut self, row: u16, col: u16, glyph: Glyph) -> io::Result<()> {
        self.ops.push(DrawOp::Glyph(row, col, glyph));
        Ok(())
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        self.ops.push(DrawOp::Text(row, col, text.to_string()));
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Refresh);
        Ok(())
    }
}
