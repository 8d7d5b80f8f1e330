//! Session state: the bird, the wall cells, the clock and the score.

use super::constants::{BIRD_START_X, BIRD_START_Y, HEIGHT};

/// The player-controlled bird. `x` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub dead: bool,
    /// Tick at which the current jump began. `None` while falling.
    pub jump_start_tick: Option<u64>,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            dead: false,
            jump_start_tick: None,
        }
    }

    /// Whether the bird's row lies inside the field.
    pub fn in_bounds(&self) -> bool {
        (0..HEIGHT).contains(&self.y)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A single obstacle cell. Walls are not tracked as units; collision and
/// culling work on the flat set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallCell {
    pub x: i32,
    pub y: i32,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Playing,
    /// The bird crashed; waiting for restart or quit.
    Dead,
    Terminated,
}

/// Everything that changes while the game runs. Owned by the game loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub bird: Bird,
    pub walls: Vec<WallCell>,
    pub tick_count: u64,
    pub score: u64,
    pub mode: SessionMode,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            walls: Vec::new(),
            tick_count: 0,
            score: 0,
            mode: SessionMode::Playing,
        }
    }

    /// Restore every field to its starting value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_running(&self) -> bool {
        self.mode != SessionMode::Terminated
    }

    /// Wall cells sharing the bird's column.
    pub fn cells_in_bird_column(&self) -> impl Iterator<Item = &WallCell> + '_ {
        let x = self.bird.x;
        self.walls.iter().filter(move |c| c.x == x)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
