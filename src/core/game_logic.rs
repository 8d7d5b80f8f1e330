//! Per-tick transition functions for the simulation.
//!
//! Each function does one step of the tick. [`crate::core::tick::game_tick`]
//! calls them in the required order.

use super::constants::{BIRD_JUMP_HEIGHT, GAP_SIZE, HEIGHT, WALL_FREQUENCY, WIDTH};
use super::game_state::{Bird, GameState, SessionMode, WallCell};
use rand::Rng;

/// Abstract game input, decoupled from any terminal key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Start (or restart) a jump arc.
    Jump,
    /// End the session.
    Quit,
    /// Enter/Return. Restarts after a crash.
    Confirm,
    /// Any other key.
    Unknown,
}

/// What the collision check found in the bird's column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No wall cells in the bird's column.
    Clear,
    /// The column had wall cells and the bird sat in the gap.
    Scored,
    /// The bird shares a cell with a wall.
    Crashed,
}

/// Lowest and highest gap centres that keep the whole gap inside the field.
pub const MIN_GAP_CENTER: i32 = GAP_SIZE / 2;
pub const MAX_GAP_CENTER: i32 = HEIGHT - 1 - GAP_SIZE / 2;

/// Apply one key to the session. Absent or unrecognized keys do nothing.
pub fn apply_input(state: &mut GameState, key: Option<Key>) {
    match key {
        Some(Key::Jump) => state.bird.jump_start_tick = Some(state.tick_count),
        Some(Key::Quit) => state.mode = SessionMode::Terminated,
        Some(Key::Confirm) | Some(Key::Unknown) | None => {}
    }
}

/// Whether row `row` is covered by a wall whose gap is centred on `gap_center`.
///
/// `GAP_SIZE / 2` is a real half here, so the test is done doubled in integers.
pub fn is_wall_row(gap_center: i32, row: i32) -> bool {
    2 * (gap_center - row).abs() > GAP_SIZE
}

/// Append a fresh wall at the right edge with its gap centred on `gap_center`.
pub fn spawn_wall(state: &mut GameState, gap_center: i32) {
    state.walls.extend(
        (0..HEIGHT)
            .filter(|&row| is_wall_row(gap_center, row))
            .map(|row| WallCell { x: WIDTH, y: row }),
    );
}

/// Spawn, cull and scroll the walls for this tick.
///
/// Returns the gap centre if a new wall was spawned.
pub fn advance_walls<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<i32> {
    let mut spawned = None;
    if state.walls.is_empty() || state.tick_count % WALL_FREQUENCY == 0 {
        let gap_center = rng.gen_range(MIN_GAP_CENTER..=MAX_GAP_CENTER);
        spawn_wall(state, gap_center);
        spawned = Some(gap_center);
    }

    // Cells pushed past the left edge by the previous scroll go now.
    state.walls.retain(|cell| cell.x >= 0);

    for cell in &mut state.walls {
        cell.x -= 1;
    }

    spawned
}

/// Look for walls in the bird's column: crash on a shared cell, score when
/// the column is non-empty and the bird is in its gap.
pub fn check_collision(state: &mut GameState) -> CollisionOutcome {
    let bird_y = state.bird.y;
    let (occupied, hit) = {
        let mut column = state.cells_in_bird_column().peekable();
        let occupied = column.peek().is_some();
        let hit = column.any(|cell| cell.y == bird_y);
        (occupied, hit)
    };

    if !occupied {
        return CollisionOutcome::Clear;
    }

    if hit {
        state.bird.dead = true;
        return CollisionOutcome::Crashed;
    }

    state.score += 1;
    CollisionOutcome::Scored
}

/// Move the bird one step: fall, rise during a jump, or hold still on the
/// tick a jump ends. Leaving the field kills the bird.
pub fn advance_bird(bird: &mut Bird, current_tick: u64) {
    match bird.jump_start_tick {
        None => bird.y += 1,
        Some(start) if current_tick.saturating_sub(start) >= BIRD_JUMP_HEIGHT => {
            bird.jump_start_tick = None;
        }
        Some(_) => bird.y -= 1,
    }

    if !bird.in_bounds() {
        bird.dead = true;
    }
}
