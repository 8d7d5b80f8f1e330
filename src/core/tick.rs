//! The ordered per-tick simulation step.
//!
//! [`game_tick`] runs collision, wall and bird updates for one 100ms tick and
//! returns a [`TickResult`] so the loop can react without inspecting state.

use super::game_logic::{advance_bird, advance_walls, check_collision, CollisionOutcome};
use super::game_state::{GameState, SessionMode};
use rand::Rng;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The bird passed a wall column this tick.
    pub scored: bool,
    /// Gap centre of a wall spawned this tick.
    pub spawned_gap: Option<i32>,
    /// The bird crashed or left the field.
    pub died: bool,
}

/// Advance the simulation by one tick. Does nothing unless the session is
/// playing. The tick counter is left to the caller.
pub fn game_tick<R: Rng>(state: &mut GameState, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if state.mode != SessionMode::Playing {
        return result;
    }

    match check_collision(state) {
        CollisionOutcome::Crashed => {
            state.mode = SessionMode::Dead;
            result.died = true;
            return result;
        }
        CollisionOutcome::Scored => result.scored = true,
        CollisionOutcome::Clear => {}
    }

    result.spawned_gap = advance_walls(state, rng);
    if let Some(gap) = result.spawned_gap {
        log::debug!("tick {}: wall spawned, gap centre {}", state.tick_count, gap);
    }

    advance_bird(&mut state.bird, state.tick_count);
    if state.bird.dead {
        state.mode = SessionMode::Dead;
        result.died = true;
    }

    result
}
