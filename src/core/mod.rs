//! Game simulation and the loop that drives it.

pub mod constants;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use game_logic::*;
pub use game_loop::GameLoop;
pub use game_state::*;
pub use tick::*;
