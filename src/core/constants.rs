// Field dimensions (columns x rows)
pub const WIDTH: i32 = 50;
pub const HEIGHT: i32 = 20;

// Walls
pub const GAP_SIZE: i32 = 5;
pub const WALL_FREQUENCY: u64 = 15; // ticks between wall spawns

// Bird
pub const BIRD_START_X: i32 = WIDTH / 2;
pub const BIRD_START_Y: i32 = HEIGHT / 2;
pub const BIRD_JUMP_HEIGHT: u64 = 2; // ticks of ascent per jump

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;

// HUD and overlay placement
pub const SCORE_ROW: i32 = HEIGHT + 1;
pub const SCORE_COL: i32 = WIDTH / 2;
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_TEXT: &str = "press enter to restart";
pub const GAME_OVER_ROW: i32 = HEIGHT / 2;
pub const RESTART_ROW: i32 = HEIGHT / 2 + 2;
