pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Spawn anchor (top-left of the piece matrix)
pub const SPAWN_X: i32 = 4;
pub const SPAWN_Y: i32 = 0;

// Gravity settings (in milliseconds)
pub const INITIAL_DROP_INTERVAL: u64 = 1000;
pub const MIN_DROP_INTERVAL: u64 = 100;
pub const DROP_INTERVAL_STEP: u64 = 100; // Faster by this much per level

pub const LINE_CLEAR_DELAY: u64 = 500; // Row flash before removal
pub const LINES_PER_LEVEL: u32 = 10;
pub const POINTS_PER_LINE: u32 = 100;
