//! Level, score and gravity progression.

use crate::constants::{
    DROP_INTERVAL_STEP, INITIAL_DROP_INTERVAL, LINES_PER_LEVEL, MIN_DROP_INTERVAL, POINTS_PER_LINE,
};

pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Points for clearing `rows` rows at once, scaled by the level reached
/// after the clear. Saturates at `u32::MAX`.
pub fn line_clear_points(rows: u32, level: u32) -> u32 {
    rows.saturating_mul(POINTS_PER_LINE).saturating_mul(level)
}

/// Gravity interval in milliseconds, floored at `MIN_DROP_INTERVAL`.
pub fn drop_interval_for_level(level: u32) -> u64 {
    let speedup = u64::from(level.saturating_sub(1)) * DROP_INTERVAL_STEP;
    INITIAL_DROP_INTERVAL.saturating_sub(speedup).max(MIN_DROP_INTERVAL)
}
