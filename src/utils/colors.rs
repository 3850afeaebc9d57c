/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Difference color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_difference(total_minutes: i64) -> &'static str {
    if total_minutes > 0 {
        GREEN
    } else if total_minutes < 0 {
        RED
    } else {
        RESET
    }
}

/// Registered time is dimmed, active time highlighted.
pub fn color_for_interval(registered: bool, active: bool) -> &'static str {
    if active {
        GREEN
    } else if registered {
        GREY
    } else {
        RESET
    }
}
