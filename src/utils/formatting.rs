//! Formatting utilities used for CLI and export outputs.

use crate::models::hours_minutes::{HoursMinutes, HoursMinutesFormat};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

fn format_unsigned(total_minutes: i64, format: HoursMinutesFormat) -> String {
    let abs_m = total_minutes.abs();
    match format {
        // es: 9:07
        HoursMinutesFormat::Digital => format!("{}:{:02}", abs_m / 60, abs_m % 60),
        // es: 9.12
        HoursMinutesFormat::Fraction => format!("{:.2}", abs_m as f64 / 60.0),
    }
}

/// Format a duration, with a leading `-` only when negative.
pub fn format_hours_minutes(value: HoursMinutes, format: HoursMinutesFormat) -> String {
    let body = format_unsigned(value.total_minutes(), format);
    if value.is_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Format a duration with an explicit `+` or `-` sign.
pub fn format_signed_hours_minutes(value: HoursMinutes, format: HoursMinutesFormat) -> String {
    let sign = if value.is_negative() { "-" } else { "+" };
    format!("{}{}", sign, format_unsigned(value.total_minutes(), format))
}
