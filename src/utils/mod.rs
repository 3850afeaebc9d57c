pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::{format_hours_minutes, format_signed_hours_minutes};
