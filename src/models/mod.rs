pub mod hours_minutes;
pub mod milliseconds;
pub mod project;
pub mod starting_point;
pub mod time_interval;
pub mod time_report;

pub use hours_minutes::{HoursMinutes, HoursMinutesFormat};
pub use milliseconds::Milliseconds;
pub use project::Project;
pub use starting_point::TimeIntervalStartingPoint;
pub use time_interval::{NewTimeInterval, TimeInterval};
pub use time_report::{TimeReportDay, TimeReportWeek};
