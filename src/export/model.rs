// src/export/model.rs

use crate::models::hours_minutes::{HoursMinutes, HoursMinutesFormat};
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::models::time_interval::TimeInterval;
use crate::utils::formatting::format_hours_minutes;
use serde::Serialize;

/// Flat row for CSV / JSON export of a time interval.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeIntervalExport {
    pub id: i64,
    pub project: String,
    pub date: String,
    pub start: String,
    pub stop: String,
    pub duration: String,
    pub start_in_milliseconds: i64,
    pub stop_in_milliseconds: Option<i64>,
    pub registered: bool,
}

impl TimeIntervalExport {
    pub fn from_interval(project: &Project, interval: &TimeInterval, now: Milliseconds) -> Self {
        let start = interval.start().to_local();
        let stop = interval.stop().map(Milliseconds::to_local);

        Self {
            id: interval.id(),
            project: project.name.clone(),
            date: start.format("%Y-%m-%d").to_string(),
            start: start.format("%H:%M").to_string(),
            stop: stop
                .map(|s| s.format("%H:%M").to_string())
                .unwrap_or_default(),
            duration: format_hours_minutes(
                HoursMinutes::from_milliseconds(interval.calculate_interval(now)),
                HoursMinutesFormat::Digital,
            ),
            start_in_milliseconds: interval.start().value(),
            stop_in_milliseconds: interval.stop().map(Milliseconds::value),
            registered: interval.is_registered(),
        }
    }
}
