use crate::models::hours_minutes::{HoursMinutes, HoursMinutesFormat};
use crate::models::milliseconds::Milliseconds;
use crate::models::time_interval::TimeInterval;
use crate::utils::formatting::{format_hours_minutes, format_signed_hours_minutes};
use chrono::NaiveDate;
use serde::Serialize;

/// Expected working time for one day.
pub const EXPECTED_DAILY_TIME: HoursMinutes = HoursMinutes::new(8, 0);

/// Intervals started on the same local day, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReportDay {
    pub date: NaiveDate,
    pub time_intervals: Vec<TimeInterval>,
}

impl TimeReportDay {
    pub fn new(date: NaiveDate, time_intervals: Vec<TimeInterval>) -> Self {
        Self {
            date,
            time_intervals,
        }
    }

    pub fn time_summary_at(&self, now: Milliseconds) -> HoursMinutes {
        HoursMinutes::accumulated(self.time_intervals.iter().map(|t| t.hours_minutes(now)))
    }

    pub fn time_summary(&self) -> HoursMinutes {
        self.time_summary_at(Milliseconds::now())
    }

    pub fn time_difference_at(&self, now: Milliseconds) -> HoursMinutes {
        self.time_summary_at(now) - EXPECTED_DAILY_TIME
    }

    pub fn time_difference(&self) -> HoursMinutes {
        self.time_difference_at(Milliseconds::now())
    }

    pub fn is_registered(&self) -> bool {
        !self.time_intervals.is_empty() && self.time_intervals.iter().all(|t| t.is_registered())
    }

    pub fn is_active(&self) -> bool {
        self.time_intervals.iter().any(|t| t.is_active())
    }

    /// `9:07 (+1:07)`, `7:52 (-0:08)`, or only the summary when it hits
    /// the expected time exactly.
    pub fn time_summary_with_difference_at(
        &self,
        now: Milliseconds,
        format: HoursMinutesFormat,
    ) -> String {
        let summary = format_hours_minutes(self.time_summary_at(now), format);
        let difference = self.time_difference_at(now);
        if difference.is_empty() {
            return summary;
        }
        format!(
            "{} ({})",
            summary,
            format_signed_hours_minutes(difference, format)
        )
    }

    pub fn time_summary_with_difference(&self, format: HoursMinutesFormat) -> String {
        self.time_summary_with_difference_at(Milliseconds::now(), format)
    }
}

/// Days of one Monday-based week, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReportWeek {
    pub start: NaiveDate,
    pub days: Vec<TimeReportDay>,
}

impl TimeReportWeek {
    pub fn new(start: NaiveDate, days: Vec<TimeReportDay>) -> Self {
        Self { start, days }
    }

    pub fn time_summary_at(&self, now: Milliseconds) -> HoursMinutes {
        HoursMinutes::accumulated(self.days.iter().map(|d| d.time_summary_at(now)))
    }

    pub fn is_registered(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(TimeReportDay::is_registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::milliseconds::MILLISECONDS_IN_HOUR;

    fn day_with(durations_minutes: &[i64]) -> TimeReportDay {
        let base = 10 * MILLISECONDS_IN_HOUR;
        let intervals = durations_minutes
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let start = Milliseconds(base + i as i64 * 4 * MILLISECONDS_IN_HOUR);
                let stop = start + Milliseconds::minutes(*m);
                TimeInterval::from_parts(i as i64 + 1, 1, start, Some(stop), false).unwrap()
            })
            .collect();
        TimeReportDay::new(NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(), intervals)
    }

    #[test]
    fn summary_over_expected_time() {
        let day = day_with(&[3 * 60 + 40, 3 * 60 + 50, 37]);
        assert_eq!(
            day.time_summary_with_difference_at(Milliseconds::EMPTY, HoursMinutesFormat::Digital),
            "8:07 (+0:07)"
        );
    }

    #[test]
    fn summary_with_overtime_in_both_formats() {
        let day = day_with(&[9 * 60 + 7]);
        let now = Milliseconds::EMPTY;
        assert_eq!(
            day.time_summary_with_difference_at(now, HoursMinutesFormat::Digital),
            "9:07 (+1:07)"
        );
        assert_eq!(
            day.time_summary_with_difference_at(now, HoursMinutesFormat::Fraction),
            "9.12 (+1.12)"
        );
    }

    #[test]
    fn summary_under_expected_time() {
        let day = day_with(&[7 * 60 + 52]);
        let now = Milliseconds::EMPTY;
        assert_eq!(
            day.time_summary_with_difference_at(now, HoursMinutesFormat::Digital),
            "7:52 (-0:08)"
        );
        assert_eq!(
            day.time_summary_with_difference_at(now, HoursMinutesFormat::Fraction),
            "7.87 (-0.13)"
        );
    }

    #[test]
    fn exact_day_has_no_difference() {
        let day = day_with(&[4 * 60, 4 * 60]);
        assert_eq!(
            day.time_summary_with_difference_at(Milliseconds::EMPTY, HoursMinutesFormat::Digital),
            "8:00"
        );
    }

    #[test]
    fn registered_only_when_every_interval_is() {
        let mut day = day_with(&[60, 60]);
        assert!(!day.is_registered());
        day.time_intervals = day
            .time_intervals
            .into_iter()
            .map(|t| t.mark_registered().unwrap())
            .collect();
        assert!(day.is_registered());
    }
}
