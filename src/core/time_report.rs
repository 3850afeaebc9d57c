use crate::db::pool::DbPool;
use crate::db::time_intervals;
use crate::db::time_report;
use crate::errors::AppResult;
use crate::models::project::Project;
use crate::models::time_interval::TimeInterval;
use crate::models::time_report::{TimeReportDay, TimeReportWeek};
use crate::utils::date::start_of_week;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Window into the week list: skip `position` weeks, take `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRange {
    pub position: i64,
    pub size: i64,
}

impl LoadRange {
    /// Zero-based `page` of `size` weeks. Saturates instead of overflowing.
    pub fn page(page: i64, size: i64) -> Self {
        Self {
            position: page.max(0).saturating_mul(size.max(0)),
            size,
        }
    }

    /// Number of pages needed for `total` items.
    pub fn page_count(total: i64, size: i64) -> i64 {
        let size = size.max(1);
        total.max(0) / size + i64::from(total % size > 0)
    }
}

pub struct TimeReportLogic;

impl TimeReportLogic {
    pub fn count_weeks(pool: &DbPool, project: &Project, hide_registered: bool) -> AppResult<i64> {
        time_report::count_weeks(&pool.conn, project, hide_registered)
    }

    pub fn find_weeks(
        pool: &DbPool,
        project: &Project,
        hide_registered: bool,
        range: LoadRange,
    ) -> AppResult<Vec<TimeReportWeek>> {
        let groups = time_report::find_weeks(
            &pool.conn,
            project,
            hide_registered,
            range.position,
            range.size,
        )?;

        let mut intervals = Vec::new();
        for group in groups {
            intervals.extend(time_intervals::find_by_ids(&pool.conn, &group.ids)?);
        }

        Ok(group_by_week(intervals))
    }
}

fn local_date(interval: &TimeInterval) -> NaiveDate {
    interval.start().to_local().date_naive()
}

/// Group by local start date; days and their intervals newest first.
pub fn group_by_day(intervals: Vec<TimeInterval>) -> Vec<TimeReportDay> {
    let mut days: BTreeMap<NaiveDate, Vec<TimeInterval>> = BTreeMap::new();
    for interval in intervals {
        days.entry(local_date(&interval)).or_default().push(interval);
    }

    days.into_iter()
        .rev()
        .map(|(date, mut items)| {
            items.sort_by(|a, b| b.start().cmp(&a.start()).then(b.id().cmp(&a.id())));
            TimeReportDay::new(date, items)
        })
        .collect()
}

/// Group by Monday-based week, newest week first.
pub fn group_by_week(intervals: Vec<TimeInterval>) -> Vec<TimeReportWeek> {
    let mut weeks: BTreeMap<NaiveDate, Vec<TimeInterval>> = BTreeMap::new();
    for interval in intervals {
        weeks
            .entry(start_of_week(local_date(&interval)))
            .or_default()
            .push(interval);
    }

    weeks
        .into_iter()
        .rev()
        .map(|(start, items)| TimeReportWeek::new(start, group_by_day(items)))
        .collect()
}
