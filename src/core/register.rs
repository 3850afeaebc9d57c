use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::time_intervals;
use crate::errors::{AppError, AppResult};
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::models::time_interval::TimeInterval;
use crate::utils::date::start_of_day;
use chrono::{Days, NaiveDate};

/// Which intervals of a project a command acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ids(Vec<i64>),
    Date(NaiveDate),
}

pub struct RegisterLogic;

impl RegisterLogic {
    /// Resolve a selection to intervals of `project`.
    pub fn select(
        pool: &DbPool,
        project: &Project,
        selection: &Selection,
    ) -> AppResult<Vec<TimeInterval>> {
        match selection {
            Selection::Ids(ids) => {
                let intervals = time_intervals::find_by_ids(&pool.conn, ids)?;
                if let Some(foreign) = intervals.iter().find(|t| t.project_id() != project.id) {
                    return Err(AppError::TimeIntervalNotFound(foreign.id()));
                }
                Ok(intervals)
            }
            Selection::Date(date) => {
                let next = date
                    .checked_add_days(Days::new(1))
                    .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
                time_intervals::find_between(
                    &pool.conn,
                    project,
                    Milliseconds::from_local(&start_of_day(*date)),
                    Milliseconds::from_local(&start_of_day(next)),
                )
            }
        }
    }

    /// Register every interval, or unregister them all when every one of
    /// them already is registered. Active intervals abort the whole batch.
    pub fn mark_registered_time(
        pool: &mut DbPool,
        intervals: Vec<TimeInterval>,
    ) -> AppResult<Vec<TimeInterval>> {
        if intervals.iter().any(TimeInterval::is_active) {
            return Err(AppError::UnableToMarkActiveTimeIntervalAsRegistered);
        }

        let unregister = intervals.iter().all(TimeInterval::is_registered);

        let updated = intervals
            .into_iter()
            .map(|t| {
                if unregister {
                    Ok(t.unmark_registered())
                } else {
                    t.mark_registered()
                }
            })
            .collect::<AppResult<Vec<_>>>()?;

        let tx = pool.conn.transaction()?;
        for interval in &updated {
            time_intervals::update(&tx, interval)?;
        }
        ttlog(
            &tx,
            if unregister { "unregister" } else { "register" },
            &ids_label(&updated),
            &format!("{} time interval(s)", updated.len()),
        )?;
        tx.commit()?;

        tracing::info!(count = updated.len(), unregister, "registration toggled");
        Ok(updated)
    }

    pub fn remove_time(pool: &mut DbPool, intervals: &[TimeInterval]) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;
        for interval in intervals {
            time_intervals::delete(&tx, interval.id())?;
        }
        ttlog(
            &tx,
            "remove_time",
            &ids_label(intervals),
            &format!("Removed {} time interval(s)", intervals.len()),
        )?;
        tx.commit()?;

        Ok(intervals.len())
    }
}

fn ids_label(intervals: &[TimeInterval]) -> String {
    intervals
        .iter()
        .map(|t| t.id().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse `1,2,3` into ids.
pub fn parse_ids(raw: &str) -> AppResult<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().map_err(|_| AppError::InvalidId(s.to_string())))
        .collect()
}
