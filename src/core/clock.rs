use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::time_intervals;
use crate::errors::{AppError, AppResult};
use crate::models::hours_minutes::{HoursMinutes, HoursMinutesFormat};
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::models::starting_point::TimeIntervalStartingPoint;
use crate::models::time_interval::{NewTimeInterval, TimeInterval};
use crate::utils::formatting::format_hours_minutes;

/// Result of `ClockLogic::toggle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    ClockedIn(TimeInterval),
    ClockedOut(TimeInterval),
    Cancelled,
}

pub struct ClockLogic;

impl ClockLogic {
    pub fn active(pool: &DbPool, project: &Project) -> AppResult<Option<TimeInterval>> {
        time_intervals::find_active(&pool.conn, project)
    }

    pub fn clock_in(pool: &mut DbPool, project: &Project, at: Milliseconds) -> AppResult<TimeInterval> {
        Self::clock_in_at(pool, project, at, Milliseconds::now())
    }

    /// Start a new interval at `at`, with `now` as the upper bound.
    pub fn clock_in_at(
        pool: &mut DbPool,
        project: &Project,
        at: Milliseconds,
        now: Milliseconds,
    ) -> AppResult<TimeInterval> {
        if at > now {
            return Err(AppError::DateIsInFuture(at.to_string()));
        }

        if time_intervals::find_active(&pool.conn, project)?.is_some() {
            return Err(AppError::ActiveProject(project.name.clone()));
        }

        let interval = time_intervals::insert(
            &pool.conn,
            NewTimeInterval {
                project_id: project.id,
                start: at,
            },
        )?;

        ttlog(
            &pool.conn,
            "clock_in",
            &project.name,
            &format!("Clocked in at {}", at),
        )?;
        tracing::info!(project = %project.name, id = interval.id(), "clocked in");

        Ok(interval)
    }

    pub fn clock_out(
        pool: &mut DbPool,
        project: &Project,
        at: Milliseconds,
        max_interval_hours: i64,
    ) -> AppResult<TimeInterval> {
        Self::clock_out_at(pool, project, at, max_interval_hours, Milliseconds::now())
    }

    /// Stop the active interval at `at`.
    ///
    /// `max_interval_hours <= 0` disables the length check.
    pub fn clock_out_at(
        pool: &mut DbPool,
        project: &Project,
        at: Milliseconds,
        max_interval_hours: i64,
        now: Milliseconds,
    ) -> AppResult<TimeInterval> {
        let active = time_intervals::find_active(&pool.conn, project)?
            .ok_or_else(|| AppError::InactiveProject(project.name.clone()))?;

        if at > now {
            return Err(AppError::DateIsInFuture(at.to_string()));
        }

        let interval = active.clock_out(at)?;

        let elapsed = interval.calculate_time();
        if max_interval_hours > 0 && elapsed > Milliseconds::hours(max_interval_hours) {
            return Err(AppError::ElapsedTimePastAllowed {
                elapsed: format_hours_minutes(
                    HoursMinutes::from_milliseconds(elapsed),
                    HoursMinutesFormat::Digital,
                ),
                allowed_hours: max_interval_hours,
            });
        }

        time_intervals::update(&pool.conn, &interval)?;

        ttlog(
            &pool.conn,
            "clock_out",
            &project.name,
            &format!("Clocked out at {}", at),
        )?;
        tracing::info!(project = %project.name, id = interval.id(), "clocked out");

        Ok(interval)
    }

    /// Clock in when inactive, otherwise clock out. With `confirm_clock_out`
    /// set, `confirm` decides whether the clock out happens.
    pub fn toggle<F>(
        pool: &mut DbPool,
        cfg: &Config,
        project: &Project,
        at: Milliseconds,
        confirm: F,
    ) -> AppResult<ToggleOutcome>
    where
        F: FnOnce(&TimeInterval) -> bool,
    {
        match time_intervals::find_active(&pool.conn, project)? {
            None => Self::clock_in(pool, project, at).map(ToggleOutcome::ClockedIn),
            Some(active) => {
                if cfg.confirm_clock_out && !confirm(&active) {
                    return Ok(ToggleOutcome::Cancelled);
                }
                Self::clock_out(pool, project, at, cfg.max_interval_hours)
                    .map(ToggleOutcome::ClockedOut)
            }
        }
    }

    /// Intervals started at or after the starting point, plus the active one.
    pub fn time_since(
        pool: &DbPool,
        project: &Project,
        starting_point: TimeIntervalStartingPoint,
    ) -> AppResult<Vec<TimeInterval>> {
        time_intervals::find_all(&pool.conn, project, starting_point.start())
    }

    /// Time registered today, the active interval counted up to `now`.
    pub fn time_today(pool: &DbPool, project: &Project, now: Milliseconds) -> AppResult<HoursMinutes> {
        let since = TimeIntervalStartingPoint::Day.start_from(now.to_local());
        let intervals = time_intervals::find_all(&pool.conn, project, since)?;
        Ok(HoursMinutes::accumulated(
            intervals.iter().map(|t| t.hours_minutes(now)),
        ))
    }
}
