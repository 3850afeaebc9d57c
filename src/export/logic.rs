// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::time_intervals;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimeIntervalExport;
use crate::export::range::parse_range;
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::ui::messages::warning;
use crate::utils::date::start_of_day;
use crate::utils::path::require_absolute;
use chrono::{Days, NaiveDate};

/// High level export of a project's time intervals.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the time intervals of `project`.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period accepted by `parse_range`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &DbPool,
        project: &Project,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = require_absolute(file)?;

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        let rows = load_rows(pool, project, bounds)?;

        if rows.is_empty() {
            warning("No time intervals found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} time intervals of '{}' as {}",
                rows.len(),
                project.name,
                format.as_str()
            ),
        )?;

        Ok(rows.len())
    }
}

/// Rows ordered by start, limited to the local days in `bounds`.
fn load_rows(
    pool: &DbPool,
    project: &Project,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeIntervalExport>> {
    let intervals = match bounds {
        None => time_intervals::find_between(
            &pool.conn,
            project,
            Milliseconds(i64::MIN),
            Milliseconds(i64::MAX),
        )?,
        Some((start, end)) => {
            let after_end = end.checked_add_days(Days::new(1)).unwrap_or(end);
            time_intervals::find_between(
                &pool.conn,
                project,
                Milliseconds::from_local(&start_of_day(start)),
                Milliseconds::from_local(&start_of_day(after_end)),
            )?
        }
    };

    let now = Milliseconds::now();
    Ok(intervals
        .iter()
        .map(|t| TimeIntervalExport::from_interval(project, t, now))
        .collect())
}
