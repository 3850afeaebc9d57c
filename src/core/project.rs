use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::projects;
use crate::db::time_intervals;
use crate::errors::{AppError, AppResult};
use crate::models::hours_minutes::HoursMinutes;
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::models::starting_point::TimeIntervalStartingPoint;
use crate::models::time_interval::TimeInterval;

/// Project with its time since the configured starting point.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub project: Project,
    pub time_summary: HoursMinutes,
    pub active: Option<TimeInterval>,
}

pub struct ProjectLogic;

impl ProjectLogic {
    pub fn create(pool: &mut DbPool, name: &str) -> AppResult<Project> {
        let name = Project::validate_name(name)?;

        if projects::find_project_by_name(&pool.conn, &name)?.is_some() {
            return Err(AppError::ProjectAlreadyExists(name));
        }

        let project = projects::insert_project(&pool.conn, &name)?;
        ttlog(&pool.conn, "project_add", &project.name, "Project created")?;
        tracing::info!(id = project.id, name = %project.name, "project created");
        Ok(project)
    }

    pub fn find(pool: &DbPool, name: &str) -> AppResult<Option<Project>> {
        projects::find_project_by_name(&pool.conn, name)
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Project>> {
        projects::find_project_by_id(&pool.conn, id)
    }

    /// Like `find`, but a missing project is an error.
    pub fn require(pool: &DbPool, name: &str) -> AppResult<Project> {
        Self::find(pool, name)?.ok_or_else(|| AppError::ProjectNotFound(name.to_string()))
    }

    pub fn count(pool: &DbPool) -> AppResult<i64> {
        projects::count_projects(&pool.conn)
    }

    pub fn find_page(pool: &DbPool, position: i64, size: i64) -> AppResult<Vec<Project>> {
        projects::find_projects(&pool.conn, position, size)
    }

    /// Remove a project together with every time interval it owns.
    pub fn remove(pool: &mut DbPool, project: &Project) -> AppResult<()> {
        let tx = pool.conn.transaction()?;
        // Cascades to time_intervals.
        let removed = projects::delete_project(&tx, project.id)?;
        if removed == 0 {
            return Err(AppError::ProjectNotFound(project.name.clone()));
        }
        ttlog(&tx, "project_remove", &project.name, "Project removed")?;
        tx.commit()?;

        tracing::info!(id = project.id, name = %project.name, "project removed");
        Ok(())
    }

    /// Time registered on a project since `starting_point`, the active
    /// interval counted up to `now`.
    /// A failing lookup is logged and reported as an empty summary.
    pub fn summarize(
        pool: &DbPool,
        project: Project,
        starting_point: TimeIntervalStartingPoint,
        now: Milliseconds,
    ) -> ProjectSummary {
        let since = starting_point.start_from(now.to_local());
        match time_intervals::find_all(&pool.conn, &project, since) {
            Ok(intervals) => {
                let time_summary =
                    HoursMinutes::accumulated(intervals.iter().map(|t| t.hours_minutes(now)));
                let active = intervals.into_iter().find(TimeInterval::is_active);
                ProjectSummary {
                    project,
                    time_summary,
                    active,
                }
            }
            Err(e) => {
                tracing::warn!(project = %project.name, error = %e, "unable to load time summary");
                ProjectSummary {
                    project,
                    time_summary: HoursMinutes::EMPTY,
                    active: None,
                }
            }
        }
    }
}
