use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::db::time_intervals;
use crate::errors::AppResult;
use crate::models::hours_minutes::HoursMinutes;
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;

/// What the ongoing notification shows for a clocked in project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OngoingStatus {
    pub project: Project,
    pub since: Milliseconds,
    pub today: HoursMinutes,
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn ongoing(pool: &DbPool, now: Milliseconds) -> AppResult<Vec<OngoingStatus>> {
        let mut out = Vec::new();
        for (project, active) in time_intervals::find_all_active(&pool.conn)? {
            let today = ClockLogic::time_today(pool, &project, now)?;
            out.push(OngoingStatus {
                since: active.start(),
                project,
                today,
            });
        }
        Ok(out)
    }
}
