//! Time interval model: an interval is either still running, stopped, or
//! stopped and registered.

use crate::errors::{AppError, AppResult};
use crate::models::hours_minutes::HoursMinutes;
use crate::models::milliseconds::Milliseconds;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TimeInterval {
    Active {
        id: i64,
        project_id: i64,
        start: Milliseconds,
    },
    Inactive {
        id: i64,
        project_id: i64,
        start: Milliseconds,
        stop: Milliseconds,
    },
    Registered {
        id: i64,
        project_id: i64,
        start: Milliseconds,
        stop: Milliseconds,
    },
}

/// Values needed to store a freshly clocked in interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTimeInterval {
    pub project_id: i64,
    pub start: Milliseconds,
}

fn ensure_ordered(start: Milliseconds, stop: Milliseconds) -> AppResult<()> {
    if stop < start {
        return Err(AppError::ClockOutBeforeClockIn {
            start: start.to_string(),
            stop: stop.to_string(),
        });
    }
    Ok(())
}

impl TimeInterval {
    /// Build an interval from stored columns.
    ///
    /// A missing stop always means active, the registered flag is ignored.
    pub fn from_parts(
        id: i64,
        project_id: i64,
        start: Milliseconds,
        stop: Option<Milliseconds>,
        registered: bool,
    ) -> AppResult<Self> {
        let Some(stop) = stop else {
            return Ok(TimeInterval::Active {
                id,
                project_id,
                start,
            });
        };

        ensure_ordered(start, stop)?;
        if registered {
            Ok(TimeInterval::Registered {
                id,
                project_id,
                start,
                stop,
            })
        } else {
            Ok(TimeInterval::Inactive {
                id,
                project_id,
                start,
                stop,
            })
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            TimeInterval::Active { id, .. }
            | TimeInterval::Inactive { id, .. }
            | TimeInterval::Registered { id, .. } => *id,
        }
    }

    pub fn project_id(&self) -> i64 {
        match self {
            TimeInterval::Active { project_id, .. }
            | TimeInterval::Inactive { project_id, .. }
            | TimeInterval::Registered { project_id, .. } => *project_id,
        }
    }

    pub fn start(&self) -> Milliseconds {
        match self {
            TimeInterval::Active { start, .. }
            | TimeInterval::Inactive { start, .. }
            | TimeInterval::Registered { start, .. } => *start,
        }
    }

    pub fn stop(&self) -> Option<Milliseconds> {
        match self {
            TimeInterval::Active { .. } => None,
            TimeInterval::Inactive { stop, .. } | TimeInterval::Registered { stop, .. } => {
                Some(*stop)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TimeInterval::Active { .. })
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, TimeInterval::Registered { .. })
    }

    /// Stop an active interval.
    pub fn clock_out(self, stop: Milliseconds) -> AppResult<TimeInterval> {
        match self {
            TimeInterval::Active {
                id,
                project_id,
                start,
            } => {
                ensure_ordered(start, stop)?;
                Ok(TimeInterval::Inactive {
                    id,
                    project_id,
                    start,
                    stop,
                })
            }
            other => Err(AppError::InactiveProject(other.project_id().to_string())),
        }
    }

    pub fn mark_registered(self) -> AppResult<TimeInterval> {
        match self {
            TimeInterval::Active { .. } => {
                Err(AppError::UnableToMarkActiveTimeIntervalAsRegistered)
            }
            TimeInterval::Inactive {
                id,
                project_id,
                start,
                stop,
            } => Ok(TimeInterval::Registered {
                id,
                project_id,
                start,
                stop,
            }),
            registered @ TimeInterval::Registered { .. } => Ok(registered),
        }
    }

    pub fn unmark_registered(self) -> TimeInterval {
        match self {
            TimeInterval::Registered {
                id,
                project_id,
                start,
                stop,
            } => TimeInterval::Inactive {
                id,
                project_id,
                start,
                stop,
            },
            other => other,
        }
    }

    /// Elapsed time of a stopped interval, zero while active.
    pub fn calculate_time(&self) -> Milliseconds {
        match self.stop() {
            Some(stop) => stop - self.start(),
            None => Milliseconds::EMPTY,
        }
    }

    /// Elapsed time, counting an active interval up to `now`.
    pub fn calculate_interval(&self, now: Milliseconds) -> Milliseconds {
        self.stop().unwrap_or(now) - self.start()
    }

    pub fn hours_minutes(&self, now: Milliseconds) -> HoursMinutes {
        HoursMinutes::from_milliseconds(self.calculate_interval(now))
    }
}
