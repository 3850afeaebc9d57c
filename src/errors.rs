//! Error type shared by every layer of rworker.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // io
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // database-related
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // parsing errors
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid time interval id: {0}")]
    InvalidId(String),

    // project errors
    #[error("Invalid project name: {0:?}")]
    InvalidProjectName(String),

    #[error("Project already exists: {0}")]
    ProjectAlreadyExists(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    // time interval errors
    #[error("Project '{0}' is already clocked in")]
    ActiveProject(String),

    #[error("Project '{0}' is not clocked in")]
    InactiveProject(String),

    #[error("Clock out ({stop}) is before clock in ({start})")]
    ClockOutBeforeClockIn { start: String, stop: String },

    #[error("Elapsed time {elapsed} exceeds the allowed {allowed_hours} hours")]
    ElapsedTimePastAllowed { elapsed: String, allowed_hours: i64 },

    #[error("Date {0} is in the future")]
    DateIsInFuture(String),

    #[error("Time interval not found: {0}")]
    TimeIntervalNotFound(i64),

    #[error("Unable to mark active time interval as registered")]
    UnableToMarkActiveTimeIntervalAsRegistered,

    #[error("Invalid starting point: {0}")]
    InvalidStartingPoint(String),

    // config errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // export / backup errors
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // generic fallback
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
