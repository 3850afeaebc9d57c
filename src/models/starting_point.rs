use crate::errors::{AppError, AppResult};
use crate::models::milliseconds::Milliseconds;
use crate::utils::date::{start_of_day, start_of_month, start_of_week};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Beginning of the period used for per-project time summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeIntervalStartingPoint {
    Day,
    Week,
    #[default]
    Month,
}

impl TimeIntervalStartingPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeIntervalStartingPoint::Day => "day",
            TimeIntervalStartingPoint::Week => "week",
            TimeIntervalStartingPoint::Month => "month",
        }
    }

    pub fn start_from(&self, now: DateTime<Local>) -> Milliseconds {
        let today = now.date_naive();
        let date = match self {
            TimeIntervalStartingPoint::Day => today,
            TimeIntervalStartingPoint::Week => start_of_week(today),
            TimeIntervalStartingPoint::Month => start_of_month(today),
        };
        Milliseconds::from_local(&start_of_day(date))
    }

    pub fn start(&self) -> Milliseconds {
        self.start_from(Local::now())
    }
}

impl FromStr for TimeIntervalStartingPoint {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeIntervalStartingPoint::Day),
            "week" => Ok(TimeIntervalStartingPoint::Week),
            "month" => Ok(TimeIntervalStartingPoint::Month),
            other => Err(AppError::InvalidStartingPoint(other.to_string())),
        }
    }
}

impl fmt::Display for TimeIntervalStartingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
