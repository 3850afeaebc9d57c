use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

pub const MILLISECONDS_IN_SECOND: i64 = 1_000;
pub const MILLISECONDS_IN_MINUTE: i64 = 60 * MILLISECONDS_IN_SECOND;
pub const MILLISECONDS_IN_HOUR: i64 = 60 * MILLISECONDS_IN_MINUTE;

/// Instant or duration expressed as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Milliseconds(pub i64);

impl Milliseconds {
    pub const EMPTY: Milliseconds = Milliseconds(0);

    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    pub fn from_local(dt: &DateTime<Local>) -> Self {
        Self(dt.timestamp_millis())
    }

    pub fn to_local(self) -> DateTime<Local> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .unwrap_or_default()
            .with_timezone(&Local)
    }

    pub const fn minutes(value: i64) -> Self {
        Self(value * MILLISECONDS_IN_MINUTE)
    }

    pub const fn hours(value: i64) -> Self {
        Self(value * MILLISECONDS_IN_HOUR)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Add for Milliseconds {
    type Output = Milliseconds;

    fn add(self, rhs: Self) -> Self::Output {
        Milliseconds(self.0 + rhs.0)
    }
}

impl Sub for Milliseconds {
    type Output = Milliseconds;

    fn sub(self, rhs: Self) -> Self::Output {
        Milliseconds(self.0 - rhs.0)
    }
}

impl fmt::Display for Milliseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_local().format("%Y-%m-%d %H:%M"))
    }
}
