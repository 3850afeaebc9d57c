use crate::models::milliseconds::{MILLISECONDS_IN_MINUTE, Milliseconds};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Sub};

const MINUTES_IN_HOUR: i64 = 60;

/// Duration split into hours and minutes.
///
/// Negative values carry the sign on both fields, e.g. `-0:08` is
/// `{ hours: 0, minutes: -8 }` and `-1:07` is `{ hours: -1, minutes: -7 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    pub const EMPTY: HoursMinutes = HoursMinutes {
        hours: 0,
        minutes: 0,
    };

    pub const fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    fn from_total_minutes(total: i64) -> Self {
        Self {
            hours: total / MINUTES_IN_HOUR,
            minutes: total % MINUTES_IN_HOUR,
        }
    }

    /// Round to the nearest minute, half a minute rounds away from zero.
    pub fn from_milliseconds(value: Milliseconds) -> Self {
        let ms = value.value();
        let half = MILLISECONDS_IN_MINUTE / 2;
        let total = if ms >= 0 {
            (ms + half) / MILLISECONDS_IN_MINUTE
        } else {
            (ms - half) / MILLISECONDS_IN_MINUTE
        };
        Self::from_total_minutes(total)
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * MINUTES_IN_HOUR + self.minutes
    }

    pub fn to_milliseconds(&self) -> Milliseconds {
        Milliseconds::minutes(self.total_minutes())
    }

    pub fn is_empty(&self) -> bool {
        self.total_minutes() == 0
    }

    pub fn is_negative(&self) -> bool {
        self.total_minutes() < 0
    }

    pub fn accumulated<I>(values: I) -> HoursMinutes
    where
        I: IntoIterator<Item = HoursMinutes>,
    {
        values.into_iter().sum()
    }
}

impl Add for HoursMinutes {
    type Output = HoursMinutes;

    fn add(self, rhs: Self) -> Self::Output {
        HoursMinutes::from_total_minutes(self.total_minutes() + rhs.total_minutes())
    }
}

impl Sub for HoursMinutes {
    type Output = HoursMinutes;

    fn sub(self, rhs: Self) -> Self::Output {
        let diff = self.to_milliseconds() - rhs.to_milliseconds();
        HoursMinutes::from_milliseconds(diff)
    }
}

impl Sum for HoursMinutes {
    fn sum<I: Iterator<Item = HoursMinutes>>(iter: I) -> Self {
        iter.fold(HoursMinutes::EMPTY, |acc, v| acc + v)
    }
}

/// How durations are rendered in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HoursMinutesFormat {
    #[default]
    Digital,
    Fraction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_minute() {
        let ms = Milliseconds::minutes(67) + Milliseconds(29_999);
        assert_eq!(HoursMinutes::from_milliseconds(ms), HoursMinutes::new(1, 7));

        let ms = Milliseconds::minutes(67) + Milliseconds(30_000);
        assert_eq!(HoursMinutes::from_milliseconds(ms), HoursMinutes::new(1, 8));
    }

    #[test]
    fn plus_normalises_minutes() {
        let sum = HoursMinutes::new(1, 45) + HoursMinutes::new(2, 30);
        assert_eq!(sum, HoursMinutes::new(4, 15));
    }

    #[test]
    fn minus_keeps_sign_on_both_fields() {
        let eight = HoursMinutes::new(8, 0);
        assert_eq!(HoursMinutes::new(7, 52) - eight, HoursMinutes::new(0, -8));
        assert_eq!(HoursMinutes::new(6, 53) - eight, HoursMinutes::new(-1, -7));
        assert_eq!(HoursMinutes::new(9, 7) - eight, HoursMinutes::new(1, 7));
        assert_eq!(eight - eight, HoursMinutes::EMPTY);
    }

    #[test]
    fn accumulated_sums_all_values() {
        let total = HoursMinutes::accumulated(vec![
            HoursMinutes::new(3, 40),
            HoursMinutes::new(2, 50),
            HoursMinutes::new(0, 37),
        ]);
        assert_eq!(total, HoursMinutes::new(7, 7));
    }

    #[test]
    fn accumulated_of_nothing_is_empty() {
        assert!(HoursMinutes::accumulated(Vec::new()).is_empty());
    }
}
