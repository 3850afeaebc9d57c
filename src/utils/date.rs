use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a wall-clock time in the local zone.
///
/// Ambiguous times (DST fall back) resolve to the earliest instant; times
/// inside a DST gap are read as UTC.
pub fn local_datetime(naive: NaiveDateTime) -> DateTime<Local> {
    naive
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    local_datetime(date.and_time(chrono::NaiveTime::MIN))
}

/// Monday of the ISO week holding `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_last_day(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(chrono::Months::new(1))?;
    next.pred_opt().map(|d| d.day())
}
