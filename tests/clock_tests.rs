use rworker::config::Config;
use rworker::core::clock::{ClockLogic, ToggleOutcome};
use rworker::errors::AppError;
use rworker::models::{HoursMinutes, TimeInterval, TimeIntervalStartingPoint};

mod common;
use common::{at, memory_pool, project};

#[test]
fn clock_in_twice_fails() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    let interval = ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();
    assert!(interval.is_active());

    let err = ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 10, 0)).unwrap_err();
    assert!(matches!(err, AppError::ActiveProject(_)));
}

#[test]
fn clock_in_in_the_future_fails() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    let now = at(2024, 5, 13, 12, 0);
    let err = ClockLogic::clock_in_at(&mut pool, &android, at(2024, 5, 13, 13, 0), now).unwrap_err();
    assert!(matches!(err, AppError::DateIsInFuture(_)));
    assert!(ClockLogic::active(&pool, &android).unwrap().is_none());
}

#[test]
fn clock_out_without_clock_in_fails() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    let err = ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 13, 17, 0), 24).unwrap_err();
    assert!(matches!(err, AppError::InactiveProject(_)));
}

#[test]
fn clock_out_before_clock_in_fails() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();

    let err = ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 13, 8, 0), 24).unwrap_err();
    assert!(matches!(err, AppError::ClockOutBeforeClockIn { .. }));
    assert!(ClockLogic::active(&pool, &android).unwrap().is_some());
}

#[test]
fn clock_out_stores_inactive_interval() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();

    let interval = ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 13, 17, 7), 24).unwrap();

    assert!(matches!(interval, TimeInterval::Inactive { .. }));
    assert_eq!(
        HoursMinutes::from_milliseconds(interval.calculate_time()),
        HoursMinutes::new(8, 7)
    );
    assert!(ClockLogic::active(&pool, &android).unwrap().is_none());
}

#[test]
fn overly_long_interval_is_rejected() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();

    let err = ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 14, 10, 0), 24).unwrap_err();
    assert!(matches!(
        err,
        AppError::ElapsedTimePastAllowed {
            allowed_hours: 24,
            ..
        }
    ));

    // A non-positive limit disables the check.
    ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 14, 10, 0), 0).unwrap();
}

#[test]
fn time_today_includes_active_interval() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 8, 0)).unwrap();
    ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 13, 11, 30), 24).unwrap();
    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 12, 0)).unwrap();

    let now = at(2024, 5, 13, 13, 15);
    let today = ClockLogic::time_today(&pool, &android, now).unwrap();
    assert_eq!(today, HoursMinutes::new(4, 45));
}

#[test]
fn time_today_skips_previous_days() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 12, 8, 0)).unwrap();
    ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 12, 16, 0), 24).unwrap();

    let now = at(2024, 5, 13, 9, 0);
    assert!(ClockLogic::time_today(&pool, &android, now).unwrap().is_empty());
}

#[test]
fn toggle_clocks_in_then_asks_before_clocking_out() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    let cfg = Config::default();

    let outcome = ClockLogic::toggle(&mut pool, &cfg, &android, at(2024, 5, 13, 9, 0), |_| {
        panic!("no confirmation expected when clocking in")
    })
    .unwrap();
    assert!(matches!(outcome, ToggleOutcome::ClockedIn(_)));

    let outcome =
        ClockLogic::toggle(&mut pool, &cfg, &android, at(2024, 5, 13, 17, 0), |_| false).unwrap();
    assert_eq!(outcome, ToggleOutcome::Cancelled);
    assert!(ClockLogic::active(&pool, &android).unwrap().is_some());

    let outcome =
        ClockLogic::toggle(&mut pool, &cfg, &android, at(2024, 5, 13, 17, 0), |_| true).unwrap();
    assert!(matches!(outcome, ToggleOutcome::ClockedOut(_)));
}

#[test]
fn toggle_without_confirmation_setting_clocks_out_directly() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    let cfg = Config {
        confirm_clock_out: false,
        ..Config::default()
    };

    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();
    let outcome = ClockLogic::toggle(&mut pool, &cfg, &android, at(2024, 5, 13, 17, 0), |_| {
        panic!("confirmation disabled")
    })
    .unwrap();

    assert!(matches!(outcome, ToggleOutcome::ClockedOut(_)));
}

#[test]
fn time_since_keeps_old_active_interval() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    ClockLogic::clock_in(&mut pool, &android, at(2020, 1, 6, 8, 0)).unwrap();
    ClockLogic::clock_out(&mut pool, &android, at(2020, 1, 6, 16, 0), 24).unwrap();
    ClockLogic::clock_in(&mut pool, &android, at(2020, 1, 7, 8, 0)).unwrap();

    let intervals = ClockLogic::time_since(&pool, &android, TimeIntervalStartingPoint::Month).unwrap();
    assert_eq!(intervals.len(), 1);
    assert!(intervals[0].is_active());
}

#[test]
fn stored_active_interval_is_loaded_as_active() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    ClockLogic::clock_in(&mut pool, &android, at(2024, 5, 13, 9, 0)).unwrap();

    let active = rworker::db::time_intervals::find_active(&pool.conn, &android).unwrap();
    assert!(matches!(active, Some(TimeInterval::Active { .. })));

    ClockLogic::clock_out(&mut pool, &android, at(2024, 5, 13, 10, 0), 24).unwrap();
    assert!(rworker::db::time_intervals::find_active(&pool.conn, &android).unwrap().is_none());
}
