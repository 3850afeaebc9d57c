use rworker::core::clock::ClockLogic;
use rworker::core::register::RegisterLogic;
use rworker::core::time_report::{LoadRange, TimeReportLogic};
use rworker::db::pool::DbPool;
use rworker::models::{HoursMinutesFormat, Milliseconds, Project, TimeInterval};

mod common;
use common::{at, memory_pool, project};

fn worked(pool: &mut DbPool, p: &Project, start: Milliseconds, minutes: i64) -> TimeInterval {
    ClockLogic::clock_in(pool, p, start).unwrap();
    ClockLogic::clock_out(pool, p, start + Milliseconds::minutes(minutes), 24).unwrap()
}

fn week_starts(pool: &DbPool, p: &Project, hide: bool, range: LoadRange) -> Vec<String> {
    TimeReportLogic::find_weeks(pool, p, hide, range)
        .unwrap()
        .iter()
        .map(|w| w.start.to_string())
        .collect()
}

#[test]
fn weeks_are_counted_across_new_year() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    worked(&mut pool, &android, at(2019, 12, 29, 9, 0), 60);
    worked(&mut pool, &android, at(2019, 12, 30, 9, 0), 60);
    worked(&mut pool, &android, at(2020, 1, 1, 9, 0), 60);
    worked(&mut pool, &android, at(2020, 1, 6, 9, 0), 60);

    assert_eq!(TimeReportLogic::count_weeks(&pool, &android, false).unwrap(), 3);
    assert_eq!(
        week_starts(&pool, &android, false, LoadRange { position: 0, size: 10 }),
        vec!["2020-01-06", "2019-12-30", "2019-12-23"]
    );
}

#[test]
fn weeks_are_paged_newest_first() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    for day in [6, 13, 20, 27] {
        worked(&mut pool, &android, at(2024, 5, day, 9, 0), 60);
    }

    let range = |position, size| LoadRange { position, size };
    assert_eq!(
        week_starts(&pool, &android, false, range(0, 2)),
        vec!["2024-05-27", "2024-05-20"]
    );
    assert_eq!(
        week_starts(&pool, &android, false, range(2, 2)),
        vec!["2024-05-13", "2024-05-06"]
    );
    assert_eq!(
        week_starts(&pool, &android, false, range(3, 5)),
        vec!["2024-05-06"]
    );
    assert!(week_starts(&pool, &android, false, range(4, 2)).is_empty());
}

#[test]
fn registered_weeks_can_be_hidden() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    let old = worked(&mut pool, &android, at(2024, 5, 6, 9, 0), 60);
    worked(&mut pool, &android, at(2024, 5, 13, 9, 0), 60);
    RegisterLogic::mark_registered_time(&mut pool, vec![old]).unwrap();

    assert_eq!(TimeReportLogic::count_weeks(&pool, &android, false).unwrap(), 2);
    assert_eq!(TimeReportLogic::count_weeks(&pool, &android, true).unwrap(), 1);
    assert_eq!(
        week_starts(&pool, &android, true, LoadRange { position: 0, size: 10 }),
        vec!["2024-05-13"]
    );
}

#[test]
fn days_summarise_with_difference() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");

    worked(&mut pool, &android, at(2024, 5, 13, 8, 0), 3 * 60 + 40);
    worked(&mut pool, &android, at(2024, 5, 13, 12, 30), 3 * 60 + 50);
    worked(&mut pool, &android, at(2024, 5, 13, 17, 0), 37);
    worked(&mut pool, &android, at(2024, 5, 14, 8, 0), 7 * 60 + 52);
    worked(&mut pool, &android, at(2024, 5, 15, 8, 0), 8 * 60);

    let weeks =
        TimeReportLogic::find_weeks(&pool, &android, false, LoadRange { position: 0, size: 1 })
            .unwrap();
    assert_eq!(weeks.len(), 1);

    let now = Milliseconds::now();
    let summaries: Vec<String> = weeks[0]
        .days
        .iter()
        .map(|d| d.time_summary_with_difference_at(now, HoursMinutesFormat::Digital))
        .collect();
    assert_eq!(summaries, vec!["8:00", "7:52 (-0:08)", "8:07 (+0:07)"]);

    let monday = &weeks[0].days[2];
    let starts: Vec<Milliseconds> = monday.time_intervals.iter().map(|t| t.start()).collect();
    assert_eq!(
        starts,
        vec![
            at(2024, 5, 13, 17, 0),
            at(2024, 5, 13, 12, 30),
            at(2024, 5, 13, 8, 0)
        ]
    );
}

#[test]
fn projects_do_not_share_weeks() {
    let mut pool = memory_pool();
    let android = project(&mut pool, "android");
    let other = project(&mut pool, "other");

    worked(&mut pool, &other, at(2024, 5, 13, 9, 0), 60);

    assert_eq!(TimeReportLogic::count_weeks(&pool, &android, false).unwrap(), 0);
    assert!(
        TimeReportLogic::find_weeks(&pool, &android, false, LoadRange { position: 0, size: 5 })
            .unwrap()
            .is_empty()
    );
}
