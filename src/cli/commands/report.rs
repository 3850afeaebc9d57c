use crate::cli::commands::{open, summary_format};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::core::time_report::{LoadRange, TimeReportLogic};
use crate::errors::AppResult;
use crate::models::hours_minutes::{HoursMinutes, HoursMinutesFormat};
use crate::models::milliseconds::Milliseconds;
use crate::models::time_interval::TimeInterval;
use crate::models::time_report::{TimeReportDay, TimeReportWeek};
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_difference, color_for_interval};
use crate::utils::formatting::{bold, format_hours_minutes, pad_left};
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        project,
        page,
        page_size,
        hide_registered,
        show_registered,
        format,
    } = cmd
    {
        let pool = open(cfg)?;
        let project = ProjectLogic::require(&pool, project)?;

        let hide = if *show_registered {
            false
        } else {
            *hide_registered || cfg.hide_registered_time
        };
        let format = summary_format(cfg, *format);
        let size = (*page_size).max(1);

        let total_weeks = TimeReportLogic::count_weeks(&pool, &project, hide)?;
        if total_weeks == 0 {
            info(format!("No time registered on '{}'.", project.name));
            return Ok(());
        }

        let weeks = TimeReportLogic::find_weeks(
            &pool,
            &project,
            hide,
            LoadRange::page(page.saturating_sub(1), size),
        )?;

        header(format!("Time report: {}", project.name));

        let now = Milliseconds::now();
        for week in &weeks {
            print_week(week, now, format);
        }

        let pages = LoadRange::page_count(total_weeks, size);
        println!(
            "{GREY}page {}/{} ({} weeks{}){RESET}",
            (*page).max(1),
            pages,
            total_weeks,
            if hide { ", registered time hidden" } else { "" }
        );
    }

    Ok(())
}

fn print_week(week: &TimeReportWeek, now: Milliseconds, format: HoursMinutesFormat) {
    let total = week.time_summary_at(now);
    println!();
    println!(
        "{}  total {}",
        bold(&format!("Week {} ({})", week.start.format("%V, %G"), week.start)),
        format_hours_minutes(total, format)
    );

    for day in &week.days {
        print_day(day, now, format);
    }
}

fn print_day(day: &TimeReportDay, now: Milliseconds, format: HoursMinutesFormat) {
    let difference: HoursMinutes = day.time_difference_at(now);
    let color = color_for_difference(difference.total_minutes());
    let marker = if day.is_registered() { " [registered]" } else { "" };

    println!(
        "  {}  {}{}{RESET}{GREY}{}{RESET}",
        day.date.format("%a %Y-%m-%d"),
        color,
        day.time_summary_with_difference_at(now, format),
        marker
    );

    for interval in &day.time_intervals {
        print_interval(interval, now, format);
    }
}

fn print_interval(interval: &TimeInterval, now: Milliseconds, format: HoursMinutesFormat) {
    let color = color_for_interval(interval.is_registered(), interval.is_active());
    let stop = interval
        .stop()
        .map(|s| format_clock(&s.to_local()))
        .unwrap_or_else(|| "--:--".to_string());

    println!(
        "    {}{} {} - {}  {}{RESET}",
        color,
        pad_left(&format!("#{}", interval.id()), 6),
        format_clock(&interval.start().to_local()),
        stop,
        format_hours_minutes(interval.hours_minutes(now), format)
    );
}
