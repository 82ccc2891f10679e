use chrono::{Datelike, NaiveDate, SecondsFormat, Utc};

use crate::convention::Convention;
use crate::prayer;
use crate::types::{TableMetadata, Timetable, TimetableConfig, TimetableDay};

/// Real calendar days covered by `config`: one month, or the whole year.
pub fn days_in_scope(config: &TimetableConfig) -> Vec<NaiveDate> {
    let first = match config.month {
        Some(m) => NaiveDate::from_ymd_opt(config.year, m, 1),
        None => NaiveDate::from_ymd_opt(config.year, 1, 1),
    };
    let Some(first) = first else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| {
            d.year() == config.year && config.month.map_or(true, |m| d.month() == m)
        })
        .collect()
}

pub fn generate_timetable(config: &TimetableConfig, convention: &Convention) -> Timetable {
    let location = config.location();
    let days: Vec<TimetableDay> = days_in_scope(config)
        .into_iter()
        .map(|date| TimetableDay {
            date,
            schedule: prayer::daily_schedule(
                date.year(),
                date.month(),
                date.day(),
                &location,
                convention,
            ),
        })
        .collect();

    let missing_events: usize = days.iter().map(|d| d.schedule.missing()).sum();
    log::info!(
        "timetable {}{}: {} days, {} events unresolved",
        config.year,
        config.month.map(|m| format!("-{m:02}")).unwrap_or_default(),
        days.len(),
        missing_events
    );

    Timetable {
        config: *config,
        metadata: TableMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            total_days: days.len(),
            missing_events,
        },
        days,
    }
}

pub fn lookup_day(table: &Timetable, date: NaiveDate) -> Option<&TimetableDay> {
    let first = table.days.first()?.date;
    let idx = usize::try_from((date - first).num_days()).ok()?;
    table.days.get(idx).filter(|d| d.date == date)
}
