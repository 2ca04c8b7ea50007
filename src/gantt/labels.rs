// src/gantt/labels.rs
// French header labels for the timeline

use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

fn month_short(date: NaiveDate) -> &'static str {
    MONTHS_SHORT[date.month0() as usize]
}

/// `"1 mai"`
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_short(date))
}

/// `"S3"`: week of the month, counted with weeks starting on Sunday
pub fn week_label(date: NaiveDate) -> String {
    let offset = date
        .with_day(1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);
    format!("S{}", (date.day() + offset).div_ceil(7))
}

/// `"mai 2025"`
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", month_short(date), date.year())
}
