use chrono::{Datelike, NaiveDate};

use crate::dates::days_in_month;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One row of the day picker, Sunday first. `None` pads days outside the month.
pub type CalendarWeek = [Option<NaiveDate>; 7];

/// Lays out the month containing `month` as Sunday-first weeks.
pub fn month_weeks(month: NaiveDate) -> Vec<CalendarWeek> {
    let mut weeks = Vec::new();
    let mut week: CalendarWeek = [None; 7];

    for day in days_in_month(month) {
        let column = day.weekday().num_days_from_sunday() as usize;
        week[column] = Some(day);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }

    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    weeks
}
