//! # Calendar Dates
//!
//! Availability is tracked per calendar day, so everything here works on
//! [`NaiveDate`]. A date never passes through a timezone: what the participant
//! picked is exactly what gets stored and shown.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ScheduleError, ScheduleResult};

/// Storage and wire format for a date (`YYYY-MM-DD`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_FORMAT: &str = "%Y-%m";

/// Parses a `YYYY-MM-DD` string.
pub fn parse_iso_date(value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| ScheduleError::Validation(format!("Invalid date: {}", value)))
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM` month into the first day of that month.
pub fn parse_month(value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), ISO_DATE_FORMAT)
        .map_err(|_| ScheduleError::Validation(format!("Invalid month: {}", value)))
}

pub fn format_month(month: NaiveDate) -> String {
    month.format(MONTH_FORMAT).to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// Every day of the month containing `date`, in order.
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// How dates are written out on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `6/1/2024`
    #[default]
    EnUs,
    /// `01/06/2024`
    EnGb,
    /// `01/06/2024`
    FrFr,
    /// `01.06.2024`
    DeDe,
    /// `2024-06-01`
    Iso,
}

impl DateLocale {
    fn pattern(self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb | DateLocale::FrFr => "%d/%m/%Y",
            DateLocale::DeDe => "%d.%m.%Y",
            DateLocale::Iso => ISO_DATE_FORMAT,
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl FromStr for DateLocale {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "fr-fr" | "fr" => Ok(DateLocale::FrFr),
            "de-de" | "de" => Ok(DateLocale::DeDe),
            "iso" => Ok(DateLocale::Iso),
            other => Err(ScheduleError::Validation(format!(
                "Unsupported date locale: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::FrFr => "fr-FR",
            DateLocale::DeDe => "de-DE",
            DateLocale::Iso => "iso",
        };
        f.write_str(tag)
    }
}
