use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse timestamp from date {date:?} and time {time:?}")]
pub struct DateParseError {
    pub date: String,
    pub time: String,
}

/// Combine the separate date and time strings sent by the API.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, DateParseError> {
    let err = || DateParseError {
        date: date.to_string(),
        time: time.to_string(),
    };

    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| err())?;
    let clock = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time.trim(), format).ok())
        .ok_or_else(err)?;

    Ok(day.and_time(clock))
}

/// Clock part of a label: hour unpadded, minute always two digits.
fn clock_label(dt: &NaiveDateTime) -> String {
    format!("{}:{:02}", dt.hour(), dt.minute())
}

/// Label used in entry headers, e.g. "14:30 5 Mar 2016".
pub fn format_entry_label(dt: &NaiveDateTime) -> String {
    format!(
        "{} {} {} {}",
        clock_label(dt),
        dt.day(),
        dt.format("%b"),
        dt.year()
    )
}

/// Label used under each comment, e.g. "Mar 5 2016 - 14:30".
pub fn format_comment_label(dt: &NaiveDateTime) -> String {
    format!(
        "{} {} {} - {}",
        dt.format("%b"),
        dt.day(),
        dt.year(),
        clock_label(dt)
    )
}

pub fn entry_label(date: &str, time: &str) -> Result<String, DateParseError> {
    parse_timestamp(date, time).map(|dt| format_entry_label(&dt))
}

pub fn comment_label(date: &str, time: &str) -> Result<String, DateParseError> {
    parse_timestamp(date, time).map(|dt| format_comment_label(&dt))
}
