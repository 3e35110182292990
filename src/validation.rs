//! Date/time format validation for the arrival range inputs.
//!
//! Accepts `yyyy-mm-dd` or `yyyy-mm-dd HH:ii`; the date-only form is treated
//! as midnight. Range checks are deliberately not calendar-aware (day 31 is
//! accepted for every month, February included) — the backend owns real date
//! semantics, this only catches typos before submission.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DATE_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref DATE_TIME_PATTERN: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").unwrap();
}

/// Why a date/time input was rejected. The display messages are shown to the
/// user next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Invalid month (must be 01-12)")]
    InvalidMonth,

    #[error("Invalid day (must be 01-31)")]
    InvalidDay,

    #[error("Invalid hour (must be 00-23)")]
    InvalidHour,

    #[error("Invalid minute (must be 00-59)")]
    InvalidMinute,

    #[error("Invalid format. Use yyyy-mm-dd or yyyy-mm-dd HH:ii")]
    InvalidFormat,
}

/// Validate a date/time input string.
///
/// Blank input is a distinct [`ValidationError::Required`] error. On a
/// structural match the ranges are checked in fixed order (month, day, hour,
/// minute) and the first violation wins.
pub fn validate_date_time(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    // The structural patterns are anchored against the input as typed:
    // stray surrounding whitespace is a format error, not silently trimmed.
    if !DATE_PATTERN.is_match(text) && !DATE_TIME_PATTERN.is_match(text) {
        return Err(ValidationError::InvalidFormat);
    }

    // Date-only input is midnight.
    let (date, time) = match text.split_once(' ') {
        Some((date, time)) => (date, time),
        None => (text, "00:00"),
    };

    // The patterns guarantee the field widths, so these slices and parses
    // cannot fail.
    let month: u32 = date[5..7].parse().unwrap_or(0);
    let day: u32 = date[8..10].parse().unwrap_or(0);
    let hour: u32 = time[0..2].parse().unwrap_or(0);
    let minute: u32 = time[3..5].parse().unwrap_or(0);

    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth);
    }
    if !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidDay);
    }
    if hour > 23 {
        return Err(ValidationError::InvalidHour);
    }
    if minute > 59 {
        return Err(ValidationError::InvalidMinute);
    }

    Ok(())
}
