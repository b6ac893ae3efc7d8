// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar errors.

use thiserror::Error;

/// Errors raised by calendar arithmetic, formatting and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// No chronology is registered under this name.
    #[error("Unknown calendar chronology: {0}")]
    UnknownCalendar(String),

    /// The year/month/day triple does not exist in the calendar.
    #[error("Invalid {calendar} date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: &'static str,
        year: i32,
        month: u8,
        day: u8,
    },

    /// A Julian day number falls outside the supported range.
    #[error("Julian day {julian_day} cannot be represented in the {calendar} calendar")]
    InvalidJulianDay {
        calendar: &'static str,
        julian_day: i32,
    },

    /// Date arithmetic overflowed.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow { operation: String },

    /// A date string did not match its pattern.
    #[error("Failed to parse date '{text}' with pattern '{pattern}': {reason}")]
    ParseDate {
        text: String,
        pattern: String,
        reason: String,
    },

    /// A date pattern could not be compiled.
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The system clock produced a date outside the supported range.
    #[error("System clock returned an unrepresentable date: {0}")]
    Clock(String),
}
