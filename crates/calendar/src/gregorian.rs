// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Proleptic Gregorian chronology, backed by `time::Date`.

use crate::calendar::Calendar;
use crate::clock::Clock;
use crate::date::CalendarDate;
use crate::error::CalendarError;
use time::{Date, Month};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The Gregorian calendar.
///
/// The same chronology is also exposed under the name `iso8601`, which is
/// how DHIS 2 refers to its default calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gregorian {
    name: &'static str,
    clock: Clock,
}

impl Gregorian {
    /// Creates a Gregorian calendar reading today from `clock`.
    #[must_use]
    pub const fn new(clock: Clock) -> Self {
        Self {
            name: "gregorian",
            clock,
        }
    }

    /// Creates the Gregorian chronology under the name `iso8601`.
    #[must_use]
    pub const fn iso8601(clock: Clock) -> Self {
        Self {
            name: "iso8601",
            clock,
        }
    }

    fn to_time_date(&self, date: CalendarDate) -> Result<Date, CalendarError> {
        let invalid = || CalendarError::InvalidDate {
            calendar: self.name,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        };
        let month: Month = Month::try_from(date.month()).map_err(|_| invalid())?;
        Date::from_calendar_date(date.year(), month, date.day()).map_err(|_| invalid())
    }
}

impl Default for Gregorian {
    fn default() -> Self {
        Self::new(Clock::System)
    }
}

impl Calendar for Gregorian {
    fn name(&self) -> &'static str {
        self.name
    }

    fn clock(&self) -> &Clock {
        &self.clock
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if time::util::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    fn month_name(&self, month: u8) -> &'static str {
        month_lookup(&MONTH_NAMES, month)
    }

    fn month_name_short(&self, month: u8) -> &'static str {
        month_lookup(&MONTH_NAMES_SHORT, month)
    }

    fn to_julian_day(&self, date: CalendarDate) -> Result<i32, CalendarError> {
        self.to_time_date(date).map(Date::to_julian_day)
    }

    fn from_julian_day(&self, julian_day: i32) -> Result<CalendarDate, CalendarError> {
        let date: Date =
            Date::from_julian_day(julian_day).map_err(|_| CalendarError::InvalidJulianDay {
                calendar: self.name,
                julian_day,
            })?;
        Ok(CalendarDate::new(
            date.year(),
            u8::from(date.month()),
            date.day(),
        ))
    }
}

pub(crate) fn month_lookup(names: &[&'static str], month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| names.get(index))
        .copied()
        .unwrap_or("")
}
