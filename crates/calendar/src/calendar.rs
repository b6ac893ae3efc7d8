// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The calendar capability set.
//!
//! A chronology only has to describe its month structure and how its dates
//! map onto Julian day numbers. Everything else (validation, arithmetic,
//! weekday and week numbering, formatting) is derived here, so that all
//! chronologies share the same semantics.
//!
//! ## Invariants
//!
//! - `from_julian_day(to_julian_day(d)) == d` for every valid date
//! - Month and year arithmetic clamps the day to the target month's length
//! - Weekdays are numbered 0 (Sunday) through 6 (Saturday)

use crate::clock::Clock;
use crate::date::{CalendarDate, DateUnit};
use crate::error::CalendarError;
use crate::pattern::DatePattern;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar chronology.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// The chronology name (e.g. `gregorian`).
    fn name(&self) -> &'static str;

    /// The clock used to answer [`Calendar::today`].
    fn clock(&self) -> &Clock;

    /// Number of months in `year`.
    fn months_in_year(&self, year: i32) -> u8;

    /// Number of days in `month` of `year`, or 0 if the month does not exist.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Full month name, or an empty string if the month does not exist.
    fn month_name(&self, month: u8) -> &'static str;

    /// Abbreviated month name, or an empty string if the month does not exist.
    fn month_name_short(&self, month: u8) -> &'static str;

    /// Converts a date of this calendar to its Julian day number.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not valid in this calendar.
    fn to_julian_day(&self, date: CalendarDate) -> Result<i32, CalendarError>;

    /// Converts a Julian day number to a date of this calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the day number is out of the supported range.
    fn from_julian_day(&self, julian_day: i32) -> Result<CalendarDate, CalendarError>;

    /// Number of months used when laying out periods over a year.
    ///
    /// Calendars whose last month is a short epagomenal period exclude it.
    fn period_months_in_year(&self, year: i32) -> u8 {
        self.months_in_year(year)
    }

    /// Full weekday name for a 0-based (Sunday first) weekday.
    fn day_name(&self, day_of_week: u8) -> &'static str {
        DAY_NAMES.get(usize::from(day_of_week)).copied().unwrap_or("")
    }

    /// Abbreviated weekday name for a 0-based (Sunday first) weekday.
    fn day_name_short(&self, day_of_week: u8) -> &'static str {
        DAY_NAMES_SHORT
            .get(usize::from(day_of_week))
            .copied()
            .unwrap_or("")
    }

    /// Number of days in `year`.
    fn days_in_year(&self, year: i32) -> u16 {
        (1..=self.months_in_year(year))
            .map(|month| u16::from(self.days_in_month(year, month)))
            .sum()
    }

    /// Returns whether the triple names an existing date.
    fn is_valid(&self, year: i32, month: u8, day: u8) -> bool {
        month >= 1
            && month <= self.months_in_year(year)
            && day >= 1
            && day <= self.days_in_month(year, month)
    }

    /// Creates a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the date does not exist.
    fn new_date(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        if !self.is_valid(year, month, day) {
            return Err(CalendarError::InvalidDate {
                calendar: self.name(),
                year,
                month,
                day,
            });
        }
        Ok(CalendarDate::new(year, month, day))
    }

    /// Returns the date `day` of `month`, clamped to the month's length.
    ///
    /// # Errors
    ///
    /// Returns an error if the month does not exist.
    fn clamped_date(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        let last: u8 = self.days_in_month(year, month);
        self.new_date(year, month, day.min(last))
    }

    /// Returns today's date in this calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock's date cannot be converted.
    fn today(&self) -> Result<CalendarDate, CalendarError> {
        self.from_julian_day(self.clock().today_julian_day()?)
    }

    /// Adds `amount` units to `date`. Negative amounts go backwards.
    ///
    /// Month steps count every year as having as many months as the year
    /// of `date`. Every result maps onto a Julian day.
    ///
    /// # Errors
    ///
    /// Returns an error if the input date is invalid or the result
    /// overflows.
    fn add(
        &self,
        date: CalendarDate,
        amount: i32,
        unit: DateUnit,
    ) -> Result<CalendarDate, CalendarError> {
        match unit {
            DateUnit::Day | DateUnit::Week => {
                let days: i32 = if unit == DateUnit::Week {
                    amount.checked_mul(7)
                } else {
                    Some(amount)
                }
                .ok_or_else(|| CalendarError::DateArithmeticOverflow {
                    operation: format!("adding {amount} weeks to {date}"),
                })?;

                let julian_day: i32 = self
                    .to_julian_day(date)?
                    .checked_add(days)
                    .ok_or_else(|| CalendarError::DateArithmeticOverflow {
                        operation: format!("adding {days} days to {date}"),
                    })?;

                self.from_julian_day(julian_day)
            }
            DateUnit::Month => {
                let overflow = || CalendarError::DateArithmeticOverflow {
                    operation: format!("adding {amount} months to {date}"),
                };
                let months: i64 = i64::from(self.months_in_year(date.year()));
                let index: i64 = i64::from(date.month()) - 1 + i64::from(amount);

                let years: i32 = i32::try_from(index.div_euclid(months)).map_err(|_| overflow())?;
                let year: i32 = date.year().checked_add(years).ok_or_else(overflow)?;
                let month: u8 =
                    u8::try_from(index.rem_euclid(months) + 1).map_err(|_| overflow())?;

                let result: CalendarDate = self.clamped_date(year, month, date.day())?;
                // The chronology may not reach a valid far-off year
                self.to_julian_day(result).map_err(|_| overflow())?;
                Ok(result)
            }
            DateUnit::Year => {
                let overflow = || CalendarError::DateArithmeticOverflow {
                    operation: format!("adding {amount} years to {date}"),
                };
                let year: i32 = date.year().checked_add(amount).ok_or_else(overflow)?;
                let month: u8 = date.month().min(self.months_in_year(year));

                let result: CalendarDate = self.clamped_date(year, month, date.day())?;
                self.to_julian_day(result).map_err(|_| overflow())?;
                Ok(result)
            }
        }
    }

    /// Weekday of `date`, 0 (Sunday) through 6 (Saturday).
    ///
    /// # Errors
    ///
    /// Returns an error if the date is invalid.
    fn day_of_week(&self, date: CalendarDate) -> Result<u8, CalendarError> {
        let julian_day: i32 = self.to_julian_day(date)?;
        u8::try_from((julian_day + 1).rem_euclid(7)).map_err(|_| {
            CalendarError::DateArithmeticOverflow {
                operation: format!("computing the weekday of {date}"),
            }
        })
    }

    /// 1-based day of the year of `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is invalid.
    fn day_of_year(&self, date: CalendarDate) -> Result<u16, CalendarError> {
        let first: CalendarDate = self.new_date(date.year(), 1, 1)?;
        let days: i32 = self.to_julian_day(date)? - self.to_julian_day(first)?;
        u16::try_from(days + 1).map_err(|_| CalendarError::DateArithmeticOverflow {
            operation: format!("computing the day of year of {date}"),
        })
    }

    /// Week number of `date`.
    ///
    /// Weeks start on Monday and week 1 is the week holding the year's
    /// first Thursday, which is the week containing the 4th day.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is invalid.
    fn week_of_year(&self, date: CalendarDate) -> Result<u8, CalendarError> {
        let weekday: i32 = match self.day_of_week(date)? {
            0 => 7,
            other => i32::from(other),
        };
        let thursday: CalendarDate = self.add(date, 4 - weekday, DateUnit::Day)?;
        let day_of_year: u16 = self.day_of_year(thursday)?;
        u8::try_from((day_of_year - 1) / 7 + 1).map_err(|_| {
            CalendarError::DateArithmeticOverflow {
                operation: format!("computing the week of {date}"),
            }
        })
    }

    /// Formats `date` with `pattern`.
    fn format_date(&self, pattern: &DatePattern, date: CalendarDate) -> String {
        pattern.format(self, date)
    }

    /// Parses `text` with `pattern` into a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ParseDate`] if the text does not match, or
    /// [`CalendarError::InvalidDate`] if it names a date that does not exist.
    fn parse_date(&self, pattern: &DatePattern, text: &str) -> Result<CalendarDate, CalendarError> {
        pattern.parse(self, text)
    }
}
