// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Source of "today" for calendars.
//!
//! Calendars never read the system time directly. They ask their clock for
//! the current Gregorian date and convert it through the Julian day number,
//! so every chronology agrees on what today is.

use crate::error::CalendarError;
use chrono::Datelike;
use time::{Date, Month};

/// Supplies the current Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The local date of the host.
    #[default]
    System,
    /// A pinned date, for tests and reproducible output.
    Fixed(Date),
}

impl Clock {
    /// Returns today's Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns an error if the system clock reports a date that `time`
    /// cannot represent.
    pub fn today(&self) -> Result<Date, CalendarError> {
        match self {
            Self::Fixed(date) => Ok(*date),
            Self::System => {
                let now = chrono::Local::now().date_naive();

                // Convert chrono::NaiveDate to time::Date
                let month: Month = u8::try_from(now.month())
                    .ok()
                    .and_then(|m| Month::try_from(m).ok())
                    .ok_or_else(|| CalendarError::Clock(now.to_string()))?;
                let day: u8 =
                    u8::try_from(now.day()).map_err(|_| CalendarError::Clock(now.to_string()))?;

                Date::from_calendar_date(now.year(), month, day)
                    .map_err(|err| CalendarError::Clock(err.to_string()))
            }
        }
    }

    /// Returns today's Julian day number.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Clock::today`].
    pub fn today_julian_day(&self) -> Result<i32, CalendarError> {
        self.today().map(Date::to_julian_day)
    }
}
