// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ethiopian chronology.
//!
//! Twelve months of 30 days are followed by Pagume, an epagomenal month of
//! 5 days (6 in leap years). A year is leap when `year % 4 == 3`. Day 1 of
//! Meskerem, year 1, is Julian day 1724221.

use crate::calendar::Calendar;
use crate::clock::Clock;
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::gregorian::month_lookup;

const EPOCH_JULIAN_DAY: i32 = 1_724_221;

const MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikemet", "Hidar", "Tahesas", "Tir", "Yekatit", "Megabit", "Miazia", "Genbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

const MONTH_NAMES_SHORT: [&str; 13] = [
    "Mes", "Tik", "Hid", "Tah", "Tir", "Yek", "Meg", "Mia", "Gen", "Sen", "Ham", "Neh", "Pag",
];

/// The Ethiopian calendar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ethiopian {
    clock: Clock,
}

impl Ethiopian {
    /// Creates an Ethiopian calendar reading today from `clock`.
    #[must_use]
    pub const fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Returns whether `year` has a sixth day of Pagume.
    #[must_use]
    pub const fn is_leap_year(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }
}

impl Calendar for Ethiopian {
    fn name(&self) -> &'static str {
        "ethiopian"
    }

    fn clock(&self) -> &Clock {
        &self.clock
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        13
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            1..=12 => 30,
            13 if Self::is_leap_year(year) => 6,
            13 => 5,
            _ => 0,
        }
    }

    fn month_name(&self, month: u8) -> &'static str {
        month_lookup(&MONTH_NAMES, month)
    }

    fn month_name_short(&self, month: u8) -> &'static str {
        month_lookup(&MONTH_NAMES_SHORT, month)
    }

    // Pagume is too short to carry data on its own
    fn period_months_in_year(&self, year: i32) -> u8 {
        self.months_in_year(year) - 1
    }

    fn to_julian_day(&self, date: CalendarDate) -> Result<i32, CalendarError> {
        let year: i32 = date.year();
        if !self.is_valid(year, date.month(), date.day()) {
            return Err(CalendarError::InvalidDate {
                calendar: self.name(),
                year,
                month: date.month(),
                day: date.day(),
            });
        }

        let overflow = || CalendarError::DateArithmeticOverflow {
            operation: format!("converting ethiopian date {date} to a julian day"),
        };
        let year_days: i32 = (year - 1).checked_mul(365).ok_or_else(overflow)?;

        (EPOCH_JULIAN_DAY - 1)
            .checked_add(i32::from(date.day()))
            .and_then(|jd| jd.checked_add((i32::from(date.month()) - 1) * 30))
            .and_then(|jd| jd.checked_add(year_days))
            .and_then(|jd| jd.checked_add(year.div_euclid(4)))
            .ok_or_else(overflow)
    }

    fn from_julian_day(&self, julian_day: i32) -> Result<CalendarDate, CalendarError> {
        let invalid = || CalendarError::InvalidJulianDay {
            calendar: "ethiopian",
            julian_day,
        };

        let elapsed: i32 = julian_day.checked_sub(EPOCH_JULIAN_DAY).ok_or_else(invalid)?;
        let leap_days: i32 = elapsed.checked_add(366).ok_or_else(invalid)?.div_euclid(1461);
        let year: i32 = (elapsed - leap_days).div_euclid(365) + 1;

        let new_year: i32 = self.to_julian_day(CalendarDate::new(year, 1, 1))?;
        let day_of_year: i32 = julian_day - new_year;
        let month: i32 = day_of_year.div_euclid(30) + 1;
        let day: i32 = day_of_year - (month - 1) * 30 + 1;

        let month: u8 = u8::try_from(month).map_err(|_| invalid())?;
        let day: u8 = u8::try_from(day).map_err(|_| invalid())?;
        self.new_date(year, month, day)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::date::DateUnit;
    use crate::gregorian::Gregorian;
    use time::macros::date;

    fn calendar() -> Ethiopian {
        Ethiopian::new(Clock::Fixed(date!(2024 - 09 - 11)))
    }

    #[test]
    fn test_leap_years() {
        assert!(Ethiopian::is_leap_year(2015));
        assert!(!Ethiopian::is_leap_year(2016));
        assert!(Ethiopian::is_leap_year(2019));
    }

    #[test]
    fn test_month_structure() {
        let cal = calendar();
        assert_eq!(cal.months_in_year(2016), 13);
        assert_eq!(cal.period_months_in_year(2016), 12);
        assert_eq!(cal.days_in_month(2016, 1), 30);
        assert_eq!(cal.days_in_month(2015, 13), 6);
        assert_eq!(cal.days_in_month(2016, 13), 5);
        assert_eq!(cal.days_in_year(2015), 366);
        assert_eq!(cal.days_in_year(2016), 365);
    }

    #[test]
    fn test_epoch() {
        let cal = calendar();
        assert_eq!(
            cal.to_julian_day(CalendarDate::new(1, 1, 1)).unwrap(),
            EPOCH_JULIAN_DAY
        );
        assert_eq!(
            cal.from_julian_day(EPOCH_JULIAN_DAY).unwrap(),
            CalendarDate::new(1, 1, 1)
        );
    }

    #[test]
    fn test_new_year_after_leap_year() {
        // Ethiopian 2016 began on 12 September 2023, after a six-day Pagume
        let ethiopian = calendar();
        let gregorian = Gregorian::new(Clock::System);
        let jd = gregorian
            .to_julian_day(CalendarDate::new(2023, 9, 12))
            .unwrap();
        assert_eq!(
            ethiopian.from_julian_day(jd).unwrap(),
            CalendarDate::new(2016, 1, 1)
        );
        assert_eq!(
            ethiopian.from_julian_day(jd - 1).unwrap(),
            CalendarDate::new(2015, 13, 6)
        );
    }

    #[test]
    fn test_today_converts_from_gregorian_clock() {
        // 11 September 2024 is 1 Meskerem 2017
        assert_eq!(calendar().today().unwrap(), CalendarDate::new(2017, 1, 1));
    }

    #[test]
    fn test_gregorian_new_year_in_tahesas() {
        let ethiopian = calendar();
        let gregorian = Gregorian::new(Clock::System);
        let jd = gregorian
            .to_julian_day(CalendarDate::new(2024, 1, 1))
            .unwrap();
        assert_eq!(
            ethiopian.from_julian_day(jd).unwrap(),
            CalendarDate::new(2016, 4, 22)
        );
    }

    #[test]
    fn test_round_trip_across_several_years() {
        let cal = calendar();
        let start = cal.to_julian_day(CalendarDate::new(2010, 1, 1)).unwrap();
        let end = cal.to_julian_day(CalendarDate::new(2020, 1, 1)).unwrap();
        for jd in start..end {
            let date = cal.from_julian_day(jd).unwrap();
            assert_eq!(cal.to_julian_day(date).unwrap(), jd);
        }
    }

    #[test]
    fn test_add_month_rolls_through_pagume() {
        let cal = calendar();
        assert_eq!(
            cal.add(CalendarDate::new(2016, 12, 30), 1, DateUnit::Month)
                .unwrap(),
            CalendarDate::new(2016, 13, 5)
        );
        assert_eq!(
            cal.add(CalendarDate::new(2016, 12, 1), 2, DateUnit::Month)
                .unwrap(),
            CalendarDate::new(2017, 1, 1)
        );
    }

    #[test]
    fn test_month_names() {
        let cal = calendar();
        assert_eq!(cal.month_name(1), "Meskerem");
        assert_eq!(cal.month_name(13), "Pagume");
        assert_eq!(cal.month_name(14), "");
        assert_eq!(cal.month_name_short(4), "Tah");
    }
}
