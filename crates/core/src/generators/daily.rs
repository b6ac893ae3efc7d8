// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Context, Generator};
use crate::error::PeriodError;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::{Calendar, CalendarDate, DateUnit};

/// One period per day of the year.
pub(crate) struct Daily;

pub(crate) static DAILY: Daily = Daily;

impl Generator for Daily {
    fn kind(&self) -> PeriodType {
        PeriodType::Daily
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let calendar: &dyn Calendar = ctx.calendar();
        let days: u16 = calendar.days_in_year(year);
        let mut periods: Vec<Period> = Vec::with_capacity(usize::from(days));
        let mut date: CalendarDate = calendar.new_date(year, 1, 1)?;

        for day in 1..=days {
            periods.push(ctx.period(
                PeriodType::Daily,
                PeriodFields {
                    start: date,
                    end: date,
                    name: ctx.format(date),
                    iso: format!("{:04}{:02}{:02}", date.year(), date.month(), date.day()),
                },
            ));
            if day < days {
                date = calendar.add(date, 1, DateUnit::Day)?;
            }
        }

        Ok(periods)
    }

    fn step(&self) -> (i32, DateUnit) {
        (1, DateUnit::Day)
    }
}
