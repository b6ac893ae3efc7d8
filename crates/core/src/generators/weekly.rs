// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week based generators.
//!
//! The first week of a year is the one holding the 4th day of its first
//! month, rewound to the week's start day. Weeks are emitted until the
//! first week of the next year is reached. Since a year's week count
//! depends on the calendar, the loop is capped at [`MAX_ITERATIONS`].

use super::{Context, Generator};
use crate::error::PeriodError;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::{Calendar, CalendarDate, CalendarError, DateUnit};
use tracing::warn;

/// Upper bound on weeks (or bi-weeks) emitted for one year.
pub(crate) const MAX_ITERATIONS: u16 = 200;

/// Weeks starting on a fixed weekday.
pub(crate) struct Weekly {
    kind: PeriodType,
    /// 0 (Sunday) through 6 (Saturday).
    start_weekday: u8,
    /// Marker between year and week number in the iso code.
    iso_marker: &'static str,
}

pub(crate) static WEEKLY: Weekly = Weekly {
    kind: PeriodType::Weekly,
    start_weekday: 1,
    iso_marker: "W",
};

pub(crate) static WEEKLY_WEDNESDAY: Weekly = Weekly {
    kind: PeriodType::WeeklyWednesday,
    start_weekday: 3,
    iso_marker: "WedW",
};

pub(crate) static WEEKLY_THURSDAY: Weekly = Weekly {
    kind: PeriodType::WeeklyThursday,
    start_weekday: 4,
    iso_marker: "ThuW",
};

pub(crate) static WEEKLY_SATURDAY: Weekly = Weekly {
    kind: PeriodType::WeeklySaturday,
    start_weekday: 6,
    iso_marker: "SatW",
};

pub(crate) static WEEKLY_SUNDAY: Weekly = Weekly {
    kind: PeriodType::WeeklySunday,
    start_weekday: 0,
    iso_marker: "SunW",
};

/// Two-week spans starting on Monday.
pub(crate) struct BiWeekly;

pub(crate) static BI_WEEKLY: BiWeekly = BiWeekly;

/// The first day of `year`'s first week for weeks starting on `weekday`.
///
/// This is the latest `weekday` on or before the 4th day of the first month.
pub(crate) fn first_week_start(
    calendar: &dyn Calendar,
    year: i32,
    weekday: u8,
) -> Result<CalendarDate, CalendarError> {
    let fourth: CalendarDate = calendar.new_date(year, 1, 4)?;
    let back: i32 =
        (i32::from(calendar.day_of_week(fourth)?) - i32::from(weekday)).rem_euclid(7);
    calendar.add(fourth, -back, DateUnit::Day)
}

fn span_end(
    calendar: &dyn Calendar,
    start: CalendarDate,
    weeks: i32,
) -> Result<CalendarDate, CalendarError> {
    let next: CalendarDate = calendar.add(start, weeks, DateUnit::Week)?;
    calendar.add(next, -1, DateUnit::Day)
}

impl Generator for Weekly {
    fn kind(&self) -> PeriodType {
        self.kind
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let calendar: &dyn Calendar = ctx.calendar();
        // None when the next year lies past the calendar's supported range
        let next_year_start: Option<CalendarDate> = year
            .checked_add(1)
            .and_then(|next| first_week_start(calendar, next, self.start_weekday).ok());
        let mut start: CalendarDate = first_week_start(calendar, year, self.start_weekday)?;
        let mut periods: Vec<Period> = Vec::new();

        for week in 1..MAX_ITERATIONS {
            let end: CalendarDate = match span_end(calendar, start, 1) {
                Ok(end) => end,
                Err(_) if next_year_start.is_none() => return Ok(periods),
                Err(e) => return Err(e.into()),
            };

            let wrapped: bool = week > 50 && calendar.week_of_year(start)? == 1;
            let reached_next_year: bool = next_year_start
                .is_some_and(|next_start| start <= next_start && next_start <= end);
            if wrapped || reached_next_year {
                return Ok(periods);
            }

            let start_date: String = ctx.format(start);
            let end_date: String = ctx.format(end);
            periods.push(ctx.period(
                self.kind,
                PeriodFields {
                    start,
                    end,
                    name: format!("Week {week} - {start_date} - {end_date}"),
                    iso: format!("{year}{}{week}", self.iso_marker),
                },
            ));

            match calendar.add(start, 1, DateUnit::Week) {
                Ok(next) => start = next,
                Err(_) if next_year_start.is_none() => return Ok(periods),
                Err(e) => return Err(e.into()),
            }
        }

        warn!(kind = %self.kind, year, "Week generation stopped at the iteration bound");
        Ok(periods)
    }

    fn step(&self) -> (i32, DateUnit) {
        (1, DateUnit::Week)
    }

    // A week can belong to the year before or after the date's own year
    fn lookup_offsets(&self, _month: u8) -> &'static [i32] {
        &[0, 1, -1]
    }
}

impl Generator for BiWeekly {
    fn kind(&self) -> PeriodType {
        PeriodType::BiWeekly
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let calendar: &dyn Calendar = ctx.calendar();
        let mut start: CalendarDate = first_week_start(calendar, year, 1)?;
        let mut periods: Vec<Period> = Vec::new();

        for bi_week in 1..MAX_ITERATIONS {
            // Stop at the top of the supported range
            let Ok(end) = span_end(calendar, start, 2) else {
                return Ok(periods);
            };
            let start_date: String = ctx.format(start);
            let end_date: String = ctx.format(end);
            periods.push(ctx.period(
                PeriodType::BiWeekly,
                PeriodFields {
                    start,
                    end,
                    name: format!("Bi-Week {bi_week} - {start_date} - {end_date}"),
                    iso: format!("{year}BiW{bi_week}"),
                },
            ));

            let Ok(next) = calendar.add(start, 2, DateUnit::Week) else {
                return Ok(periods);
            };
            start = next;
            let week: u8 = calendar.week_of_year(start)?;
            if bi_week > 25 && (week == 1 || week == 2) {
                return Ok(periods);
            }
        }

        warn!(
            kind = %PeriodType::BiWeekly,
            year,
            "Bi-week generation stopped at the iteration bound"
        );
        Ok(periods)
    }

    fn step(&self) -> (i32, DateUnit) {
        (2, DateUnit::Week)
    }

    fn lookup_offsets(&self, _month: u8) -> &'static [i32] {
        &[0, 1, -1]
    }
}
