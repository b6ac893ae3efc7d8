// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One generator per period type.
//!
//! Every generator lays out the periods of one (offset-adjusted) year and
//! knows the natural step used to advance a date by whole periods. The
//! mapping from [`PeriodType`] to generator is a plain `match` over static
//! instances, so there is no registry to build or share.

mod daily;
mod monthly;
mod six_monthly;
mod weekly;
mod yearly;

use crate::error::PeriodError;
use crate::month_names::MonthNames;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::{Calendar, CalendarDate, CalendarError, DatePattern, DateUnit};

/// Everything a generator needs to build periods.
pub(crate) struct Context<'a> {
    calendar: &'a dyn Calendar,
    date_format: &'a DatePattern,
    month_names: &'a MonthNames,
}

impl<'a> Context<'a> {
    pub(crate) const fn new(
        calendar: &'a dyn Calendar,
        date_format: &'a DatePattern,
        month_names: &'a MonthNames,
    ) -> Self {
        Self {
            calendar,
            date_format,
            month_names,
        }
    }

    pub(crate) const fn calendar(&self) -> &'a dyn Calendar {
        self.calendar
    }

    pub(crate) fn format(&self, date: CalendarDate) -> String {
        self.calendar.format_date(self.date_format, date)
    }

    /// The translated full name of `month`.
    pub(crate) fn month_name(&self, month: u8) -> &'a str {
        self.month_names.translate(self.calendar.month_name(month))
    }

    /// The last day of `month` in `year`.
    pub(crate) fn last_day(&self, year: i32, month: u8) -> Result<CalendarDate, CalendarError> {
        self.calendar
            .new_date(year, month, self.calendar.days_in_month(year, month))
    }

    /// The span from the first day of one month to the last day of another.
    pub(crate) fn month_span(
        &self,
        (start_year, start_month): (i32, u8),
        (end_year, end_month): (i32, u8),
    ) -> Result<(CalendarDate, CalendarDate), CalendarError> {
        let start: CalendarDate = self.calendar.new_date(start_year, start_month, 1)?;
        let end: CalendarDate = self.last_day(end_year, end_month)?;
        Ok((start, end))
    }

    pub(crate) fn period(&self, kind: PeriodType, fields: PeriodFields) -> Period {
        let start_date: String = self.format(fields.start);
        let end_date: String = self.format(fields.end);
        Period::new(kind, fields, start_date, end_date)
    }
}

/// The shared contract of all period generators.
pub(crate) trait Generator: Send + Sync {
    /// The period type this generator produces.
    fn kind(&self) -> PeriodType;

    /// Lays out the periods belonging to `year`.
    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError>;

    /// Length of one period as a multiple of a date unit.
    fn step(&self) -> (i32, DateUnit);

    /// Year offsets, relative to the year of a date in `month`, whose
    /// generated periods may contain that date. Tried in order.
    fn lookup_offsets(&self, _month: u8) -> &'static [i32] {
        &[0]
    }

    /// Advances `date` by `n` periods. Negative `n` goes backwards.
    fn date_plus_periods(
        &self,
        calendar: &dyn Calendar,
        date: CalendarDate,
        n: i32,
    ) -> Result<CalendarDate, CalendarError> {
        let (per_period, unit) = self.step();
        let amount: i32 =
            n.checked_mul(per_period)
                .ok_or_else(|| CalendarError::DateArithmeticOverflow {
                    operation: format!("adding {n} {} periods to {date}", self.kind()),
                })?;
        calendar.add(date, amount, unit)
    }
}

/// Returns the generator for `kind`.
pub(crate) fn generator_for(kind: PeriodType) -> &'static dyn Generator {
    match kind {
        PeriodType::Daily => &daily::DAILY,
        PeriodType::Weekly => &weekly::WEEKLY,
        PeriodType::WeeklyWednesday => &weekly::WEEKLY_WEDNESDAY,
        PeriodType::WeeklyThursday => &weekly::WEEKLY_THURSDAY,
        PeriodType::WeeklySaturday => &weekly::WEEKLY_SATURDAY,
        PeriodType::WeeklySunday => &weekly::WEEKLY_SUNDAY,
        PeriodType::BiWeekly => &weekly::BI_WEEKLY,
        PeriodType::Monthly => &monthly::MONTHLY,
        PeriodType::BiMonthly => &monthly::BI_MONTHLY,
        PeriodType::Quarterly => &monthly::QUARTERLY,
        PeriodType::SixMonthly => &six_monthly::SIX_MONTHLY,
        PeriodType::SixMonthlyApril => &six_monthly::SIX_MONTHLY_APRIL,
        PeriodType::SixMonthlyNov => &six_monthly::SIX_MONTHLY_NOV,
        PeriodType::Yearly => &yearly::YEARLY,
        PeriodType::FinancialApril => &yearly::FINANCIAL_APRIL,
        PeriodType::FinancialJuly => &yearly::FINANCIAL_JULY,
        PeriodType::FinancialOct => &yearly::FINANCIAL_OCT,
        PeriodType::FinancialNov => &yearly::FINANCIAL_NOV,
    }
}
