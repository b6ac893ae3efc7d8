// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Context, Generator};
use crate::error::PeriodError;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::{CalendarDate, DateUnit};

/// January to June, then July to the last month of the year.
pub(crate) struct SixMonthly;

/// April to September, then October to March of the following year.
pub(crate) struct SixMonthlyApril;

/// November to April of the following year, then May to October.
pub(crate) struct SixMonthlyNov;

pub(crate) static SIX_MONTHLY: SixMonthly = SixMonthly;
pub(crate) static SIX_MONTHLY_APRIL: SixMonthlyApril = SixMonthlyApril;
pub(crate) static SIX_MONTHLY_NOV: SixMonthlyNov = SixMonthlyNov;

/// `<Month> - <Month> <yyyy>`
fn name_within_year(ctx: &Context<'_>, start: CalendarDate, end: CalendarDate) -> String {
    format!(
        "{} - {} {}",
        ctx.month_name(start.month()),
        ctx.month_name(end.month()),
        start.year()
    )
}

/// `<Month> <yyyy> - <Month> <yyyy>`
fn name_across_years(ctx: &Context<'_>, start: CalendarDate, end: CalendarDate) -> String {
    format!(
        "{} {} - {} {}",
        ctx.month_name(start.month()),
        start.year(),
        ctx.month_name(end.month()),
        end.year()
    )
}

impl Generator for SixMonthly {
    fn kind(&self) -> PeriodType {
        PeriodType::SixMonthly
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let last_month: u8 = ctx.calendar().months_in_year(year);
        let halves = [((1, 6), 1), ((7, last_month), 2)];

        halves
            .into_iter()
            .map(|((first, last), half)| -> Result<Period, PeriodError> {
                let (start, end) = ctx.month_span((year, first), (year, last))?;
                Ok(ctx.period(
                    PeriodType::SixMonthly,
                    PeriodFields {
                        start,
                        end,
                        name: name_within_year(ctx, start, end),
                        iso: format!("{year:04}S{half}"),
                    },
                ))
            })
            .collect()
    }

    fn step(&self) -> (i32, DateUnit) {
        (6, DateUnit::Month)
    }
}

impl Generator for SixMonthlyApril {
    fn kind(&self) -> PeriodType {
        PeriodType::SixMonthlyApril
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let (start, end) = ctx.month_span((year, 4), (year, 9))?;
        let first: Period = ctx.period(
            PeriodType::SixMonthlyApril,
            PeriodFields {
                start,
                end,
                name: name_within_year(ctx, start, end),
                iso: format!("{year:04}AprilS1"),
            },
        );

        let (start, end) = ctx.month_span((year, 10), (year + 1, 3))?;
        let second: Period = ctx.period(
            PeriodType::SixMonthlyApril,
            PeriodFields {
                start,
                end,
                name: name_across_years(ctx, start, end),
                iso: format!("{year:04}AprilS2"),
            },
        );

        Ok(vec![first, second])
    }

    fn step(&self) -> (i32, DateUnit) {
        (6, DateUnit::Month)
    }

    fn lookup_offsets(&self, month: u8) -> &'static [i32] {
        if month < 4 { &[-1] } else { &[0] }
    }
}

impl Generator for SixMonthlyNov {
    fn kind(&self) -> PeriodType {
        PeriodType::SixMonthlyNov
    }

    // Both halves are coded by the year they end in
    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let next_year: i32 = year + 1;

        let (start, end) = ctx.month_span((year, 11), (next_year, 4))?;
        let first: Period = ctx.period(
            PeriodType::SixMonthlyNov,
            PeriodFields {
                start,
                end,
                name: name_across_years(ctx, start, end),
                iso: format!("{next_year:04}NovS1"),
            },
        );

        let (start, end) = ctx.month_span((next_year, 5), (next_year, 10))?;
        let second: Period = ctx.period(
            PeriodType::SixMonthlyNov,
            PeriodFields {
                start,
                end,
                name: name_across_years(ctx, start, end),
                iso: format!("{next_year:04}NovS2"),
            },
        );

        Ok(vec![first, second])
    }

    fn step(&self) -> (i32, DateUnit) {
        (6, DateUnit::Month)
    }

    fn lookup_offsets(&self, month: u8) -> &'static [i32] {
        if month < 11 { &[-1] } else { &[0] }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_offsets_follow_half_year_start() {
        assert_eq!(SIX_MONTHLY.lookup_offsets(2), &[0]);
        assert_eq!(SIX_MONTHLY_APRIL.lookup_offsets(3), &[-1]);
        assert_eq!(SIX_MONTHLY_APRIL.lookup_offsets(4), &[0]);
        assert_eq!(SIX_MONTHLY_NOV.lookup_offsets(10), &[-1]);
        assert_eq!(SIX_MONTHLY_NOV.lookup_offsets(11), &[0]);
    }
}
