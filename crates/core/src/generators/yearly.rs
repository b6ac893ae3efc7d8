// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Year based generators: calendar years and financial years.
//!
//! Both emit eleven periods, five years either side of the requested year.

use super::{Context, Generator};
use crate::error::PeriodError;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::{Calendar, CalendarDate, DateUnit};

const YEARS_EACH_SIDE: i32 = 5;
const YEARLY_LOOKUP_OFFSETS: [i32; 1] = [-YEARS_EACH_SIDE];

/// Whole calendar years.
pub(crate) struct Yearly;

pub(crate) static YEARLY: Yearly = Yearly;

/// Twelve-month years starting at a fixed month.
pub(crate) struct Financial {
    kind: PeriodType,
    start_month: u8,
    /// Suffix of the iso code.
    label: &'static str,
    /// Code the year by the year it ends in instead of the one it starts in.
    iso_by_end_year: bool,
}

pub(crate) static FINANCIAL_APRIL: Financial = Financial {
    kind: PeriodType::FinancialApril,
    start_month: 4,
    label: "April",
    iso_by_end_year: false,
};

pub(crate) static FINANCIAL_JULY: Financial = Financial {
    kind: PeriodType::FinancialJuly,
    start_month: 7,
    label: "July",
    iso_by_end_year: false,
};

pub(crate) static FINANCIAL_OCT: Financial = Financial {
    kind: PeriodType::FinancialOct,
    start_month: 10,
    label: "Oct",
    iso_by_end_year: false,
};

pub(crate) static FINANCIAL_NOV: Financial = Financial {
    kind: PeriodType::FinancialNov,
    start_month: 11,
    label: "Nov",
    iso_by_end_year: true,
};

impl Generator for Yearly {
    fn kind(&self) -> PeriodType {
        PeriodType::Yearly
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        (-YEARS_EACH_SIDE..=YEARS_EACH_SIDE)
            .map(|delta| -> Result<Period, PeriodError> {
                let current: i32 = year + delta;
                let last_month: u8 = ctx.calendar().months_in_year(current);
                let (start, end) = ctx.month_span((current, 1), (current, last_month))?;
                Ok(ctx.period(
                    PeriodType::Yearly,
                    PeriodFields {
                        start,
                        end,
                        name: format!("{current:04}"),
                        iso: format!("{current:04}"),
                    },
                ))
            })
            .collect()
    }

    fn step(&self) -> (i32, DateUnit) {
        (1, DateUnit::Year)
    }

    // The requested year is the last one generated
    fn lookup_offsets(&self, _month: u8) -> &'static [i32] {
        &YEARLY_LOOKUP_OFFSETS
    }
}

impl Generator for Financial {
    fn kind(&self) -> PeriodType {
        self.kind
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let calendar: &dyn Calendar = ctx.calendar();
        let mut start: CalendarDate =
            calendar.new_date(year - YEARS_EACH_SIDE, self.start_month, 1)?;
        let mut periods: Vec<Period> = Vec::new();

        for _ in -YEARS_EACH_SIDE..=YEARS_EACH_SIDE {
            let next: CalendarDate = calendar.add(start, 1, DateUnit::Year)?;
            let end: CalendarDate = calendar.add(next, -1, DateUnit::Day)?;
            let iso_year: i32 = if self.iso_by_end_year {
                end.year()
            } else {
                start.year()
            };

            periods.push(ctx.period(
                self.kind,
                PeriodFields {
                    start,
                    end,
                    name: format!(
                        "{} {} - {} {}",
                        ctx.month_name(start.month()),
                        start.year(),
                        ctx.month_name(end.month()),
                        end.year()
                    ),
                    iso: format!("{iso_year:04}{}", self.label),
                },
            ));

            start = next;
        }

        Ok(periods)
    }

    fn step(&self) -> (i32, DateUnit) {
        (1, DateUnit::Year)
    }

    // Generation for year y starts with the financial year beginning in y - 5
    fn lookup_offsets(&self, month: u8) -> &'static [i32] {
        if month < self.start_month { &[4] } else { &[5] }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_lookup_offsets() {
        assert_eq!(FINANCIAL_APRIL.lookup_offsets(3), &[4]);
        assert_eq!(FINANCIAL_APRIL.lookup_offsets(4), &[5]);
        assert_eq!(FINANCIAL_NOV.lookup_offsets(10), &[4]);
        assert_eq!(FINANCIAL_NOV.lookup_offsets(11), &[5]);
        assert_eq!(YEARLY.lookup_offsets(7), &[-5]);
    }

    #[test]
    fn test_financial_labels_match_kind_names() {
        for financial in [&FINANCIAL_APRIL, &FINANCIAL_JULY, &FINANCIAL_OCT, &FINANCIAL_NOV] {
            assert_eq!(
                financial.kind().as_str(),
                format!("Financial{}", financial.label)
            );
        }
    }
}
