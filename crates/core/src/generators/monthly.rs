// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generators that group consecutive months within one year.

use super::{Context, Generator};
use crate::error::PeriodError;
use crate::period::{Period, PeriodFields};
use crate::period_type::PeriodType;
use periodgen_calendar::DateUnit;

/// Groups of `length` months starting at month 1.
///
/// Only groups that fit entirely within the calendar's period months are
/// emitted, so an epagomenal month never starts or ends a group.
pub(crate) struct MonthGroups {
    kind: PeriodType,
    length: u8,
}

pub(crate) static MONTHLY: MonthGroups = MonthGroups {
    kind: PeriodType::Monthly,
    length: 1,
};

pub(crate) static BI_MONTHLY: MonthGroups = MonthGroups {
    kind: PeriodType::BiMonthly,
    length: 2,
};

pub(crate) static QUARTERLY: MonthGroups = MonthGroups {
    kind: PeriodType::Quarterly,
    length: 3,
};

impl MonthGroups {
    fn iso(&self, year: i32, month: u8, index: u8) -> String {
        match self.kind {
            PeriodType::BiMonthly => format!("{year:04}0{index}B"),
            PeriodType::Quarterly => format!("{year:04}Q{index}"),
            _ => format!("{year:04}{month:02}"),
        }
    }
}

impl Generator for MonthGroups {
    fn kind(&self) -> PeriodType {
        self.kind
    }

    fn generate(&self, ctx: &Context<'_>, year: i32) -> Result<Vec<Period>, PeriodError> {
        let months: u8 = ctx.calendar().period_months_in_year(year);
        let mut periods: Vec<Period> = Vec::new();

        let starts = (1..=months)
            .step_by(usize::from(self.length))
            .take_while(|month| month + self.length - 1 <= months);

        for (index, month) in (1u8..).zip(starts) {
            let last_month: u8 = month + self.length - 1;
            let (start, end) = ctx.month_span((year, month), (year, last_month))?;

            let name: String = if self.length == 1 {
                format!("{} {year}", ctx.month_name(month))
            } else {
                format!(
                    "{} - {} {year}",
                    ctx.month_name(month),
                    ctx.month_name(last_month)
                )
            };

            periods.push(ctx.period(
                self.kind,
                PeriodFields {
                    start,
                    end,
                    name,
                    iso: self.iso(year, month, index),
                },
            ));
        }

        Ok(periods)
    }

    fn step(&self) -> (i32, DateUnit) {
        (i32::from(self.length), DateUnit::Month)
    }
}
