// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::period_type::PeriodType;
use periodgen_calendar::CalendarDate;
use serde::Serialize;

/// A named, dated span produced by a generator.
///
/// Periods are plain values: every generation call builds fresh ones and
/// nothing mutates them afterwards. The formatted dates, name, id and iso
/// code are what callers bind to; the calendar dates are kept alongside
/// for comparisons and are not serialized.
///
/// ## Invariants
///
/// - `end >= start`
/// - `id` is `<type>_<startDate>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    start_date: String,
    end_date: String,
    name: String,
    id: String,
    iso: String,
    #[serde(skip)]
    kind: PeriodType,
    #[serde(skip)]
    start: CalendarDate,
    #[serde(skip)]
    end: CalendarDate,
}

/// Inputs for a single period, before the dates are formatted.
#[derive(Debug, Clone)]
pub(crate) struct PeriodFields {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub name: String,
    pub iso: String,
}

impl Period {
    pub(crate) fn new(
        kind: PeriodType,
        fields: PeriodFields,
        start_date: String,
        end_date: String,
    ) -> Self {
        let id: String = format!("{}_{start_date}", kind.as_str());
        Self {
            start_date,
            end_date,
            name: fields.name,
            id,
            iso: fields.iso,
            kind,
            start: fields.start,
            end: fields.end,
        }
    }

    /// The formatted first day of the period.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// The formatted last day of the period.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The compact ISO-like code.
    #[must_use]
    pub fn iso(&self) -> &str {
        &self.iso
    }

    /// The type that produced this period.
    #[must_use]
    pub const fn kind(&self) -> PeriodType {
        self.kind
    }

    /// The first day of the period in the generating calendar.
    #[must_use]
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// The last day of the period in the generating calendar.
    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns whether `date` falls within the period, bounds included.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.iso)
    }
}
