// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The period generator.
//!
//! A [`PeriodGenerator`] binds a calendar, a date format and month name
//! translations, and answers every period question against them. It holds
//! no mutable state, so one instance can be shared freely across threads.
//!
//! ## Offsets
//!
//! Generation takes an `offset` in years relative to the calendar's current
//! year. `0` is this year, `-1` last year. Year based types lay out several
//! years around the offset year.

use crate::config::GeneratorConfig;
use crate::error::PeriodError;
use crate::generators::{Context, generator_for};
use crate::month_names::MonthNames;
use crate::period::Period;
use crate::period_type::PeriodType;
use periodgen_calendar::{Calendar, CalendarDate, CalendarError, Clock, DatePattern};
use std::sync::Arc;
use tracing::debug;

/// Generates calendar periods.
#[derive(Debug, Clone)]
pub struct PeriodGenerator {
    calendar: Arc<dyn Calendar>,
    date_format: DatePattern,
    month_names: MonthNames,
}

/// Builder for [`PeriodGenerator`].
#[derive(Debug, Default)]
pub struct PeriodGeneratorBuilder {
    calendar: Option<Arc<dyn Calendar>>,
    date_format: Option<String>,
    month_names: MonthNames,
}

impl PeriodGeneratorBuilder {
    /// Sets the calendar. Required.
    #[must_use]
    pub fn calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Sets the date format. Defaults to `yyyy-mm-dd`.
    #[must_use]
    pub fn date_format(mut self, pattern: &str) -> Self {
        self.date_format = Some(pattern.to_string());
        self
    }

    /// Sets the month name translations.
    #[must_use]
    pub fn month_names(mut self, month_names: MonthNames) -> Self {
        self.month_names = month_names;
        self
    }

    /// Builds the generator.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::MissingCalendar`] if no calendar was set, or
    /// [`PeriodError::InvalidDateFormat`] if the date format does not
    /// compile.
    pub fn build(self) -> Result<PeriodGenerator, PeriodError> {
        let calendar: Arc<dyn Calendar> = self.calendar.ok_or(PeriodError::MissingCalendar)?;

        let date_format: DatePattern = self
            .date_format
            .as_deref()
            .map(DatePattern::new)
            .transpose()
            .map_err(|err| match err {
                CalendarError::InvalidPattern { pattern, reason } => {
                    PeriodError::InvalidDateFormat { pattern, reason }
                }
                other => PeriodError::Calendar(other),
            })?
            .unwrap_or_default();

        Ok(PeriodGenerator {
            calendar,
            date_format,
            month_names: self.month_names,
        })
    }
}

/// A generator bound to one period type.
#[derive(Debug, Clone, Copy)]
pub struct KindGenerator<'a> {
    owner: &'a PeriodGenerator,
    kind: PeriodType,
}

impl KindGenerator<'_> {
    /// The period type.
    #[must_use]
    pub const fn kind(&self) -> PeriodType {
        self.kind
    }

    /// The period type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// See [`PeriodGenerator::generate_periods`].
    ///
    /// # Errors
    ///
    /// Propagates calendar errors.
    pub fn generate_periods(&self, offset: i32) -> Result<Vec<Period>, PeriodError> {
        self.owner.generate_periods(self.kind, offset)
    }

    /// See [`PeriodGenerator::date_plus_periods`].
    ///
    /// # Errors
    ///
    /// Propagates calendar errors.
    pub fn date_plus_periods(
        &self,
        date: CalendarDate,
        n: i32,
    ) -> Result<CalendarDate, PeriodError> {
        self.owner.date_plus_periods(self.kind, date, n)
    }

    /// See [`PeriodGenerator::today_plus_periods`].
    ///
    /// # Errors
    ///
    /// Propagates calendar errors.
    pub fn today_plus_periods(&self, n: i32) -> Result<CalendarDate, PeriodError> {
        self.owner.today_plus_periods(self.kind, n)
    }
}

impl PeriodGenerator {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> PeriodGeneratorBuilder {
        PeriodGeneratorBuilder::default()
    }

    /// Creates a generator for `calendar` with an optional date format.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidDateFormat`] if the date format does
    /// not compile.
    pub fn new(
        calendar: Arc<dyn Calendar>,
        date_format: Option<&str>,
    ) -> Result<Self, PeriodError> {
        let mut builder: PeriodGeneratorBuilder = Self::builder().calendar(calendar);
        if let Some(pattern) = date_format {
            builder = builder.date_format(pattern);
        }
        builder.build()
    }

    /// Creates a generator from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The calendar, date format and month names to use
    /// * `clock` - Where the calendar reads today from
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::MissingCalendar`] if the configuration names
    /// no calendar, or [`PeriodError::InvalidDateFormat`] for a bad format.
    pub fn from_config(config: &GeneratorConfig, clock: Clock) -> Result<Self, PeriodError> {
        let kind = config.calendar.ok_or(PeriodError::MissingCalendar)?;
        let mut builder: PeriodGeneratorBuilder = Self::builder()
            .calendar(kind.instance(clock))
            .month_names(config.month_names.clone());
        if let Some(pattern) = &config.date_format {
            builder = builder.date_format(pattern);
        }
        builder.build()
    }

    /// The calendar periods are generated in.
    #[must_use]
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// The date format used for formatted dates.
    #[must_use]
    pub const fn date_format(&self) -> &DatePattern {
        &self.date_format
    }

    /// The month name translations.
    #[must_use]
    pub const fn month_names(&self) -> &MonthNames {
        &self.month_names
    }

    /// Returns the generator for `kind`.
    #[must_use]
    pub const fn get(&self, kind: PeriodType) -> KindGenerator<'_> {
        KindGenerator { owner: self, kind }
    }

    /// Returns the generator registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::UnknownPeriodType`] if no such type exists.
    pub fn get_by_name(&self, name: &str) -> Result<KindGenerator<'_>, PeriodError> {
        Ok(self.get(name.parse()?))
    }

    /// Returns the generators of every period type.
    #[must_use]
    pub fn all(&self) -> Vec<KindGenerator<'_>> {
        PeriodType::ALL.into_iter().map(|kind| self.get(kind)).collect()
    }

    /// Returns today in the generator's calendar.
    ///
    /// # Errors
    ///
    /// Propagates clock conversion errors.
    pub fn today(&self) -> Result<CalendarDate, PeriodError> {
        Ok(self.calendar.today()?)
    }

    fn context(&self) -> Context<'_> {
        Context::new(self.calendar.as_ref(), &self.date_format, &self.month_names)
    }

    /// Generates the periods of `kind` for the year `offset` years from now.
    ///
    /// # Errors
    ///
    /// Propagates calendar errors.
    pub fn generate_periods(
        &self,
        kind: PeriodType,
        offset: i32,
    ) -> Result<Vec<Period>, PeriodError> {
        let current_year: i32 = self.today()?.year();
        let year: i32 =
            current_year
                .checked_add(offset)
                .ok_or_else(|| CalendarError::DateArithmeticOverflow {
                    operation: format!("offsetting year {current_year} by {offset}"),
                })?;

        let periods: Vec<Period> = generator_for(kind).generate(&self.context(), year)?;
        debug!(
            kind = %kind,
            calendar = self.calendar.name(),
            offset,
            year,
            count = periods.len(),
            "Generated periods"
        );
        Ok(periods)
    }

    /// Generates the periods of `kind` in reverse chronological order.
    ///
    /// # Errors
    ///
    /// Propagates calendar errors.
    pub fn generate_reversed_periods(
        &self,
        kind: PeriodType,
        offset: i32,
    ) -> Result<Vec<Period>, PeriodError> {
        Ok(Self::reverse(&self.generate_periods(kind, offset)?))
    }

    /// Out-of-place reversal of `periods`.
    #[must_use]
    pub fn reverse(periods: &[Period]) -> Vec<Period> {
        periods.iter().rev().cloned().collect()
    }

    /// Keeps the periods that ended before today.
    ///
    /// # Errors
    ///
    /// Propagates clock conversion errors.
    pub fn filter_future_periods(&self, periods: &[Period]) -> Result<Vec<Period>, PeriodError> {
        let today: CalendarDate = self.today()?;
        Ok(periods
            .iter()
            .filter(|period| period.end() < today)
            .cloned()
            .collect())
    }

    /// Keeps the periods that started on or before today, including the one
    /// in progress.
    ///
    /// # Errors
    ///
    /// Propagates clock conversion errors.
    pub fn filter_future_periods_except_current(
        &self,
        periods: &[Period],
    ) -> Result<Vec<Period>, PeriodError> {
        let today: CalendarDate = self.today()?;
        Ok(periods
            .iter()
            .filter(|period| period.start() <= today)
            .cloned()
            .collect())
    }

    /// Keeps the periods that are open for data entry.
    ///
    /// A period is open when it ends before today plus `n` periods of `kind`.
    /// When a window bound is given, the period must also start on or after
    /// `window_start` and end on or before `window_end`. Bounds are
    /// `yyyy-mm-dd` dates in the generator's calendar; anything after the
    /// first space (such as a time of day) is ignored, and an empty bound
    /// counts as absent.
    ///
    /// # Arguments
    ///
    /// * `kind` - The period type whose step sets the cutoff
    /// * `periods` - The periods to filter
    /// * `n` - Number of future periods that stay open
    /// * `window_start` - Optional earliest allowed start date
    /// * `window_end` - Optional latest allowed end date
    ///
    /// # Errors
    ///
    /// Returns an error if a window bound does not parse.
    pub fn filter_open_periods(
        &self,
        kind: PeriodType,
        periods: &[Period],
        n: i32,
        window_start: Option<&str>,
        window_end: Option<&str>,
    ) -> Result<Vec<Period>, PeriodError> {
        let cutoff: CalendarDate = self.today_plus_periods(kind, n)?;
        let window_start: Option<CalendarDate> = self.parse_window_bound(window_start)?;
        let window_end: Option<CalendarDate> = self.parse_window_bound(window_end)?;

        Ok(periods
            .iter()
            .filter(|period| {
                window_start.is_none_or(|start| period.start() >= start)
                    && window_end.is_none_or(|end| period.end() <= end)
                    && period.end() < cutoff
            })
            .cloned()
            .collect())
    }

    fn parse_window_bound(&self, bound: Option<&str>) -> Result<Option<CalendarDate>, PeriodError> {
        let Some(text) = bound.map(str::trim).filter(|text| !text.is_empty()) else {
            return Ok(None);
        };
        let day: &str = text.split(' ').next().unwrap_or(text);
        Ok(Some(self.calendar.parse_date(&DatePattern::iso(), day)?))
    }

    /// Advances `date` by `n` periods of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is invalid or the result overflows.
    pub fn date_plus_periods(
        &self,
        kind: PeriodType,
        date: CalendarDate,
        n: i32,
    ) -> Result<CalendarDate, PeriodError> {
        Ok(generator_for(kind).date_plus_periods(self.calendar.as_ref(), date, n)?)
    }

    /// Advances today by `n` periods of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result overflows.
    pub fn today_plus_periods(&self, kind: PeriodType, n: i32) -> Result<CalendarDate, PeriodError> {
        self.date_plus_periods(kind, self.today()?, n)
    }

    /// Finds the period of `kind` that contains `date`.
    ///
    /// `date` is a `yyyy-mm-dd` date in the generator's calendar. Returns
    /// `None` if no generated period holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` does not parse or is not a valid date.
    pub fn period_for_date(
        &self,
        date: &str,
        kind: PeriodType,
    ) -> Result<Option<Period>, PeriodError> {
        let date: CalendarDate = self.calendar.parse_date(&DatePattern::iso(), date)?;
        let current_year: i32 = self.today()?.year();
        let year_offset: i32 =
            date.year()
                .checked_sub(current_year)
                .ok_or_else(|| CalendarError::DateArithmeticOverflow {
                    operation: format!("offsetting year {} from {current_year}", date.year()),
                })?;

        for extra in generator_for(kind).lookup_offsets(date.month()) {
            let periods: Vec<Period> = self.generate_periods(kind, year_offset + extra)?;
            if let Some(period) = periods.into_iter().find(|period| period.contains(date)) {
                return Ok(Some(period));
            }
        }

        debug!(kind = %kind, %date, "No period contains date");
        Ok(None)
    }
}

macro_rules! generator_shortcuts {
    ($($method:ident => $kind:ident),+ $(,)?) => {
        impl PeriodGenerator {
            $(
                #[doc = concat!("Generates `", stringify!($kind), "` periods for `offset`.")]
                ///
                /// # Errors
                ///
                /// Propagates calendar errors.
                pub fn $method(&self, offset: i32) -> Result<Vec<Period>, PeriodError> {
                    self.generate_periods(PeriodType::$kind, offset)
                }
            )+
        }
    };
}

generator_shortcuts! {
    daily => Daily,
    weekly => Weekly,
    weekly_wednesday => WeeklyWednesday,
    weekly_thursday => WeeklyThursday,
    weekly_saturday => WeeklySaturday,
    weekly_sunday => WeeklySunday,
    bi_weekly => BiWeekly,
    monthly => Monthly,
    bi_monthly => BiMonthly,
    quarterly => Quarterly,
    six_monthly => SixMonthly,
    six_monthly_april => SixMonthlyApril,
    six_monthly_nov => SixMonthlyNov,
    yearly => Yearly,
    financial_april => FinancialApril,
    financial_july => FinancialJuly,
    financial_oct => FinancialOct,
    financial_nov => FinancialNov,
}
