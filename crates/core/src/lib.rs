// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar period generation.
//!
//! Given a calendar and today's date, [`PeriodGenerator`] produces ordered
//! lists of daily, weekly, monthly, quarterly, six-monthly, yearly and
//! financial-year periods, each with a stable id, an ISO-like code and a
//! display name.
//!
//! Generation is pure: the same calendar, clock and offset always yield
//! the same periods.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod generator;
mod generators;
mod month_names;
mod period;
mod period_type;

#[cfg(test)]
mod tests;

pub use config::GeneratorConfig;
pub use error::PeriodError;
pub use generator::{KindGenerator, PeriodGenerator, PeriodGeneratorBuilder};
pub use month_names::MonthNames;
pub use period::Period;
pub use period_type::PeriodType;

// Re-export the calendar layer so callers need a single dependency
pub use periodgen_calendar as calendar;
