// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar chronologies for period generation.
//!
//! A [`Calendar`] describes how a chronology counts months and days and how
//! its dates map onto Julian day numbers. Arithmetic, weekday and week
//! numbering, and pattern formatting are derived from that, so every
//! chronology shares the same semantics.

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

mod calendar;
mod clock;
mod date;
mod error;
mod ethiopian;
mod gregorian;
mod kind;
mod pattern;

#[cfg(test)]
mod tests;

pub use calendar::Calendar;
pub use clock::Clock;
pub use date::{CalendarDate, DateUnit};
pub use error::CalendarError;
pub use ethiopian::Ethiopian;
pub use gregorian::Gregorian;
pub use kind::CalendarKind;
pub use pattern::{DatePattern, ISO_PATTERN};
