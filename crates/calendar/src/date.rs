// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A date expressed in some calendar chronology.
///
/// The value carries no reference to its calendar. Ordering is
/// lexicographic over (year, month, day), which is chronological as long as
/// both dates come from the same calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date without validating it against any calendar.
    ///
    /// Use [`crate::Calendar::new_date`] to obtain a validated date.
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month of the year.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the 1-based day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Units accepted by [`crate::Calendar::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
}
