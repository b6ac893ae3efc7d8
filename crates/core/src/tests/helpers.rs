// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{Calendar, CalendarKind, Clock, DateUnit};
use crate::{Period, PeriodGenerator};
use time::Date;
use time::macros::date;

/// Today for every scenario: 15 June 2024 (Gregorian).
pub const TODAY: Date = date!(2024 - 06 - 15);

pub fn create_generator(kind: CalendarKind) -> PeriodGenerator {
    PeriodGenerator::new(kind.instance(Clock::Fixed(TODAY)), None)
        .expect("Failed to create generator")
}

pub fn create_test_generator() -> PeriodGenerator {
    create_generator(CalendarKind::Gregorian)
}

pub fn create_ethiopian_generator() -> PeriodGenerator {
    create_generator(CalendarKind::Ethiopian)
}

/// Asserts that each period starts the day after the previous one ends.
pub fn assert_contiguous(calendar: &dyn Calendar, periods: &[Period]) {
    for pair in periods.windows(2) {
        let next_day = calendar.add(pair[0].end(), 1, DateUnit::Day).unwrap();
        assert_eq!(
            pair[1].start(),
            next_day,
            "gap or overlap between {} and {}",
            pair[0].id(),
            pair[1].id()
        );
    }
}

pub fn isos(periods: &[Period]) -> Vec<&str> {
    periods.iter().map(Period::iso).collect()
}
