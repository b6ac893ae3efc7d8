// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Calendar, CalendarDate, CalendarError, DatePattern, Ethiopian, Gregorian, Clock};
use time::macros::date;

#[test]
fn test_ethiopian_month_names_in_patterns() {
    let calendar = Ethiopian::new(Clock::Fixed(date!(2024 - 06 - 15)));
    let pattern = DatePattern::new("MM yyyy").unwrap();
    assert_eq!(
        calendar.format_date(&pattern, CalendarDate::new(2016, 13, 1)),
        "Pagume 2016"
    );

    let parsed = calendar
        .parse_date(&DatePattern::new("d MM yyyy").unwrap(), "5 Pagume 2016")
        .unwrap();
    assert_eq!(parsed, CalendarDate::new(2016, 13, 5));
}

#[test]
fn test_ethiopian_parse_rejects_missing_leap_day() {
    let calendar = Ethiopian::new(Clock::System);
    let result = calendar.parse_date(&DatePattern::iso(), "2016-13-06");
    assert!(matches!(result, Err(CalendarError::InvalidDate { .. })));
}

#[test]
fn test_format_through_trait_object() {
    let calendar: Box<dyn Calendar> = Box::new(Gregorian::new(Clock::System));
    let pattern = DatePattern::new("dd/mm/yyyy").unwrap();
    assert_eq!(
        calendar.format_date(&pattern, CalendarDate::new(2024, 7, 4)),
        "04/07/2024"
    );
    assert_eq!(
        calendar.parse_date(&pattern, "04/07/2024").unwrap(),
        CalendarDate::new(2024, 7, 4)
    );
}

#[test]
fn test_pattern_from_str_and_display() {
    let pattern: DatePattern = "yyyy.mm".parse().unwrap();
    assert_eq!(pattern.to_string(), "yyyy.mm");
    assert_eq!(pattern.as_str(), "yyyy.mm");
}
