// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date patterns in the jQuery calendars notation used by DHIS 2.
//!
//! | Field | Meaning |
//! |---|---|
//! | `d` / `dd` | day of month, plain / two digits |
//! | `o` / `oo` | day of year, plain / three digits |
//! | `D` / `DD` | weekday name, short / full |
//! | `m` / `mm` | month number, plain / two digits |
//! | `M` / `MM` | month name, short / full |
//! | `y` / `yy` | two-digit year |
//! | `yyyy` | four-digit year |
//! | `'...'` | literal text, `''` is a single quote |
//!
//! Any other character is copied as-is. A run of the same field letter is
//! consumed as one field.

use crate::calendar::Calendar;
use crate::date::{CalendarDate, DateUnit};
use crate::error::CalendarError;

/// The ISO 8601 calendar date pattern.
pub const ISO_PATTERN: &str = "yyyy-mm-dd";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Day,
    DayPadded,
    DayOfYear,
    DayOfYearPadded,
    WeekdayShort,
    Weekday,
    Month,
    MonthPadded,
    MonthNameShort,
    MonthName,
    YearShort,
    Year,
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Compiles `source` into a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] if the pattern is empty,
    /// has an unterminated quote, or contains no date field.
    pub fn new(source: &str) -> Result<Self, CalendarError> {
        let invalid = |reason: &str| CalendarError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        let chars: Vec<char> = source.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut index: usize = 0;

        while index < chars.len() {
            let current: char = chars[index];

            if current == '\'' {
                if chars.get(index + 1) == Some(&'\'') {
                    push_literal(&mut tokens, "'");
                    index += 2;
                    continue;
                }
                let mut literal = String::new();
                index += 1;
                loop {
                    match chars.get(index) {
                        None => return Err(invalid("unterminated quoted literal")),
                        Some('\'') if chars.get(index + 1) == Some(&'\'') => {
                            literal.push('\'');
                            index += 2;
                        }
                        Some('\'') => {
                            index += 1;
                            break;
                        }
                        Some(c) => {
                            literal.push(*c);
                            index += 1;
                        }
                    }
                }
                push_literal(&mut tokens, &literal);
                continue;
            }

            let run: usize = chars[index..]
                .iter()
                .take_while(|c| **c == current)
                .count();

            let token: Option<Token> = match (current, run) {
                ('d', 1) => Some(Token::Day),
                ('d', _) => Some(Token::DayPadded),
                ('o', 1) => Some(Token::DayOfYear),
                ('o', _) => Some(Token::DayOfYearPadded),
                ('D', 1) => Some(Token::WeekdayShort),
                ('D', _) => Some(Token::Weekday),
                ('m', 1) => Some(Token::Month),
                ('m', _) => Some(Token::MonthPadded),
                ('M', 1) => Some(Token::MonthNameShort),
                ('M', _) => Some(Token::MonthName),
                ('y', 1..=3) => Some(Token::YearShort),
                ('y', _) => Some(Token::Year),
                _ => None,
            };

            match token {
                Some(token) => {
                    tokens.push(token);
                    index += run;
                }
                None => {
                    push_literal(&mut tokens, &current.to_string());
                    index += 1;
                }
            }
        }

        if tokens.iter().all(|t| matches!(t, Token::Literal(_))) {
            return Err(invalid("pattern contains no date field"));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The ISO 8601 pattern `yyyy-mm-dd`.
    #[must_use]
    pub fn iso() -> Self {
        Self {
            source: ISO_PATTERN.to_string(),
            tokens: vec![
                Token::Year,
                Token::Literal("-".to_string()),
                Token::MonthPadded,
                Token::Literal("-".to_string()),
                Token::DayPadded,
            ],
        }
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Formats `date` using `calendar` for names and day numbering.
    ///
    /// Fields that cannot be computed for an invalid date are left empty.
    pub fn format<C: Calendar + ?Sized>(&self, calendar: &C, date: CalendarDate) -> String {
        let mut output = String::with_capacity(self.source.len() + 8);

        for token in &self.tokens {
            match token {
                Token::Day => output.push_str(&date.day().to_string()),
                Token::DayPadded => output.push_str(&format!("{:02}", date.day())),
                Token::DayOfYear => {
                    if let Ok(doy) = calendar.day_of_year(date) {
                        output.push_str(&doy.to_string());
                    }
                }
                Token::DayOfYearPadded => {
                    if let Ok(doy) = calendar.day_of_year(date) {
                        output.push_str(&format!("{doy:03}"));
                    }
                }
                Token::WeekdayShort => {
                    if let Ok(dow) = calendar.day_of_week(date) {
                        output.push_str(calendar.day_name_short(dow));
                    }
                }
                Token::Weekday => {
                    if let Ok(dow) = calendar.day_of_week(date) {
                        output.push_str(calendar.day_name(dow));
                    }
                }
                Token::Month => output.push_str(&date.month().to_string()),
                Token::MonthPadded => output.push_str(&format!("{:02}", date.month())),
                Token::MonthNameShort => output.push_str(calendar.month_name_short(date.month())),
                Token::MonthName => output.push_str(calendar.month_name(date.month())),
                Token::YearShort => {
                    output.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                }
                Token::Year => {
                    if date.year() < 0 {
                        output.push('-');
                    }
                    output.push_str(&format!("{:04}", date.year().unsigned_abs()));
                }
                Token::Literal(text) => output.push_str(text),
            }
        }

        output
    }

    /// Parses `text` into a validated date of `calendar`.
    ///
    /// Two-digit years resolve to the century of the calendar's current
    /// year. A day-of-year field takes precedence over month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ParseDate`] if the text does not match the
    /// pattern, or [`CalendarError::InvalidDate`] if the fields name a date
    /// that does not exist.
    pub fn parse<C: Calendar + ?Sized>(
        &self,
        calendar: &C,
        text: &str,
    ) -> Result<CalendarDate, CalendarError> {
        let fail = |reason: String| CalendarError::ParseDate {
            text: text.to_string(),
            pattern: self.source.clone(),
            reason,
        };

        let mut rest: &str = text;
        let mut year: Option<i32> = None;
        let mut short_year: Option<i32> = None;
        let mut month: Option<u8> = None;
        let mut day: Option<u8> = None;
        let mut day_of_year: Option<u16> = None;

        for token in &self.tokens {
            match token {
                Token::Day | Token::DayPadded => {
                    day = Some(take_number(&mut rest, 2, false).and_then(narrow).ok_or_else(
                        || fail("expected a day of month".to_string()),
                    )?);
                }
                Token::DayOfYear | Token::DayOfYearPadded => {
                    day_of_year = Some(
                        take_number(&mut rest, 3, false)
                            .and_then(|n| u16::try_from(n).ok())
                            .ok_or_else(|| fail("expected a day of year".to_string()))?,
                    );
                }
                Token::Month | Token::MonthPadded => {
                    month = Some(take_number(&mut rest, 2, false).and_then(narrow).ok_or_else(
                        || fail("expected a month number".to_string()),
                    )?);
                }
                Token::MonthNameShort | Token::MonthName => {
                    let year_hint: i32 = year.or(short_year).unwrap_or(0);
                    let names = (1..=calendar.months_in_year(year_hint)).map(|m| {
                        if matches!(token, Token::MonthName) {
                            (m, calendar.month_name(m))
                        } else {
                            (m, calendar.month_name_short(m))
                        }
                    });
                    let (matched, length) = longest_name_match(rest, names)
                        .ok_or_else(|| fail("expected a month name".to_string()))?;
                    month = Some(matched);
                    rest = &rest[length..];
                }
                Token::WeekdayShort | Token::Weekday => {
                    let names = (0..7).map(|d| {
                        if matches!(token, Token::Weekday) {
                            (d, calendar.day_name(d))
                        } else {
                            (d, calendar.day_name_short(d))
                        }
                    });
                    let (_, length) = longest_name_match(rest, names)
                        .ok_or_else(|| fail("expected a weekday name".to_string()))?;
                    rest = &rest[length..];
                }
                Token::YearShort => {
                    short_year = Some(
                        take_number(&mut rest, 2, false)
                            .ok_or_else(|| fail("expected a two-digit year".to_string()))?,
                    );
                }
                Token::Year => {
                    year = Some(
                        take_number(&mut rest, 4, true)
                            .ok_or_else(|| fail("expected a year".to_string()))?,
                    );
                }
                Token::Literal(literal) => {
                    rest = rest
                        .strip_prefix(literal.as_str())
                        .ok_or_else(|| fail(format!("expected '{literal}'")))?;
                }
            }
        }

        if !rest.is_empty() {
            return Err(fail(format!("unexpected trailing text '{rest}'")));
        }

        let year: i32 = match (year, short_year) {
            (Some(year), _) => year,
            (None, Some(short)) => {
                let century: i32 = calendar.today()?.year().div_euclid(100) * 100;
                century + short
            }
            (None, None) => return Err(fail("missing year".to_string())),
        };

        if let Some(day_of_year) = day_of_year {
            if day_of_year == 0 || day_of_year > calendar.days_in_year(year) {
                return Err(fail(format!("day of year {day_of_year} out of range")));
            }
            let first: CalendarDate = calendar.new_date(year, 1, 1)?;
            return calendar.add(first, i32::from(day_of_year) - 1, DateUnit::Day);
        }

        match (month, day) {
            (Some(month), Some(day)) => calendar.new_date(year, month, day),
            _ => Err(fail("missing month or day".to_string())),
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::iso()
    }
}

impl std::fmt::Display for DatePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for DatePattern {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(previous)) = tokens.last_mut() {
        previous.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

/// Consumes up to `max_digits` leading digits (and a sign, if allowed).
fn take_number(rest: &mut &str, max_digits: usize, signed: bool) -> Option<i32> {
    let negative: bool = signed && rest.starts_with('-');
    let body: &str = if negative { &rest[1..] } else { rest };

    let digits: usize = body
        .chars()
        .take(max_digits)
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    let value: i32 = body[..digits].parse().ok()?;
    *rest = &body[digits..];
    Some(if negative { -value } else { value })
}

fn narrow(value: i32) -> Option<u8> {
    u8::try_from(value).ok()
}

fn longest_name_match(
    rest: &str,
    names: impl Iterator<Item = (u8, &'static str)>,
) -> Option<(u8, usize)> {
    names
        .filter(|(_, name)| !name.is_empty())
        .filter(|(_, name)| {
            rest.get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
        })
        .max_by_key(|(_, name)| name.len())
        .map(|(value, name)| (value, name.len()))
}
