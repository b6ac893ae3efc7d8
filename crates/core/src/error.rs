// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use periodgen_calendar::CalendarError;

/// Errors that can occur while configuring or running period generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// A generator was built without a calendar.
    MissingCalendar,
    /// The configured date format could not be compiled.
    InvalidDateFormat {
        /// The rejected pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
    /// No period type is registered under this name.
    UnknownPeriodType(String),
    /// The underlying calendar rejected a date or an operation.
    Calendar(CalendarError),
    /// The generator configuration could not be read.
    InvalidConfig(String),
}

impl std::fmt::Display for PeriodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCalendar => {
                write!(f, "A calendar is required to generate periods")
            }
            Self::InvalidDateFormat { pattern, reason } => {
                write!(f, "Invalid date format '{pattern}': {reason}")
            }
            Self::UnknownPeriodType(name) => write!(f, "Unknown period type: {name}"),
            Self::Calendar(err) => write!(f, "Calendar error: {err}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid generator configuration: {msg}"),
        }
    }
}

impl std::error::Error for PeriodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calendar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CalendarError> for PeriodError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}
