// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::Calendar;
use crate::clock::Clock;
use crate::error::CalendarError;
use crate::ethiopian::Ethiopian;
use crate::gregorian::Gregorian;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// The chronologies that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    Gregorian,
    Iso8601,
    Ethiopian,
}

impl CalendarKind {
    /// Every selectable chronology.
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Iso8601, Self::Ethiopian];

    /// The chronology name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Iso8601 => "iso8601",
            Self::Ethiopian => "ethiopian",
        }
    }

    /// Creates a calendar instance of this chronology.
    #[must_use]
    pub fn instance(&self, clock: Clock) -> Arc<dyn Calendar> {
        match self {
            Self::Gregorian => Arc::new(Gregorian::new(clock)),
            Self::Iso8601 => Arc::new(Gregorian::iso8601(clock)),
            Self::Ethiopian => Arc::new(Ethiopian::new(clock)),
        }
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::UnknownCalendar(s.to_string()))
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
