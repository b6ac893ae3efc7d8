// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PeriodError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The registered period types.
///
/// The string form of each variant is its name in period ids
/// (e.g. `Monthly_2024-02-01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodType {
    /// One period per day.
    Daily,
    /// Weeks starting on Monday.
    Weekly,
    /// Weeks starting on Wednesday.
    WeeklyWednesday,
    /// Weeks starting on Thursday.
    WeeklyThursday,
    /// Weeks starting on Saturday.
    WeeklySaturday,
    /// Weeks starting on Sunday.
    WeeklySunday,
    /// Two-week spans starting on Monday.
    BiWeekly,
    Monthly,
    BiMonthly,
    Quarterly,
    /// January to June, July to the end of the year.
    SixMonthly,
    /// April to September, October to March.
    SixMonthlyApril,
    /// November to April, May to October.
    SixMonthlyNov,
    Yearly,
    FinancialApril,
    FinancialJuly,
    #[serde(alias = "FinancialOctober")]
    FinancialOct,
    FinancialNov,
}

impl PeriodType {
    /// Every period type, in registration order.
    pub const ALL: [Self; 18] = [
        Self::Daily,
        Self::Weekly,
        Self::WeeklyWednesday,
        Self::WeeklyThursday,
        Self::WeeklySaturday,
        Self::WeeklySunday,
        Self::BiWeekly,
        Self::Monthly,
        Self::BiMonthly,
        Self::Quarterly,
        Self::SixMonthly,
        Self::SixMonthlyApril,
        Self::SixMonthlyNov,
        Self::Yearly,
        Self::FinancialApril,
        Self::FinancialJuly,
        Self::FinancialOct,
        Self::FinancialNov,
    ];

    /// Converts this period type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::WeeklyWednesday => "WeeklyWednesday",
            Self::WeeklyThursday => "WeeklyThursday",
            Self::WeeklySaturday => "WeeklySaturday",
            Self::WeeklySunday => "WeeklySunday",
            Self::BiWeekly => "BiWeekly",
            Self::Monthly => "Monthly",
            Self::BiMonthly => "BiMonthly",
            Self::Quarterly => "Quarterly",
            Self::SixMonthly => "SixMonthly",
            Self::SixMonthlyApril => "SixMonthlyApril",
            Self::SixMonthlyNov => "SixMonthlyNov",
            Self::Yearly => "Yearly",
            Self::FinancialApril => "FinancialApril",
            Self::FinancialJuly => "FinancialJuly",
            Self::FinancialOct => "FinancialOct",
            Self::FinancialNov => "FinancialNov",
        }
    }

    /// Returns whether periods of this type are week based.
    #[must_use]
    pub const fn is_weekly(&self) -> bool {
        matches!(
            self,
            Self::Weekly
                | Self::WeeklyWednesday
                | Self::WeeklyThursday
                | Self::WeeklySaturday
                | Self::WeeklySunday
                | Self::BiWeekly
        )
    }
}

impl FromStr for PeriodType {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "FinancialOctober" {
            return Ok(Self::FinancialOct);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PeriodError::UnknownPeriodType(s.to_string()))
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
