// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generator configuration.
//!
//! ```json
//! { "calendar": "ethiopian", "dateFormat": "dd-mm-yyyy",
//!   "monthNames": { "Meskerem": "Mäskäräm" } }
//! ```
//!
//! Every field is optional. Values set later through [`GeneratorConfig::merge`]
//! take precedence, which is how command-line flags override a file.

use crate::error::PeriodError;
use crate::month_names::MonthNames;
use periodgen_calendar::CalendarKind;
use serde::{Deserialize, Serialize};

/// Settings for building a [`crate::PeriodGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// The calendar chronology.
    pub calendar: Option<CalendarKind>,
    /// The date pattern for formatted dates; ISO 8601 when absent.
    pub date_format: Option<String>,
    /// Month name translations.
    pub month_names: MonthNames,
}

impl GeneratorConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidConfig`] if the document is malformed or
    /// holds unknown fields.
    pub fn from_json(json: &str) -> Result<Self, PeriodError> {
        serde_json::from_str(json).map_err(|err| PeriodError::InvalidConfig(err.to_string()))
    }

    /// Overlays `other` on top of this configuration.
    ///
    /// Fields set in `other` win; month name translations are combined.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.calendar.is_some() {
            self.calendar = other.calendar;
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format;
        }
        for (name, translation) in other.month_names.translations() {
            self.month_names.insert(name, translation);
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full() {
        let config: GeneratorConfig = GeneratorConfig::from_json(
            r#"{"calendar": "ethiopian", "dateFormat": "dd-mm-yyyy",
                "monthNames": {"Tir": "Ter"}}"#,
        )
        .unwrap();
        assert_eq!(config.calendar, Some(CalendarKind::Ethiopian));
        assert_eq!(config.date_format.as_deref(), Some("dd-mm-yyyy"));
        assert_eq!(config.month_names.translate("Tir"), "Ter");
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(
            GeneratorConfig::from_json("{}").unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = GeneratorConfig::from_json(r#"{"calender": "gregorian"}"#);
        assert!(matches!(result, Err(PeriodError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_calendar() {
        let result = GeneratorConfig::from_json(r#"{"calendar": "nepali"}"#);
        assert!(matches!(result, Err(PeriodError::InvalidConfig(_))));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base: GeneratorConfig = GeneratorConfig {
            calendar: Some(CalendarKind::Ethiopian),
            date_format: Some(String::from("dd/mm/yyyy")),
            month_names: MonthNames::new().with("Tir", "Ter"),
        };
        let overlay: GeneratorConfig = GeneratorConfig {
            calendar: Some(CalendarKind::Gregorian),
            date_format: None,
            month_names: MonthNames::new().with("January", "Janvier"),
        };

        let merged: GeneratorConfig = base.merge(overlay);
        assert_eq!(merged.calendar, Some(CalendarKind::Gregorian));
        assert_eq!(merged.date_format.as_deref(), Some("dd/mm/yyyy"));
        assert_eq!(merged.month_names.len(), 2);
    }
}
