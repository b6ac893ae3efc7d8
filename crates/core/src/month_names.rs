// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Translations for month names used in period names.
///
/// Keys are the calendar's own (untranslated) month names. Names without
/// an override are used as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthNames {
    overrides: BTreeMap<String, String>,
}

impl MonthNames {
    /// Creates an empty translation table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Adds a translation, returning the updated table.
    #[must_use]
    pub fn with(mut self, name: &str, translation: &str) -> Self {
        self.insert(name, translation);
        self
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, name: &str, translation: &str) {
        self.overrides
            .insert(name.to_string(), translation.to_string());
    }

    /// Translates `name`, falling back to the name itself.
    #[must_use]
    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        self.overrides.get(name).map_or(name, String::as_str)
    }

    /// Iterates over `(name, translation)` pairs, ordered by name.
    pub fn translations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides
            .iter()
            .map(|(name, translation)| (name.as_str(), translation.as_str()))
    }

    /// Number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns whether no translation is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl From<BTreeMap<String, String>> for MonthNames {
    fn from(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }
}
