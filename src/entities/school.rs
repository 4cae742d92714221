//! School entity - the singleton header of the dataset.

use serde::{Deserialize, Serialize};

/// School identity shown in every page header
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// Display name of the school
    #[serde(rename = "nome")]
    pub name: String,
    /// City the school is located in
    #[serde(rename = "citta", default)]
    pub city: String,
    /// Academic year label, e.g. "2025/2026"
    #[serde(rename = "annoScolastico")]
    pub academic_year: String,
}

impl School {
    /// Calendar year in which the academic year starts.
    ///
    /// Parsed from the leading digits of the label ("2025/2026" → 2025).
    /// Returns `None` when the label does not start with a year.
    #[must_use]
    pub fn starting_year(&self) -> Option<i32> {
        let digits: String = self
            .academic_year
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if digits.len() == 4 {
            digits.parse().ok()
        } else {
            None
        }
    }
}
