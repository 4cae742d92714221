//! Student entity - one enrolled (or formerly enrolled) pupil.

use super::Id;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Student gender as recorded in the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
}

/// Enrollment status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    /// Currently attending
    #[serde(rename = "attivo")]
    Active,
    /// Withdrawn or graduated
    #[serde(rename = "inattivo")]
    Inactive,
}

impl StudentStatus {
    /// Label used in tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "attivo",
            Self::Inactive => "inattivo",
        }
    }
}

/// Student record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: Id,
    /// First name
    #[serde(rename = "nome")]
    pub name: String,
    /// Last name
    #[serde(rename = "cognome")]
    pub surname: String,
    /// Gender
    #[serde(rename = "genere")]
    pub gender: Gender,
    /// Date of birth
    #[serde(rename = "dataNascita")]
    pub birth_date: NaiveDate,
    /// Date the student enrolled
    #[serde(rename = "dataIscrizione")]
    pub enrollment_date: NaiveDate,
    /// Enrollment status
    #[serde(rename = "stato")]
    pub status: StudentStatus,
    /// Class the student belongs to; may be absent or dangle
    #[serde(rename = "classeId", default)]
    pub class_id: Option<Id>,
}

impl Student {
    /// "Name Surname"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Whether the student is currently attending
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }

    /// Whether the student enrolled during the given calendar year
    #[must_use]
    pub fn enrolled_in(&self, year: i32) -> bool {
        self.enrollment_date.year() == year
    }
}
