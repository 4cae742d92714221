//! Entity module - Contains the record types of the school dataset.
//! The dataset is deserialized once from a JSON document and never mutated.
//! Serde renames map the Italian document keys onto English field names.

pub mod class;
pub mod dataset;
pub mod history;
pub mod installment;
pub mod school;
pub mod service;
pub mod student;
pub mod teacher;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export specific types to avoid conflicts
pub use class::Class;
pub use dataset::Dataset;
pub use history::{AttendanceEntry, History, MonthlyEntry, YearlyEntry};
pub use installment::{Installment, InstallmentStatus};
pub use school::School;
pub use service::{AfterSchoolEnrollment, CanteenEnrollment, Services, TransportEnrollment};
pub use student::{Gender, Student, StudentStatus};
pub use teacher::{Teacher, TeacherLevel};

/// Record identifier.
///
/// The source document mixes numeric and textual ids, so both are accepted
/// and normalized to text. Two ids are equal when their text is equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct Id(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        }
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Id {
    /// Returns the id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
