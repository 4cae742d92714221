//! Teacher entity. Teachers are tied to classes by level, not by id.

use super::Id;
use serde::{Deserialize, Serialize};

/// Sentinel level label meaning "teaches every level"
pub const ALL_LEVELS: &str = "Tutti";

/// Level a teacher is assigned to
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeacherLevel {
    /// Teaches across all levels
    AllLevels,
    /// Teaches a single level
    Level(String),
}

impl From<String> for TeacherLevel {
    fn from(value: String) -> Self {
        if value == ALL_LEVELS {
            Self::AllLevels
        } else {
            Self::Level(value)
        }
    }
}

impl From<TeacherLevel> for String {
    fn from(value: TeacherLevel) -> Self {
        match value {
            TeacherLevel::AllLevels => ALL_LEVELS.to_string(),
            TeacherLevel::Level(level) => level,
        }
    }
}

impl TeacherLevel {
    /// Whether a teacher with this assignment teaches `level`
    #[must_use]
    pub fn covers(&self, level: &str) -> bool {
        match self {
            Self::AllLevels => true,
            Self::Level(own) => own == level,
        }
    }

    /// Label used in tables
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AllLevels => ALL_LEVELS,
            Self::Level(level) => level,
        }
    }
}

/// Teacher record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier
    pub id: Id,
    /// Full name
    #[serde(rename = "nome")]
    pub name: String,
    /// Subject taught
    #[serde(rename = "materia", default)]
    pub subject: String,
    /// Level assignment
    #[serde(rename = "livello")]
    pub level: TeacherLevel,
    /// Weekly teaching hours
    #[serde(rename = "oreSett", default)]
    pub weekly_hours: u32,
}

impl Teacher {
    /// Up to two initials taken from the words of the name ("Anna Maria Rossi" → "AM").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}
