//! Class entity - a group of students sharing a room and an education level.

use super::Id;
use serde::{Deserialize, Serialize};

/// Class record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Unique identifier
    pub id: Id,
    /// Display name (e.g. "1A Primaria")
    #[serde(rename = "nome")]
    pub name: String,
    /// Education level label (e.g. "Primaria")
    #[serde(rename = "livello")]
    pub level: String,
    /// Maximum number of students
    #[serde(rename = "capienza")]
    pub capacity: u32,
    /// Room the class is held in
    #[serde(rename = "aulaId", default)]
    pub room_id: Option<Id>,
}

impl Class {
    /// Class name without the level suffix/prefix, used as a chart axis label.
    #[must_use]
    pub fn short_name(&self) -> String {
        self.name
            .replace(" Primaria", "")
            .replace(" Secondaria", "")
            .replace("Infanzia ", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> Class {
        Class {
            id: Id::from("C1"),
            name: name.to_string(),
            level: "Primaria".to_string(),
            capacity: 20,
            room_id: None,
        }
    }

    #[test]
    fn test_short_name_strips_level() {
        assert_eq!(class("3B Primaria").short_name(), "3B");
        assert_eq!(class("2A Secondaria").short_name(), "2A");
        assert_eq!(class("Infanzia Girasoli").short_name(), "Girasoli");
        assert_eq!(class("Sezione Unica").short_name(), "Sezione Unica");
    }
}
