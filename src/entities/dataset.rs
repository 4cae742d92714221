//! The dataset snapshot - every record the dashboard reads.
//!
//! A `Dataset` is built once at startup and shared by reference with every
//! aggregation. Foreign-key lookups are linear scans: the data holds a few
//! hundred records and lookups that miss simply return `None`.

use super::{Class, History, Id, Installment, School, Services, Student, Teacher};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable snapshot of the school's records
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// School header
    #[serde(rename = "scuola")]
    pub school: School,
    /// All students, active and inactive
    #[serde(rename = "studenti", default)]
    pub students: Vec<Student>,
    /// All classes
    #[serde(rename = "classi", default)]
    pub classes: Vec<Class>,
    /// Tuition installments
    #[serde(rename = "rette", default)]
    pub installments: Vec<Installment>,
    /// Ancillary service enrollments
    #[serde(rename = "servizi", default)]
    pub services: Services,
    /// Teaching staff
    #[serde(rename = "docenti", default)]
    pub teachers: Vec<Teacher>,
    /// Historical series
    #[serde(rename = "storico", default)]
    pub history: History,
}

impl Dataset {
    /// Parses a dataset from its JSON document.
    ///
    /// # Errors
    /// Returns [`Error::Dataset`] when the document does not match the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Dataset {
            message: format!("Failed to parse dataset: {e}"),
        })
    }

    /// Finds a class by id
    #[must_use]
    pub fn class(&self, id: &Id) -> Option<&Class> {
        self.classes.iter().find(|class| &class.id == id)
    }

    /// Finds a student by id
    #[must_use]
    pub fn student(&self, id: &Id) -> Option<&Student> {
        self.students.iter().find(|student| &student.id == id)
    }

    /// Joins a student to its class. An absent or dangling `class_id` yields `None`.
    #[must_use]
    pub fn class_of(&self, student: &Student) -> Option<&Class> {
        let Some(class_id) = &student.class_id else {
            debug!("Student {} has no class", student.id);
            return None;
        };
        let class = self.class(class_id);
        if class.is_none() {
            debug!("Student {} references missing class {}", student.id, class_id);
        }
        class
    }

    /// Joins an installment (or any record keyed by student) to its student.
    /// An absent or dangling reference yields `None`.
    #[must_use]
    pub fn student_for(&self, student_id: Option<&Id>) -> Option<&Student> {
        let Some(student_id) = student_id else {
            debug!("Record has no student reference");
            return None;
        };
        let student = self.student(student_id);
        if student.is_none() {
            debug!("Record references missing student {}", student_id);
        }
        student
    }

    /// Students whose `class_id` equals `class_id`
    pub fn students_in_class<'a>(&'a self, class_id: &'a Id) -> impl Iterator<Item = &'a Student> {
        self.students
            .iter()
            .filter(move |student| student.class_id.as_ref() == Some(class_id))
    }

    /// Distinct class levels in order of first appearance
    #[must_use]
    pub fn levels(&self) -> Vec<&str> {
        let mut levels: Vec<&str> = Vec::new();
        for class in &self.classes {
            if !levels.contains(&class.level.as_str()) {
                levels.push(&class.level);
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_from_json_str_minimal_document() {
        let json = r#"{ "scuola": { "nome": "Scuola", "annoScolastico": "2025/2026" } }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.school.name, "Scuola");
        assert!(dataset.students.is_empty());
        assert!(dataset.services.canteen.is_empty());
        assert!(dataset.history.yearly.is_empty());
    }

    #[test]
    fn test_from_json_str_tolerates_absent_references() {
        use crate::{
            core::PageOptions,
            views::{Page, RenderContext, render},
        };

        let json = r#"{
            "scuola": { "nome": "Scuola", "annoScolastico": "2025/2026" },
            "classi": [{ "id": "C1", "nome": "1A Primaria", "livello": "Primaria", "capienza": 20 }],
            "studenti": [
                { "id": "S1", "nome": "Luca", "cognome": "Rossi", "genere": "M",
                  "dataNascita": "2018-05-01", "dataIscrizione": "2025-09-01", "stato": "attivo" },
                { "id": "S2", "nome": "Anna", "cognome": "Neri", "genere": "F",
                  "dataNascita": "2018-06-01", "dataIscrizione": "2025-09-01", "stato": "attivo",
                  "classeId": null }
            ],
            "rette": [
                { "id": 1, "mese": "Gen", "importo": 300, "scadenza": "2026-01-10", "stato": "pagata" },
                { "id": 2, "studenteId": null, "mese": "Gen", "importo": 300,
                  "scadenza": "2026-01-10", "stato": "non_pagata" }
            ]
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.students.len(), 2);
        for student in &dataset.students {
            assert_eq!(student.class_id, None);
            assert!(dataset.class_of(student).is_none());
        }
        for installment in &dataset.installments {
            assert_eq!(installment.student_id, None);
            assert!(dataset.student_for(installment.student_id.as_ref()).is_none());
        }
        assert_eq!(dataset.students_in_class(&Id::from("C1")).count(), 0);

        let ctx = RenderContext::new(&dataset, PageOptions::at(reference_date()));
        for page in Page::ALL {
            assert!(render(page, &ctx).unwrap().contains(page.title()));
        }
    }

    #[test]
    fn test_from_json_str_rejects_unknown_status() {
        let json = r#"{
            "scuola": { "nome": "Scuola", "annoScolastico": "2025/2026" },
            "rette": [{ "id": 1, "studenteId": 1, "mese": "Gen", "importo": 300,
                        "scadenza": "2026-01-10", "stato": "forse" }]
        }"#;
        let result = Dataset::from_json_str(json);
        assert!(matches!(result, Err(Error::Dataset { .. })));
    }

    #[test]
    fn test_class_of_joins_and_degrades() {
        let dataset = sample_dataset();
        let student = dataset.student(&Id::from("S1")).unwrap();
        assert_eq!(dataset.class_of(student).unwrap().id, Id::from("C1"));

        let orphan = dataset.student(&Id::from("S9")).unwrap();
        assert!(dataset.class_of(orphan).is_none());
    }

    #[test]
    fn test_student_class_round_trip() {
        let dataset = sample_dataset();
        for student in &dataset.students {
            if let Some(class) = dataset.class_of(student) {
                assert!(
                    dataset
                        .students_in_class(&class.id)
                        .any(|other| other.id == student.id)
                );
            }
        }
    }

    #[test]
    fn test_levels_first_occurrence_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.levels(), vec!["Infanzia", "Primaria", "Secondaria I"]);
    }
}
