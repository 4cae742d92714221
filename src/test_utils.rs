//! Shared test utilities for the dashboard.
//!
//! This module provides a small, fully known dataset and helpers for creating
//! records with sensible defaults. Figures derived from `sample_dataset()`:
//!
//! * 9 students (8 active), 4 male / 5 female, one with a dangling class id
//! * 4 classes over 3 levels, capacity 50
//! * 7 installments: 3 paid (950), 4 unpaid (1200), one with a dangling student
//! * services revenue 750 (canteen 270, transport 230, after-school 250)
//! * 5 teachers, one assigned to all levels

#![allow(clippy::unwrap_used)]

use crate::entities::{
    AfterSchoolEnrollment, AttendanceEntry, CanteenEnrollment, Class, Dataset, Gender, History,
    Id, Installment, InstallmentStatus, MonthlyEntry, School, Services, Student, StudentStatus,
    Teacher, TeacherLevel, TransportEnrollment, YearlyEntry,
};
use chrono::NaiveDate;

/// Builds a date, panicking on invalid input (tests only)
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date the sample's due dates are arranged around
pub fn reference_date() -> NaiveDate {
    date(2026, 2, 6)
}

/// Creates a test school with academic year 2025/2026
pub fn create_test_school() -> School {
    School {
        name: "Scuola Test".to_string(),
        city: "Milano".to_string(),
        academic_year: "2025/2026".to_string(),
    }
}

/// Creates a test class
pub fn create_test_class(id: &str, name: &str, level: &str, capacity: u32) -> Class {
    Class {
        id: Id::from(id),
        name: name.to_string(),
        level: level.to_string(),
        capacity,
        room_id: Some(Id::from(format!("A-{id}").as_str())),
    }
}

/// Creates a test student.
///
/// # Defaults
/// * `surname`: "Test"
/// * `birth_date`: 2018-05-01
pub fn create_test_student(
    id: &str,
    name: &str,
    gender: Gender,
    class_id: &str,
    status: StudentStatus,
    enrollment_date: NaiveDate,
) -> Student {
    Student {
        id: Id::from(id),
        name: name.to_string(),
        surname: "Test".to_string(),
        gender,
        birth_date: date(2018, 5, 1),
        enrollment_date,
        status,
        class_id: Some(Id::from(class_id)),
    }
}

/// Creates a test installment
pub fn create_test_installment(
    id: &str,
    student_id: &str,
    month: &str,
    amount: u64,
    due_date: NaiveDate,
    status: InstallmentStatus,
) -> Installment {
    Installment {
        id: Id::from(id),
        student_id: Some(Id::from(student_id)),
        month: month.to_string(),
        amount,
        due_date,
        status,
    }
}

/// Creates installments from parallel amount/status lists, all for student "S1"
pub fn installments_from(amounts: &[u64], statuses: &[InstallmentStatus]) -> Vec<Installment> {
    amounts
        .iter()
        .zip(statuses)
        .enumerate()
        .map(|(i, (amount, status))| {
            create_test_installment(
                &format!("R{i}"),
                "S1",
                "Gennaio",
                *amount,
                date(2026, 1, 10),
                *status,
            )
        })
        .collect()
}

/// Creates a test teacher
pub fn create_test_teacher(id: &str, name: &str, level: TeacherLevel) -> Teacher {
    Teacher {
        id: Id::from(id),
        name: name.to_string(),
        subject: "Italiano".to_string(),
        level,
        weekly_hours: 20,
    }
}

fn canteen(student_id: &str, active: bool, meals: u32, monthly_cost: u64) -> CanteenEnrollment {
    CanteenEnrollment {
        student_id: Id::from(student_id),
        active,
        meals,
        monthly_cost,
    }
}

fn transport(student_id: &str, active: bool, route: &str, monthly_cost: u64) -> TransportEnrollment {
    TransportEnrollment {
        student_id: Id::from(student_id),
        active,
        route: route.to_string(),
        monthly_cost,
    }
}

fn after_school(
    student_id: &str,
    active: bool,
    weekly_hours: u32,
    monthly_cost: u64,
) -> AfterSchoolEnrollment {
    AfterSchoolEnrollment {
        student_id: Id::from(student_id),
        active,
        weekly_hours,
        monthly_cost,
    }
}

fn sample_history() -> History {
    let yearly = [
        ("21/22", 115, 495_000, 85_000),
        ("22/23", 120, 520_000, 92_000),
        ("23/24", 125, 545_000, 98_000),
        ("24/25", 128, 560_000, 105_000),
        ("25/26", 130, 585_000, 112_000),
    ]
    .into_iter()
    .map(|(year, students, tuition, services)| YearlyEntry {
        year: year.to_string(),
        students,
        tuition,
        services,
    })
    .collect();

    let monthly = [
        ("Set", 125, 52_000, Some(48_000)),
        ("Ott", 128, 54_000, Some(50_000)),
        ("Nov", 128, 53_500, Some(49_500)),
        ("Dic", 129, 55_000, Some(51_000)),
        ("Gen", 130, 56_000, Some(52_000)),
        ("Feb", 130, 48_000, None),
    ]
    .into_iter()
    .map(|(month, enrolled, collected, previous)| MonthlyEntry {
        month: month.to_string(),
        enrolled,
        collected,
        previous_year_collected: previous,
    })
    .collect();

    let attendance = [("Infanzia", 92.0), ("Primaria", 94.0), ("Secondaria I", 89.0)]
        .into_iter()
        .map(|(level, rate)| AttendanceEntry {
            level: level.to_string(),
            rate,
        })
        .collect();

    History {
        yearly,
        monthly,
        attendance,
        retention_rate: Some(96.0),
    }
}

/// Builds the reference dataset described in the module docs
pub fn sample_dataset() -> Dataset {
    use Gender::{Female, Male};
    use InstallmentStatus::{Paid, Unpaid};
    use StudentStatus::{Active, Inactive};

    let classes = vec![
        create_test_class("C1", "Infanzia Girasoli", "Infanzia", 20),
        create_test_class("C2", "1A Primaria", "Primaria", 3),
        create_test_class("C3", "2A Primaria", "Primaria", 2),
        create_test_class("C4", "1A Secondaria", "Secondaria I", 25),
    ];

    let students = vec![
        create_test_student("S1", "Luca", Male, "C1", Active, date(2025, 9, 1)),
        create_test_student("S2", "Giulia", Female, "C1", Active, date(2024, 9, 1)),
        create_test_student("S3", "Marco", Male, "C2", Active, date(2025, 9, 3)),
        create_test_student("S4", "Sara", Female, "C2", Active, date(2023, 9, 1)),
        create_test_student("S5", "Paolo", Male, "C3", Inactive, date(2022, 9, 1)),
        create_test_student("S6", "Anna", Female, "C3", Active, date(2025, 1, 15)),
        create_test_student("S7", "Elena", Female, "C4", Active, date(2024, 9, 1)),
        create_test_student("S8", "Davide", Male, "C4", Active, date(2025, 9, 2)),
        create_test_student("S9", "Chiara", Female, "C99", Active, date(2025, 9, 10)),
    ];

    let installments = vec![
        create_test_installment("R1", "S1", "Gennaio", 300, date(2026, 1, 10), Paid),
        create_test_installment("R2", "S2", "Gennaio", 300, date(2026, 1, 10), Unpaid),
        create_test_installment("R3", "S3", "Gennaio", 350, date(2026, 1, 10), Paid),
        create_test_installment("R4", "S1", "Febbraio", 300, date(2026, 2, 10), Unpaid),
        create_test_installment("R5", "S2", "Febbraio", 300, date(2026, 2, 10), Paid),
        create_test_installment("R6", "S3", "Febbraio", 350, date(2026, 2, 20), Unpaid),
        create_test_installment("R7", "S99", "Febbraio", 250, date(2026, 2, 6), Unpaid),
    ];

    let services = Services {
        canteen: vec![
            canteen("S1", true, 18, 90),
            canteen("S2", true, 20, 100),
            canteen("S3", false, 5, 80),
        ],
        transport: vec![
            transport("S1", true, "Linea Nord", 60),
            transport("S4", true, "Linea Sud", 60),
            transport("S6", true, "Linea Nord", 60),
            transport("S7", false, "Linea Est", 50),
        ],
        after_school: vec![
            after_school("S3", true, 10, 120),
            after_school("S8", true, 6, 80),
            after_school("S99", true, 4, 50),
        ],
    };

    let teachers = vec![
        create_test_teacher("D1", "Maria Esposito", TeacherLevel::Level("Infanzia".to_string())),
        create_test_teacher("D2", "Giovanni Romano", TeacherLevel::Level("Primaria".to_string())),
        create_test_teacher("D3", "Laura Colombo", TeacherLevel::AllLevels),
        create_test_teacher(
            "D4",
            "Roberto Ferrari",
            TeacherLevel::Level("Secondaria I".to_string()),
        ),
        create_test_teacher("D5", "Francesca Bruno", TeacherLevel::Level("Primaria".to_string())),
    ];

    Dataset {
        school: create_test_school(),
        students,
        classes,
        installments,
        services,
        teachers,
        history: sample_history(),
    }
}

/// A dataset with a school header and nothing else
pub fn empty_dataset() -> Dataset {
    Dataset {
        school: create_test_school(),
        students: Vec::new(),
        classes: Vec::new(),
        installments: Vec::new(),
        services: Services::default(),
        teachers: Vec::new(),
        history: History::default(),
    }
}
