//! Student registry aggregations, scoped by education level.
//!
//! Every KPI on the students page is computed over the filtered rows; the
//! page has no global statistics.

use super::{
    PageOptions,
    filters::LevelFilter,
    stats::{GroupCount, count_matching, group_count, percentage},
};
use crate::entities::{Class, Dataset, Gender, Student};
use chrono::Datelike;
use tracing::debug;

/// A student joined with its class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentRow<'a> {
    /// The student
    pub student: &'a Student,
    /// Its class, absent when `class_id` is missing or dangles
    pub class: Option<&'a Class>,
}

impl StudentRow<'_> {
    /// Level of the joined class, if any
    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.class.map(|class| class.level.as_str())
    }
}

/// Joins every student with its class, preserving dataset order.
#[must_use]
pub fn join_classes(dataset: &Dataset) -> Vec<StudentRow<'_>> {
    dataset
        .students
        .iter()
        .map(|student| StudentRow {
            student,
            class: dataset.class_of(student),
        })
        .collect()
}

/// Keeps the rows whose class level passes `filter`.
#[must_use]
pub fn filter_by_level<'a>(rows: &[StudentRow<'a>], filter: &LevelFilter) -> Vec<StudentRow<'a>> {
    rows.iter()
        .filter(|row| filter.matches(row.level()))
        .copied()
        .collect()
}

/// Counts over a set of students
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudentStats {
    /// Students in the set
    pub total: usize,
    /// Active students
    pub active: usize,
    /// Inactive students
    pub inactive: usize,
    /// Male students
    pub male: usize,
    /// Female students
    pub female: usize,
    /// Students who enrolled during the academic year's starting calendar year
    pub new_enrollments: usize,
}

impl StudentStats {
    /// Male share, whole percent
    #[must_use]
    pub fn male_share(&self) -> f64 {
        percentage(self.male, self.total, 0)
    }

    /// Female share, whole percent
    #[must_use]
    pub fn female_share(&self) -> f64 {
        percentage(self.female, self.total, 0)
    }
}

/// Computes counts over `students`, treating enrollments in `enrollment_year` as new.
pub fn student_stats<'a, I>(students: I, enrollment_year: i32) -> StudentStats
where
    I: IntoIterator<Item = &'a Student>,
    I::IntoIter: Clone,
{
    let students = students.into_iter();
    StudentStats {
        total: students.clone().count(),
        active: count_matching(students.clone(), |s| s.is_active()),
        inactive: count_matching(students.clone(), |s| !s.is_active()),
        male: count_matching(students.clone(), |s| s.gender == Gender::Male),
        female: count_matching(students.clone(), |s| s.gender == Gender::Female),
        new_enrollments: count_matching(students, |s| s.enrolled_in(enrollment_year)),
    }
}

/// Calendar year whose enrollments count as new: the academic year's
/// starting year, or the reference date's year when the label has none.
#[must_use]
pub fn enrollment_year(dataset: &Dataset, options: &PageOptions) -> i32 {
    dataset
        .school
        .starting_year()
        .unwrap_or_else(|| options.reference_date.year())
}

/// Counts rows per class level in order of first appearance.
///
/// Rows without a class are grouped under `None`, so the counts always sum
/// to the number of rows.
#[must_use]
pub fn level_distribution<'a>(rows: &[StudentRow<'a>]) -> Vec<GroupCount<Option<&'a str>>> {
    group_count(rows.iter(), |row| row.class.map(|class| class.level.as_str()))
}

/// Students per level across the whole dataset, skipping students without a class.
#[must_use]
pub fn students_per_level(dataset: &Dataset) -> Vec<GroupCount<&str>> {
    level_distribution(&join_classes(dataset))
        .into_iter()
        .filter_map(|group| {
            group.key.map(|level| GroupCount {
                key: level,
                count: group.count,
            })
        })
        .collect()
}

/// Headcount of one class among the filtered students
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeadcount<'a> {
    /// The class
    pub class: &'a Class,
    /// Axis label without level words
    pub short_name: String,
    /// Filtered students in the class
    pub students: usize,
}

/// Headcount per class for the classes matching `filter`, in dataset order.
#[must_use]
pub fn headcount_by_class<'a>(
    dataset: &'a Dataset,
    rows: &[StudentRow<'a>],
    filter: &LevelFilter,
) -> Vec<ClassHeadcount<'a>> {
    dataset
        .classes
        .iter()
        .filter(|class| filter.matches(Some(class.level.as_str())))
        .map(|class| ClassHeadcount {
            class,
            short_name: class.short_name(),
            students: count_matching(rows.iter(), |row| {
                row.student.class_id.as_ref() == Some(&class.id)
            }),
        })
        .collect()
}

/// Everything the students page shows
#[derive(Debug, Clone, PartialEq)]
pub struct StudentsPage<'a> {
    /// Active filter
    pub filter: LevelFilter,
    /// Selectable levels, in order of first appearance among classes
    pub levels: Vec<&'a str>,
    /// Statistics over the filtered students
    pub stats: StudentStats,
    /// Calendar year counted as "new enrollments"
    pub enrollment_year: i32,
    /// Headcount per class of the selected level
    pub per_class: Vec<ClassHeadcount<'a>>,
    /// First rows of the filtered roster
    pub roster: Vec<StudentRow<'a>>,
    /// Number of filtered rows before truncation
    pub total_rows: usize,
}

/// Aggregates the students page for `filter`.
#[must_use]
pub fn students_page<'a>(
    dataset: &'a Dataset,
    filter: &LevelFilter,
    options: &PageOptions,
) -> StudentsPage<'a> {
    let rows = filter_by_level(&join_classes(dataset), filter);
    let year = enrollment_year(dataset, options);
    let stats = student_stats(rows.iter().map(|row| row.student), year);
    let per_class = headcount_by_class(dataset, &rows, filter);

    debug!(
        "Students page: filter={}, students={}, classes={}",
        filter,
        stats.total,
        per_class.len()
    );

    StudentsPage {
        filter: filter.clone(),
        levels: dataset.levels(),
        stats,
        enrollment_year: year,
        per_class,
        total_rows: rows.len(),
        roster: rows.into_iter().take(options.table_row_limit).collect(),
    }
}
