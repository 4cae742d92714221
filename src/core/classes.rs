//! Class occupancy and teaching staff aggregations, scoped by education level.

use super::{
    filters::LevelFilter,
    stats::{GroupSum, group_sum, percentage, ratio},
};
use crate::entities::{Class, Dataset, Teacher};
use tracing::debug;

/// Occupancy band of a class, from the percentage of seats taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyBand {
    /// Below 70%
    Available,
    /// 70% up to 90%
    High,
    /// 90% or more
    Full,
}

impl OccupancyBand {
    /// Band for a whole-percent occupancy
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Full
        } else if percent >= 70.0 {
            Self::High
        } else {
            Self::Available
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "disponibile",
            Self::High => "quasi piena",
            Self::Full => "piena",
        }
    }
}

/// A class with its headcount
#[derive(Debug, Clone, PartialEq)]
pub struct ClassOccupancy<'a> {
    /// The class
    pub class: &'a Class,
    /// Students (active or not) assigned to the class
    pub students: usize,
    /// Seats taken, whole percent; zero capacity yields 0
    pub occupancy: f64,
    /// Occupancy band
    pub band: OccupancyBand,
}

/// Headcount and occupancy of every class, in dataset order.
#[must_use]
pub fn class_occupancy(dataset: &Dataset) -> Vec<ClassOccupancy<'_>> {
    dataset
        .classes
        .iter()
        .map(|class| {
            let students = dataset.students_in_class(&class.id).count();
            let occupancy = percentage(students, class.capacity as usize, 0);
            ClassOccupancy {
                class,
                students,
                occupancy,
                band: OccupancyBand::from_percent(occupancy),
            }
        })
        .collect()
}

/// Teachers assigned to the filtered level, including all-level teachers.
/// `All` returns every teacher.
#[must_use]
pub fn teachers_for<'a>(dataset: &'a Dataset, filter: &LevelFilter) -> Vec<&'a Teacher> {
    dataset
        .teachers
        .iter()
        .filter(|teacher| match filter {
            LevelFilter::All => true,
            LevelFilter::Level(level) => teacher.level.covers(level),
        })
        .collect()
}

/// Statistics over the filtered classes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassStats {
    /// Classes in the selection
    pub classes: usize,
    /// Seats across the selection
    pub capacity: u64,
    /// Students across the selection
    pub students: usize,
    /// Students over capacity, whole percent; zero capacity yields 0
    pub average_occupancy: f64,
    /// Teachers assigned to the selection
    pub teachers: usize,
    /// Students per teacher, one decimal; no teachers yields 0
    pub students_per_teacher: f64,
}

/// Computes statistics over `classes` with `teachers` teachers assigned.
#[must_use]
pub fn class_stats(classes: &[ClassOccupancy<'_>], teachers: usize) -> ClassStats {
    let capacity: u64 = classes.iter().map(|c| u64::from(c.class.capacity)).sum();
    let students: usize = classes.iter().map(|c| c.students).sum();
    #[allow(clippy::cast_precision_loss)] // headcounts are tiny
    let students_per_teacher = ratio(students as f64, teachers as f64, 1);
    ClassStats {
        classes: classes.len(),
        capacity,
        students,
        average_occupancy: percentage(students, usize::try_from(capacity).unwrap_or(usize::MAX), 0),
        teachers,
        students_per_teacher,
    }
}

/// Seats and students accumulated for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSeats {
    /// Students
    pub students: usize,
    /// Seats
    pub capacity: usize,
}

impl LevelSeats {
    /// Students over seats, whole percent; zero seats yields 0
    #[must_use]
    pub fn occupancy(&self) -> f64 {
        percentage(self.students, self.capacity, 0)
    }
}

/// Seats and students per level of the filtered classes, in order of first appearance.
#[must_use]
pub fn occupancy_per_level<'a>(classes: &[ClassOccupancy<'a>]) -> Vec<GroupSum<&'a str, LevelSeats>> {
    group_sum(
        classes.iter(),
        |c| c.class.level.as_str(),
        |seats: &mut LevelSeats, c| {
            seats.students += c.students;
            seats.capacity += c.class.capacity as usize;
        },
    )
}

/// Everything the classes page shows
#[derive(Debug, Clone, PartialEq)]
pub struct ClassesPage<'a> {
    /// Active filter
    pub filter: LevelFilter,
    /// Selectable levels
    pub levels: Vec<&'a str>,
    /// Filtered classes with occupancy
    pub classes: Vec<ClassOccupancy<'a>>,
    /// Statistics over the filtered classes
    pub stats: ClassStats,
    /// Occupancy per level
    pub per_level: Vec<GroupSum<&'a str, LevelSeats>>,
    /// Teachers for the selected level
    pub teachers: Vec<&'a Teacher>,
}

/// Aggregates the classes page for `filter`.
#[must_use]
pub fn classes_page<'a>(dataset: &'a Dataset, filter: &LevelFilter) -> ClassesPage<'a> {
    let classes: Vec<ClassOccupancy<'a>> = class_occupancy(dataset)
        .into_iter()
        .filter(|c| filter.matches(Some(c.class.level.as_str())))
        .collect();
    let teachers = teachers_for(dataset, filter);
    let stats = class_stats(&classes, teachers.len());

    debug!(
        "Classes page: filter={}, classes={}, teachers={}",
        filter, stats.classes, stats.teachers
    );

    ClassesPage {
        filter: filter.clone(),
        levels: dataset.levels(),
        per_level: occupancy_per_level(&classes),
        classes,
        stats,
        teachers,
    }
}
