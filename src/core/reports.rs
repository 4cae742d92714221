//! Multi-year reporting figures derived from the history section.

use super::stats::{growth_percent, mean};
use crate::entities::{AttendanceEntry, Dataset, History, YearlyEntry};
use tracing::debug;

/// Growth between the first and last academic year of the series
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrowthFigures {
    /// Student headcount growth, whole percent
    pub students: f64,
    /// Tuition revenue growth, whole percent
    pub tuition: f64,
    /// Services revenue growth, whole percent
    pub services: f64,
}

/// Computes first-to-last growth over `yearly`. Fewer than two years yields `None`.
#[must_use]
pub fn growth(yearly: &[YearlyEntry]) -> Option<GrowthFigures> {
    match yearly {
        [first, .., last] => Some(GrowthFigures {
            students: growth_percent(first.students, last.students, 0),
            tuition: growth_percent(first.tuition, last.tuition, 0),
            services: growth_percent(first.services, last.services, 0),
        }),
        _ => None,
    }
}

/// One month of the year-over-year collections comparison
#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparison<'a> {
    /// Month label
    pub month: &'a str,
    /// Collected this year
    pub current: u64,
    /// Collected in the same month last year
    pub previous: u64,
    /// Change against last year, one decimal
    pub change: f64,
}

/// Months that carry last year's figure, in series order.
#[must_use]
pub fn year_over_year(history: &History) -> Vec<MonthComparison<'_>> {
    history
        .monthly
        .iter()
        .filter_map(|entry| {
            entry.previous_year_collected.map(|previous| MonthComparison {
                month: entry.month.as_str(),
                current: entry.collected,
                previous,
                change: growth_percent(previous, entry.collected, 1),
            })
        })
        .collect()
}

/// Mean attendance across levels, whole percent. No entries yields `None`.
#[must_use]
pub fn average_attendance(attendance: &[AttendanceEntry]) -> Option<f64> {
    let rates: Vec<f64> = attendance.iter().map(|a| a.rate).collect();
    (!rates.is_empty()).then(|| mean(&rates, 0))
}

/// Everything the reports page shows
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsPage<'a> {
    /// First-to-last growth
    pub growth: Option<GrowthFigures>,
    /// Retention rate, when known
    pub retention_rate: Option<f64>,
    /// Mean attendance across levels
    pub average_attendance: Option<f64>,
    /// Per-year series
    pub yearly: &'a [YearlyEntry],
    /// Year-over-year collections
    pub comparison: Vec<MonthComparison<'a>>,
    /// Attendance per level
    pub attendance: &'a [AttendanceEntry],
}

/// Aggregates the reports page.
#[must_use]
pub fn reports_page(dataset: &Dataset) -> ReportsPage<'_> {
    let history = &dataset.history;
    debug!(
        "Reports page: years={}, months={}",
        history.yearly.len(),
        history.monthly.len()
    );
    ReportsPage {
        growth: growth(&history.yearly),
        retention_rate: history.retention_rate,
        average_attendance: average_attendance(&history.attendance),
        yearly: &history.yearly,
        comparison: year_over_year(history),
        attendance: &history.attendance,
    }
}
