//! Overview page aggregations. Every figure here is global.

use super::{
    PageOptions,
    installments::{InstallmentTotals, count_due_soon, totals},
    services::{ServiceStats, service_stats},
    reports::average_attendance,
    stats::{GroupCount, count_matching, growth_percent},
    students::students_per_level,
};
use crate::entities::{Dataset, History, MonthlyEntry};
use tracing::debug;

/// Headline figures of the overview page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewStats {
    /// Active students
    pub active_students: usize,
    /// Totals over every installment
    pub installments: InstallmentTotals,
    /// Unpaid share of installments, one decimal
    pub delinquency_rate: f64,
    /// Unpaid installments due within the configured window
    pub due_soon: usize,
    /// Service counts and revenue
    pub services: ServiceStats,
}

/// Computes the overview headline figures.
#[must_use]
pub fn overview_stats(dataset: &Dataset, options: &PageOptions) -> OverviewStats {
    let installments = totals(&dataset.installments);
    OverviewStats {
        active_students: count_matching(dataset.students.iter(), |s| s.is_active()),
        installments,
        delinquency_rate: installments.delinquency_rate(),
        due_soon: count_due_soon(
            &dataset.installments,
            options.reference_date,
            options.due_window_days,
        ),
        services: service_stats(dataset),
    }
}

/// Growth from the first to the last month of a series, whole percent.
/// Fewer than two months yields `None`.
fn monthly_trend<F>(monthly: &[MonthlyEntry], value: F) -> Option<f64>
where
    F: Fn(&MonthlyEntry) -> u64,
{
    match monthly {
        [first, .., last] => Some(growth_percent(value(first), value(last), 0)),
        _ => None,
    }
}

/// Trend figures taken from the history section
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverviewTrends {
    /// Enrollment growth across the monthly series
    pub enrollment: Option<f64>,
    /// Collection growth across the monthly series
    pub collections: Option<f64>,
    /// Mean attendance across levels, whole percent
    pub average_attendance: Option<f64>,
}

/// Derives trend figures from `history`. Missing series yield `None`.
#[must_use]
pub fn overview_trends(history: &History) -> OverviewTrends {
    OverviewTrends {
        enrollment: monthly_trend(&history.monthly, |m| m.enrolled),
        collections: monthly_trend(&history.monthly, |m| m.collected),
        average_attendance: average_attendance(&history.attendance),
    }
}

/// Everything the overview page shows
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewPage<'a> {
    /// Headline figures
    pub stats: OverviewStats,
    /// Trend figures
    pub trends: OverviewTrends,
    /// Students per level, skipping students without a class
    pub per_level: Vec<GroupCount<&'a str>>,
    /// Monthly series for the trend charts
    pub monthly: &'a [MonthlyEntry],
}

/// Aggregates the overview page.
#[must_use]
pub fn overview_page<'a>(dataset: &'a Dataset, options: &PageOptions) -> OverviewPage<'a> {
    let stats = overview_stats(dataset, options);
    debug!(
        "Overview page: active students={}, unpaid={}",
        stats.active_students, stats.installments.unpaid_count
    );
    OverviewPage {
        stats,
        trends: overview_trends(&dataset.history),
        per_level: students_per_level(dataset),
        monthly: &dataset.history.monthly,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_overview_stats_sample() {
        let dataset = sample_dataset();
        let stats = overview_stats(&dataset, &PageOptions::at(reference_date()));
        assert_eq!(stats.active_students, 8);
        assert_eq!(stats.installments.paid_amount, 950);
        assert_eq!(stats.installments.unpaid_amount, 1200);
        assert_eq!(stats.installments.unpaid_count, 4);
        assert_eq!(stats.delinquency_rate, 57.1);
        assert_eq!(stats.due_soon, 2);
        assert_eq!(stats.services.canteen.active, 2);
        assert_eq!(stats.services.total_revenue(), 750);
    }

    #[test]
    fn test_overview_on_empty_dataset() {
        let dataset = empty_dataset();
        let page = overview_page(&dataset, &PageOptions::at(reference_date()));
        assert_eq!(page.stats.active_students, 0);
        assert_eq!(page.stats.delinquency_rate, 0.0);
        assert!(page.per_level.is_empty());
        assert_eq!(page.trends, OverviewTrends::default());
    }

    #[test]
    fn test_trends_from_history() {
        let dataset = sample_dataset();
        let trends = overview_trends(&dataset.history);
        assert_eq!(trends.enrollment, Some(4.0));
        assert_eq!(trends.collections, Some(-8.0));
        assert_eq!(trends.average_attendance, Some(92.0));
    }

    #[test]
    fn test_single_month_has_no_trend() {
        let mut history = sample_dataset().history;
        history.monthly.truncate(1);
        assert_eq!(overview_trends(&history).enrollment, None);
    }
}
