//! Tuition installment ("rette") aggregations.
//!
//! The installments page keeps two statistic sets apart:
//!
//! * [`GlobalInstallmentStats`] always covers every installment. It feeds the
//!   outstanding-amount KPI, the collection rate, the due-soon counter, the
//!   payment status split and the unpaid alert.
//! * [`InstallmentTotals`] computed over the filtered rows feed the headline
//!   KPI and the table the user is looking at.

use super::{
    PageOptions,
    filters::PaymentFilter,
    stats::{GroupSum, count_matching, group_sum, percentage, sum_by},
};
use crate::entities::{Dataset, Installment, InstallmentStatus, Student};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Counts and amounts over a set of installments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallmentTotals {
    /// Installments in the set
    pub count: usize,
    /// Paid installments
    pub paid_count: usize,
    /// Unpaid installments
    pub unpaid_count: usize,
    /// Sum of all amounts
    pub total_amount: u64,
    /// Sum of paid amounts
    pub paid_amount: u64,
    /// Sum of unpaid amounts
    pub unpaid_amount: u64,
}

impl InstallmentTotals {
    /// Share of paid installments, one decimal; empty set yields 0.0
    #[must_use]
    pub fn collection_rate(&self) -> f64 {
        percentage(self.paid_count, self.count, 1)
    }

    /// Share of unpaid installments ("morosità"), one decimal; empty set yields 0.0
    #[must_use]
    pub fn delinquency_rate(&self) -> f64 {
        percentage(self.unpaid_count, self.count, 1)
    }
}

/// Computes counts and amounts over `installments`.
pub fn totals<'a, I>(installments: I) -> InstallmentTotals
where
    I: IntoIterator<Item = &'a Installment>,
    I::IntoIter: Clone,
{
    let installments = installments.into_iter();
    InstallmentTotals {
        count: installments.clone().count(),
        paid_count: count_matching(installments.clone(), |i| i.is_paid()),
        unpaid_count: count_matching(installments.clone(), |i| !i.is_paid()),
        total_amount: sum_by(installments.clone(), |_| true, |i| i.amount),
        paid_amount: sum_by(installments.clone(), |i| i.is_paid(), |i| i.amount),
        unpaid_amount: sum_by(installments, |i| !i.is_paid(), |i| i.amount),
    }
}

/// Unpaid installments whose due date falls within `[reference, reference + window_days]`.
pub fn count_due_soon<'a, I>(installments: I, reference: NaiveDate, window_days: u32) -> usize
where
    I: IntoIterator<Item = &'a Installment>,
{
    let horizon = reference
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    count_matching(installments, |i| {
        i.status == InstallmentStatus::Unpaid && i.due_date >= reference && i.due_date <= horizon
    })
}

/// Statistics over every installment, independent of the selected filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalInstallmentStats {
    /// Totals over every installment
    pub totals: InstallmentTotals,
    /// Paid share, one decimal
    pub collection_rate: f64,
    /// Unpaid installments due within the configured window
    pub due_soon: usize,
}

/// Computes the global installment statistics.
#[must_use]
pub fn global_stats(dataset: &Dataset, options: &PageOptions) -> GlobalInstallmentStats {
    let totals = totals(&dataset.installments);
    GlobalInstallmentStats {
        totals,
        collection_rate: totals.collection_rate(),
        due_soon: count_due_soon(
            &dataset.installments,
            options.reference_date,
            options.due_window_days,
        ),
    }
}

/// An installment joined with its student
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallmentRow<'a> {
    /// The installment
    pub installment: &'a Installment,
    /// Its student, absent when the reference dangles
    pub student: Option<&'a Student>,
}

/// Joins every installment with its student, preserving dataset order.
#[must_use]
pub fn join_students(dataset: &Dataset) -> Vec<InstallmentRow<'_>> {
    dataset
        .installments
        .iter()
        .map(|installment| InstallmentRow {
            installment,
            student: dataset.student_for(installment.student_id.as_ref()),
        })
        .collect()
}

/// Headline KPI of the installments page, chosen by the active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// KPI title
    pub title: &'static str,
    /// KPI amount
    pub amount: u64,
    /// Installments counted in the filtered set
    pub count: usize,
    /// Whether the value covers a filtered subset
    pub filtered: bool,
}

/// Picks the headline KPI: unpaid amount for the unpaid filter, paid amount otherwise.
#[must_use]
pub fn headline(filter: PaymentFilter, scoped: &InstallmentTotals) -> Headline {
    let (title, amount) = match filter {
        PaymentFilter::All => ("Totale Incassato", scoped.paid_amount),
        PaymentFilter::Paid => ("Importo Pagato", scoped.paid_amount),
        PaymentFilter::Unpaid => ("Importo Insoluto", scoped.unpaid_amount),
    };
    Headline {
        title,
        amount,
        count: scoped.count,
        filtered: filter != PaymentFilter::All,
    }
}

/// The unpaid alert is shown when anything is unpaid, unless the user is viewing paid installments.
#[must_use]
pub fn show_unpaid_alert(global: &GlobalInstallmentStats, filter: PaymentFilter) -> bool {
    global.totals.unpaid_count > 0 && filter != PaymentFilter::Paid
}

/// Collected and outstanding amounts for one month label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyAmounts {
    /// Paid amount
    pub collected: u64,
    /// Unpaid amount
    pub outstanding: u64,
}

/// Per-month collected vs outstanding amounts, in order of first appearance.
pub fn monthly_amounts<'a, I>(installments: I) -> Vec<GroupSum<&'a str, MonthlyAmounts>>
where
    I: IntoIterator<Item = &'a Installment>,
{
    group_sum(
        installments,
        |i| i.month.as_str(),
        |acc: &mut MonthlyAmounts, i| {
            if i.is_paid() {
                acc.collected += i.amount;
            } else {
                acc.outstanding += i.amount;
            }
        },
    )
}

/// Everything the installments page shows
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentsPage<'a> {
    /// Active filter
    pub filter: PaymentFilter,
    /// Statistics over every installment
    pub global: GlobalInstallmentStats,
    /// Totals over the filtered rows
    pub scoped: InstallmentTotals,
    /// Headline KPI
    pub headline: Headline,
    /// Whether to show the unpaid alert
    pub show_unpaid_alert: bool,
    /// Per-month amounts over every installment
    pub monthly: Vec<GroupSum<&'a str, MonthlyAmounts>>,
    /// Filtered rows joined with their students
    pub rows: Vec<InstallmentRow<'a>>,
}

/// Aggregates the installments page for `filter`.
#[must_use]
pub fn installments_page<'a>(
    dataset: &'a Dataset,
    filter: PaymentFilter,
    options: &PageOptions,
) -> InstallmentsPage<'a> {
    let global = global_stats(dataset, options);
    let rows: Vec<InstallmentRow<'a>> = join_students(dataset)
        .into_iter()
        .filter(|row| filter.matches(row.installment.status))
        .collect();
    let scoped = totals(rows.iter().map(|row| row.installment));

    debug!(
        "Installments page: filter={}, rows={}, global unpaid={}",
        filter, scoped.count, global.totals.unpaid_count
    );

    InstallmentsPage {
        filter,
        global,
        scoped,
        headline: headline(filter, &scoped),
        show_unpaid_alert: show_unpaid_alert(&global, filter),
        monthly: monthly_amounts(&dataset.installments),
        rows,
    }
}
