//! Core aggregation logic - framework-agnostic page statistics.
//!
//! Every function here is a pure computation from the dataset snapshot plus
//! an explicit filter selection to a summary struct. Nothing is cached and
//! nothing is written back.

pub mod classes;
pub mod filters;
pub mod installments;
pub mod overview;
pub mod reports;
pub mod services;
pub mod stats;
pub mod students;

#[cfg(test)]
mod property_tests;

use chrono::NaiveDate;

/// Default window, in days, for the "due soon" installment counter
pub const DEFAULT_DUE_WINDOW_DAYS: u32 = 7;

/// Default number of rows shown in roster tables
pub const DEFAULT_TABLE_ROW_LIMIT: usize = 20;

/// Inputs shared by page aggregations that do not come from the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// "Today" for due-date arithmetic
    pub reference_date: NaiveDate,
    /// Days ahead counted as "due soon"
    pub due_window_days: u32,
    /// Maximum rows in roster tables
    pub table_row_limit: usize,
}

impl PageOptions {
    /// Options with default window and row limit at `reference_date`
    #[must_use]
    pub const fn at(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            due_window_days: DEFAULT_DUE_WINDOW_DAYS,
            table_row_limit: DEFAULT_TABLE_ROW_LIMIT,
        }
    }
}
