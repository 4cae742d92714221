//! Installment entity - one monthly tuition payment ("retta") owed by a student.

use super::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment status of an installment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallmentStatus {
    /// Settled
    #[serde(rename = "pagata")]
    Paid,
    /// Still outstanding
    #[serde(rename = "non_pagata")]
    Unpaid,
}

impl InstallmentStatus {
    /// Label used in tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Pagata",
            Self::Unpaid => "Non pagata",
        }
    }
}

/// Installment record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Unique identifier
    pub id: Id,
    /// Student who owes the installment; may be absent or dangle
    #[serde(rename = "studenteId", default)]
    pub student_id: Option<Id>,
    /// Month label (e.g. "Gennaio")
    #[serde(rename = "mese")]
    pub month: String,
    /// Amount in whole euros
    #[serde(rename = "importo")]
    pub amount: u64,
    /// Due date
    #[serde(rename = "scadenza")]
    pub due_date: NaiveDate,
    /// Payment status
    #[serde(rename = "stato")]
    pub status: InstallmentStatus,
}

impl Installment {
    /// Whether the installment has been settled
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }
}
