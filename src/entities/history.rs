//! Historical series used by the overview and reporting pages.
//!
//! These figures are not derivable from the current snapshot (past years,
//! attendance registers), so they travel with the dataset as plain series.
//! Every list defaults to empty when the document omits it.

use serde::{Deserialize, Serialize};

/// One academic year of the multi-year trend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyEntry {
    /// Academic year label (e.g. "24/25")
    #[serde(rename = "anno")]
    pub year: String,
    /// Enrolled students
    #[serde(rename = "studenti")]
    pub students: u64,
    /// Tuition revenue
    #[serde(rename = "rette")]
    pub tuition: u64,
    /// Services revenue
    #[serde(rename = "servizi")]
    pub services: u64,
}

/// One month of the current academic year
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    /// Month label (e.g. "Set")
    #[serde(rename = "mese")]
    pub month: String,
    /// Enrolled students at month end
    #[serde(rename = "iscritti")]
    pub enrolled: u64,
    /// Amount collected in the month
    #[serde(rename = "incassi")]
    pub collected: u64,
    /// Amount collected in the same month of the previous year
    #[serde(rename = "incassiAnnoPrecedente", default)]
    pub previous_year_collected: Option<u64>,
}

/// Attendance rate for one level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Level label
    #[serde(rename = "livello")]
    pub level: String,
    /// Attendance percentage (0-100)
    #[serde(rename = "frequenza")]
    pub rate: f64,
}

/// Historical section of the dataset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Multi-year trend, oldest first
    #[serde(rename = "annuale", default)]
    pub yearly: Vec<YearlyEntry>,
    /// Current-year monthly series, chronological
    #[serde(rename = "mensile", default)]
    pub monthly: Vec<MonthlyEntry>,
    /// Attendance per level
    #[serde(rename = "frequenzaPerLivello", default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Re-enrollment rate (0-100)
    #[serde(rename = "retention", default)]
    pub retention_rate: Option<f64>,
}
