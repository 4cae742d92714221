//! Filter selections that scope page aggregations.
//!
//! A filter is always passed explicitly into the aggregation that uses it;
//! pages never share filter state. Every filter parses from its Italian
//! label as well as an English alias.

use crate::entities::InstallmentStatus;
use crate::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Label of the "no filter" option
pub const ALL_LABEL: &str = "Tutti";

/// Education-level filter for the students and classes pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Every level
    #[default]
    All,
    /// A single level, matched exactly against `Class::level`
    Level(String),
}

impl LevelFilter {
    /// Whether a record at `level` passes the filter.
    ///
    /// `None` stands for a record whose class could not be resolved: it
    /// passes `All` and fails every specific level.
    #[must_use]
    pub fn matches(&self, level: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Level(wanted) => level == Some(wanted.as_str()),
        }
    }

    /// Whether the filter is `All`
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for LevelFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(ALL_LABEL)
            || trimmed.eq_ignore_ascii_case("all")
        {
            Ok(Self::All)
        } else {
            Ok(Self::Level(trimmed.to_string()))
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Level(level) => f.write_str(level),
        }
    }
}

/// Payment-status filter for the installments page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    /// Every installment
    #[default]
    All,
    /// Paid installments only
    Paid,
    /// Unpaid installments only
    Unpaid,
}

impl PaymentFilter {
    /// Whether an installment with `status` passes the filter
    #[must_use]
    pub fn matches(self, status: InstallmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Paid => status == InstallmentStatus::Paid,
            Self::Unpaid => status == InstallmentStatus::Unpaid,
        }
    }
}

impl FromStr for PaymentFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "tutti" | "all" => Ok(Self::All),
            "pagata" | "pagate" | "paid" => Ok(Self::Paid),
            "non_pagata" | "non_pagate" | "unpaid" => Ok(Self::Unpaid),
            _ => Err(Error::InvalidFilter {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => ALL_LABEL,
            Self::Paid => "pagata",
            Self::Unpaid => "non_pagata",
        })
    }
}

/// Ancillary service, used as the services page tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// Canteen ("mensa")
    #[default]
    Canteen,
    /// School bus ("trasporto")
    Transport,
    /// After-school care ("doposcuola")
    AfterSchool,
}

impl ServiceKind {
    /// Every service in display order
    pub const ALL: [Self; 3] = [Self::Canteen, Self::Transport, Self::AfterSchool];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Canteen => "Mensa",
            Self::Transport => "Trasporto",
            Self::AfterSchool => "Doposcuola",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mensa" | "canteen" => Ok(Self::Canteen),
            "trasporto" | "transport" => Ok(Self::Transport),
            "doposcuola" | "after-school" | "afterschool" | "after_school" => Ok(Self::AfterSchool),
            _ => Err(Error::InvalidFilter {
                kind: "service",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
