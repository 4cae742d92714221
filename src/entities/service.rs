//! Service entities - ancillary paid services ("servizi accessori").
//!
//! Each service keeps its own enrollment list. The three record shapes share
//! a student reference, an active flag and a monthly cost, exposed through
//! [`ServiceEnrollment`] so aggregations can treat them uniformly.

use super::Id;
use serde::{Deserialize, Serialize};

/// Common view over the three enrollment record types
pub trait ServiceEnrollment {
    /// Student the enrollment belongs to
    fn student_id(&self) -> &Id;
    /// Whether the enrollment is currently active
    fn is_active(&self) -> bool;
    /// Monthly cost in whole euros
    fn monthly_cost(&self) -> u64;
}

/// Canteen enrollment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanteenEnrollment {
    /// Enrolled student
    #[serde(rename = "studenteId")]
    pub student_id: Id,
    /// Active flag
    #[serde(rename = "attivo")]
    pub active: bool,
    /// Meals consumed in the month
    #[serde(rename = "pasti", default)]
    pub meals: u32,
    /// Monthly cost
    #[serde(rename = "costoMensile")]
    pub monthly_cost: u64,
}

/// School bus enrollment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportEnrollment {
    /// Enrolled student
    #[serde(rename = "studenteId")]
    pub student_id: Id,
    /// Active flag
    #[serde(rename = "attivo")]
    pub active: bool,
    /// Bus route name
    #[serde(rename = "tratta", default)]
    pub route: String,
    /// Monthly cost
    #[serde(rename = "costoMensile")]
    pub monthly_cost: u64,
}

/// After-school care enrollment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfterSchoolEnrollment {
    /// Enrolled student
    #[serde(rename = "studenteId")]
    pub student_id: Id,
    /// Active flag
    #[serde(rename = "attivo")]
    pub active: bool,
    /// Weekly hours booked
    #[serde(rename = "oreSett", default)]
    pub weekly_hours: u32,
    /// Monthly cost
    #[serde(rename = "costoMensile")]
    pub monthly_cost: u64,
}

macro_rules! impl_service_enrollment {
    ($($ty:ty),+) => {
        $(
            impl ServiceEnrollment for $ty {
                fn student_id(&self) -> &Id {
                    &self.student_id
                }

                fn is_active(&self) -> bool {
                    self.active
                }

                fn monthly_cost(&self) -> u64 {
                    self.monthly_cost
                }
            }
        )+
    };
}

impl_service_enrollment!(CanteenEnrollment, TransportEnrollment, AfterSchoolEnrollment);

/// Enrollment lists for every service
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Services {
    /// Canteen ("mensa")
    #[serde(rename = "mensa", default)]
    pub canteen: Vec<CanteenEnrollment>,
    /// Transport ("trasporto")
    #[serde(rename = "trasporto", default)]
    pub transport: Vec<TransportEnrollment>,
    /// After-school ("doposcuola")
    #[serde(rename = "doposcuola", default)]
    pub after_school: Vec<AfterSchoolEnrollment>,
}
