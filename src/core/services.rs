//! Ancillary services aggregations (canteen, transport, after-school).
//!
//! Service statistics are always global; the selected tab only decides which
//! roster is listed. Revenue sums the monthly cost of every enrollment record,
//! active or not, while counts and rosters only consider active enrollments.

use super::{
    filters::ServiceKind,
    stats::{GroupCount, count_matching, group_count, sum_by},
};
use crate::entities::{Dataset, Id, Student, service::ServiceEnrollment};
use tracing::debug;

/// Active count and revenue of one service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceSummary {
    /// Active enrollments
    pub active: usize,
    /// Monthly revenue over every enrollment record
    pub revenue: u64,
}

/// Summarizes a list of enrollments of any service.
#[must_use]
pub fn summarize<E: ServiceEnrollment>(enrollments: &[E]) -> ServiceSummary {
    ServiceSummary {
        active: count_matching(enrollments.iter(), |e| e.is_active()),
        revenue: sum_by(enrollments.iter(), |_| true, |e| e.monthly_cost()),
    }
}

/// Statistics over every service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceStats {
    /// Canteen summary
    pub canteen: ServiceSummary,
    /// Transport summary
    pub transport: ServiceSummary,
    /// After-school summary
    pub after_school: ServiceSummary,
    /// Meals across every canteen record
    pub total_meals: u64,
    /// Weekly hours across every after-school record
    pub total_after_school_hours: u64,
}

impl ServiceStats {
    /// Summary of one service
    #[must_use]
    pub const fn summary(&self, kind: ServiceKind) -> ServiceSummary {
        match kind {
            ServiceKind::Canteen => self.canteen,
            ServiceKind::Transport => self.transport,
            ServiceKind::AfterSchool => self.after_school,
        }
    }

    /// Monthly revenue of all services combined
    #[must_use]
    pub const fn total_revenue(&self) -> u64 {
        self.canteen.revenue + self.transport.revenue + self.after_school.revenue
    }

    /// Revenue per service in display order
    #[must_use]
    pub fn revenue_split(&self) -> Vec<(ServiceKind, u64)> {
        ServiceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.summary(kind).revenue))
            .collect()
    }
}

/// Computes statistics for every service.
#[must_use]
pub fn service_stats(dataset: &Dataset) -> ServiceStats {
    let services = &dataset.services;
    ServiceStats {
        canteen: summarize(&services.canteen),
        transport: summarize(&services.transport),
        after_school: summarize(&services.after_school),
        total_meals: sum_by(services.canteen.iter(), |_| true, |c| u64::from(c.meals)),
        total_after_school_hours: sum_by(
            services.after_school.iter(),
            |_| true,
            |a| u64::from(a.weekly_hours),
        ),
    }
}

/// Active transport riders per route, in order of first appearance.
#[must_use]
pub fn riders_per_route(dataset: &Dataset) -> Vec<GroupCount<&str>> {
    group_count(
        dataset.services.transport.iter().filter(|t| t.active),
        |t| t.route.as_str(),
    )
}

/// One active enrollment joined with its student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow<'a> {
    /// Enrolled student id
    pub student_id: &'a Id,
    /// Joined student, absent when the reference dangles
    pub student: Option<&'a Student>,
    /// Service-specific column: meals, route or weekly hours
    pub detail: String,
    /// Monthly cost
    pub monthly_cost: u64,
}

fn roster_of<'a, E, D>(dataset: &'a Dataset, enrollments: &'a [E], detail: D) -> Vec<RosterRow<'a>>
where
    E: ServiceEnrollment,
    D: Fn(&E) -> String,
{
    enrollments
        .iter()
        .filter(|e| e.is_active())
        .map(|e| RosterRow {
            student_id: e.student_id(),
            student: dataset.student_for(Some(e.student_id())),
            detail: detail(e),
            monthly_cost: e.monthly_cost(),
        })
        .collect()
}

/// Active enrollments of `kind` joined with their students, in dataset order.
#[must_use]
pub fn roster(dataset: &Dataset, kind: ServiceKind) -> Vec<RosterRow<'_>> {
    let services = &dataset.services;
    match kind {
        ServiceKind::Canteen => roster_of(dataset, &services.canteen, |c| c.meals.to_string()),
        ServiceKind::Transport => roster_of(dataset, &services.transport, |t| t.route.clone()),
        ServiceKind::AfterSchool => roster_of(dataset, &services.after_school, |a| {
            format!("{}h", a.weekly_hours)
        }),
    }
}

/// Everything the services page shows
#[derive(Debug, Clone, PartialEq)]
pub struct ServicesPage<'a> {
    /// Selected tab
    pub tab: ServiceKind,
    /// Statistics over every service
    pub stats: ServiceStats,
    /// Active riders per route
    pub routes: Vec<GroupCount<&'a str>>,
    /// Roster of the selected tab
    pub roster: Vec<RosterRow<'a>>,
}

/// Aggregates the services page with `tab` selected.
#[must_use]
pub fn services_page(dataset: &Dataset, tab: ServiceKind) -> ServicesPage<'_> {
    let stats = service_stats(dataset);
    let roster = roster(dataset, tab);
    debug!(
        "Services page: tab={}, roster={}, revenue={}",
        tab,
        roster.len(),
        stats.total_revenue()
    );
    ServicesPage {
        tab,
        stats,
        routes: riders_per_route(dataset),
        roster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_service_stats_sample() {
        let dataset = sample_dataset();
        let stats = service_stats(&dataset);
        assert_eq!(stats.canteen, ServiceSummary { active: 2, revenue: 270 });
        assert_eq!(stats.transport, ServiceSummary { active: 3, revenue: 230 });
        assert_eq!(stats.after_school, ServiceSummary { active: 3, revenue: 250 });
        assert_eq!(stats.total_meals, 43);
        assert_eq!(stats.total_after_school_hours, 20);
        assert_eq!(stats.total_revenue(), 750);
    }

    #[test]
    fn test_revenue_split_order() {
        let stats = service_stats(&sample_dataset());
        assert_eq!(
            stats.revenue_split(),
            vec![
                (ServiceKind::Canteen, 270),
                (ServiceKind::Transport, 230),
                (ServiceKind::AfterSchool, 250),
            ]
        );
    }

    #[test]
    fn test_riders_per_route_counts_active_only() {
        let dataset = sample_dataset();
        let routes: Vec<(&str, usize)> = riders_per_route(&dataset)
            .iter()
            .map(|g| (g.key, g.count))
            .collect();
        assert_eq!(routes, vec![("Linea Nord", 2), ("Linea Sud", 1)]);
    }

    #[test]
    fn test_roster_joins_students_and_tolerates_dangling() {
        let dataset = sample_dataset();
        let rows = roster(&dataset, ServiceKind::AfterSchool);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].detail, "10h");
        assert_eq!(rows[0].student.map(|s| s.name.as_str()), Some("Marco"));
        assert!(rows[2].student.is_none());
    }

    #[test]
    fn test_canteen_roster_excludes_inactive() {
        let dataset = sample_dataset();
        let page = services_page(&dataset, ServiceKind::Canteen);
        assert_eq!(page.roster.len(), 2);
        assert_eq!(page.roster[1].detail, "20");
    }

    #[test]
    fn test_empty_services() {
        let stats = service_stats(&empty_dataset());
        assert_eq!(stats, ServiceStats::default());
        assert!(riders_per_route(&empty_dataset()).is_empty());
    }
}
