use super::{
    RenderContext,
    format::{Table, format_euro, format_progress_bar, kpi_detail, kpi_line, write_heading},
};
use crate::{
    core::{filters::ServiceKind, services::services_page, stats::ratio},
    errors::Result,
};
use std::fmt::Write;

const fn detail_header(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Canteen => "Pasti",
        ServiceKind::Transport => "Tratta",
        ServiceKind::AfterSchool => "Ore sett.",
    }
}

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = services_page(ctx.dataset, ctx.service);
    let stats = &page.stats;

    let tabs: Vec<String> = ServiceKind::ALL
        .iter()
        .map(|kind| {
            if *kind == page.tab {
                format!("[{}]", kind.label())
            } else {
                kind.label().to_string()
            }
        })
        .collect();
    writeln!(out, "Servizio: {}", tabs.join("  "))?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        kpi_detail(
            "Mensa",
            &format!("{} attivi", stats.canteen.active),
            &format!("{} pasti/mese", stats.total_meals)
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Trasporto",
            &format!("{} attivi", stats.transport.active),
            &format!("{} tratte", page.routes.len())
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Doposcuola",
            &format!("{} attivi", stats.after_school.active),
            &format!("{} ore/sett.", stats.total_after_school_hours)
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line("Ricavi mensili", &format_euro(stats.total_revenue()))
    )?;

    write_heading(out, "Ricavi per servizio")?;
    let total = stats.total_revenue();
    let mut split = Table::new(&["Servizio", "Ricavo", "Quota"]);
    for (kind, revenue) in stats.revenue_split() {
        #[allow(clippy::cast_precision_loss)] // display only
        let share = ratio(revenue as f64 * 100.0, total as f64, 1);
        split.push_row(vec![
            kind.label().to_string(),
            format_euro(revenue),
            format_progress_bar(share, Some(10)),
        ]);
    }
    split.write_to(out)?;

    if !page.routes.is_empty() {
        write_heading(out, "Utenti per tratta")?;
        let mut routes = Table::new(&["Tratta", "Utenti"]);
        for route in &page.routes {
            routes.push_row(vec![route.key.to_string(), route.count.to_string()]);
        }
        routes.write_to(out)?;
    }

    write_heading(out, &format!("Iscritti {}", page.tab.label()))?;
    let mut roster = Table::new(&["Studente", detail_header(page.tab), "Costo mensile"]);
    for row in &page.roster {
        roster.push_row(vec![
            row.student.map(|s| s.full_name()).unwrap_or_default(),
            row.detail.clone(),
            format_euro(row.monthly_cost),
        ]);
    }
    roster.write_to(out)?;

    Ok(())
}
