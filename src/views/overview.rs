use super::{
    RenderContext,
    format::{
        Table, alert_line, format_compact, format_euro, format_growth, format_percent, kpi_detail,
        kpi_line, write_heading,
    },
};
use crate::{core::overview::overview_page, errors::Result};
use std::fmt::Write;

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = overview_page(ctx.dataset, &ctx.options);
    let stats = &page.stats;
    let installments = &stats.installments;
    let services = &stats.services;

    writeln!(out, "{}", kpi_line("Studenti attivi", &stats.active_students.to_string()))?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Rette incassate",
            &format_euro(installments.paid_amount),
            &format!("{} rate", installments.paid_count),
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Rette insolute",
            &format_euro(installments.unpaid_amount),
            &format!(
                "{} rate · morosità {}",
                installments.unpaid_count,
                format_percent(stats.delinquency_rate, 1)
            ),
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Ricavi servizi mensili",
            &format_euro(services.total_revenue()),
            &format!(
                "mensa {} · trasporto {} · doposcuola {}",
                services.canteen.active, services.transport.active, services.after_school.active
            ),
        )
    )?;
    if let Some(attendance) = page.trends.average_attendance {
        writeln!(out, "{}", kpi_line("Frequenza media", &format_percent(attendance, 0)))?;
    }

    if stats.due_soon > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            alert_line(&format!(
                "{} rate in scadenza nei prossimi {} giorni",
                stats.due_soon, ctx.options.due_window_days
            ))
        )?;
    }

    write_heading(out, "Studenti per livello")?;
    let mut levels = Table::new(&["Livello", "Studenti"]);
    for group in &page.per_level {
        levels.push_row(vec![group.key.to_string(), group.count.to_string()]);
    }
    levels.write_to(out)?;

    if !page.monthly.is_empty() {
        write_heading(out, "Andamento mensile")?;
        let mut monthly = Table::new(&["Mese", "Iscritti", "Incassi"]);
        for entry in page.monthly {
            monthly.push_row(vec![
                entry.month.clone(),
                entry.enrolled.to_string(),
                format_compact(entry.collected),
            ]);
        }
        monthly.write_to(out)?;
        if let Some(enrollment) = page.trends.enrollment {
            writeln!(out, "  Iscritti: {}", format_growth(enrollment, 0))?;
        }
        if let Some(collections) = page.trends.collections {
            writeln!(out, "  Incassi:  {}", format_growth(collections, 0))?;
        }
    }

    Ok(())
}
