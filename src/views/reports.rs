use super::{
    RenderContext,
    format::{
        Table, format_compact, format_growth, format_percent, format_progress_bar, kpi_line,
        write_heading,
    },
};
use crate::{core::reports::reports_page, errors::Result};
use std::fmt::Write;

const NOT_AVAILABLE: &str = "n/d";

fn or_not_available(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format)
}

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = reports_page(ctx.dataset);

    writeln!(
        out,
        "{}",
        kpi_line(
            "Crescita studenti",
            &or_not_available(page.growth.map(|g| g.students), |v| format_growth(v, 0))
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line(
            "Crescita rette",
            &or_not_available(page.growth.map(|g| g.tuition), |v| format_growth(v, 0))
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line(
            "Crescita servizi",
            &or_not_available(page.growth.map(|g| g.services), |v| format_growth(v, 0))
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line(
            "Retention",
            &or_not_available(page.retention_rate, |v| format_percent(v, 0))
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line(
            "Frequenza media",
            &or_not_available(page.average_attendance, |v| format_percent(v, 0))
        )
    )?;

    if !page.yearly.is_empty() {
        write_heading(out, "Andamento pluriennale")?;
        let mut yearly = Table::new(&["Anno", "Studenti", "Rette", "Servizi"]);
        for entry in page.yearly {
            yearly.push_row(vec![
                entry.year.clone(),
                entry.students.to_string(),
                format_compact(entry.tuition),
                format_compact(entry.services),
            ]);
        }
        yearly.write_to(out)?;
    }

    if !page.comparison.is_empty() {
        write_heading(out, "Incassi: confronto con l'anno precedente")?;
        let mut comparison = Table::new(&["Mese", "Anno corrente", "Anno precedente", "Variazione"]);
        for month in &page.comparison {
            comparison.push_row(vec![
                month.month.to_string(),
                format_compact(month.current),
                format_compact(month.previous),
                format_growth(month.change, 1),
            ]);
        }
        comparison.write_to(out)?;
    }

    if !page.attendance.is_empty() {
        write_heading(out, "Frequenza per livello")?;
        let mut attendance = Table::new(&["Livello", "Frequenza"]);
        for entry in page.attendance {
            attendance.push_row(vec![
                entry.level.clone(),
                format_progress_bar(entry.rate, Some(10)),
            ]);
        }
        attendance.write_to(out)?;
    }

    Ok(())
}
