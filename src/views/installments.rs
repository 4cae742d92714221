use super::{
    RenderContext,
    format::{
        Table, alert_line, format_euro, format_percent, format_progress_bar, kpi_detail, kpi_line,
        write_heading,
    },
};
use crate::{
    core::{installments::installments_page, stats::percentage},
    errors::Result,
};
use std::fmt::Write;

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = installments_page(ctx.dataset, ctx.payment, &ctx.options);
    let global = &page.global.totals;

    writeln!(out, "Stato: {}  (Tutti | pagata | non_pagata)", page.filter)?;
    writeln!(out)?;

    let headline = &page.headline;
    let note = if headline.filtered {
        format!("{} rate filtrate", headline.count)
    } else {
        format!("{} rate pagate", global.paid_count)
    };
    writeln!(
        out,
        "{}",
        kpi_detail(headline.title, &format_euro(headline.amount), &note)
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Importo insoluto",
            &format_euro(global.unpaid_amount),
            &format!("{} rate", global.unpaid_count)
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line("Tasso di incasso", &format_percent(page.global.collection_rate, 1))
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "In scadenza",
            &page.global.due_soon.to_string(),
            &format!("entro {} giorni", ctx.options.due_window_days)
        )
    )?;

    if page.show_unpaid_alert {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            alert_line(&format!(
                "{} rate non pagate per un totale di {}",
                global.unpaid_count,
                format_euro(global.unpaid_amount)
            ))
        )?;
    }

    write_heading(out, "Stato pagamenti")?;
    let mut split = Table::new(&["Stato", "Rate", "Quota"]);
    split.push_row(vec![
        "Pagate".to_string(),
        global.paid_count.to_string(),
        format_progress_bar(percentage(global.paid_count, global.count, 1), Some(10)),
    ]);
    split.push_row(vec![
        "Non pagate".to_string(),
        global.unpaid_count.to_string(),
        format_progress_bar(percentage(global.unpaid_count, global.count, 1), Some(10)),
    ]);
    split.write_to(out)?;

    if !page.monthly.is_empty() {
        write_heading(out, "Incassi per mese")?;
        let mut monthly = Table::new(&["Mese", "Incassato", "Da incassare"]);
        for month in &page.monthly {
            monthly.push_row(vec![
                month.key.to_string(),
                format_euro(month.total.collected),
                format_euro(month.total.outstanding),
            ]);
        }
        monthly.write_to(out)?;
    }

    write_heading(out, "Elenco rette")?;
    let mut rows = Table::new(&["Studente", "Mese", "Importo", "Scadenza", "Stato"]);
    for row in &page.rows {
        let installment = row.installment;
        rows.push_row(vec![
            row.student.map(|s| s.full_name()).unwrap_or_default(),
            installment.month.clone(),
            format_euro(installment.amount),
            installment.due_date.format("%d/%m/%Y").to_string(),
            installment.status.label().to_string(),
        ]);
    }
    rows.write_to(out)?;

    Ok(())
}
