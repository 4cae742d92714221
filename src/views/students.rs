use super::{
    RenderContext,
    format::{Table, format_progress_bar, kpi_detail, kpi_line, write_heading},
};
use crate::{
    core::{filters::ALL_LABEL, stats::percentage, students::students_page},
    entities::Gender,
    errors::Result,
};
use std::fmt::Write;

const fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "M",
        Gender::Female => "F",
    }
}

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = students_page(ctx.dataset, &ctx.level, &ctx.options);
    let stats = &page.stats;

    let mut options = vec![ALL_LABEL];
    options.extend(page.levels.iter().copied());
    writeln!(out, "Livello: {}  ({})", page.filter, options.join(" | "))?;
    writeln!(out)?;

    writeln!(out, "{}", kpi_line("Totale studenti", &stats.total.to_string()))?;
    writeln!(
        out,
        "{}",
        kpi_detail("Maschi", &stats.male.to_string(), &format!("{:.0}%", stats.male_share()))
    )?;
    writeln!(
        out,
        "{}",
        kpi_detail(
            "Femmine",
            &stats.female.to_string(),
            &format!("{:.0}%", stats.female_share())
        )
    )?;
    writeln!(
        out,
        "{}",
        kpi_line(
            &format!("Nuove iscrizioni {}", page.enrollment_year),
            &stats.new_enrollments.to_string()
        )
    )?;

    write_heading(out, "Studenti per classe")?;
    let mut per_class = Table::new(&["Classe", "Studenti", "Capienza", "Occupazione"]);
    for headcount in &page.per_class {
        let capacity = headcount.class.capacity as usize;
        per_class.push_row(vec![
            headcount.short_name.clone(),
            headcount.students.to_string(),
            capacity.to_string(),
            format_progress_bar(percentage(headcount.students, capacity, 0), Some(10)),
        ]);
    }
    per_class.write_to(out)?;

    write_heading(out, "Elenco studenti")?;
    let mut roster = Table::new(&["Nome", "Classe", "Livello", "Genere", "Iscrizione", "Stato"]);
    for row in &page.roster {
        let student = row.student;
        roster.push_row(vec![
            student.full_name(),
            row.class.map(|c| c.name.clone()).unwrap_or_default(),
            row.level().unwrap_or_default().to_string(),
            gender_label(student.gender).to_string(),
            student.enrollment_date.format("%d/%m/%Y").to_string(),
            student.status.label().to_string(),
        ]);
    }
    roster.write_to(out)?;
    writeln!(out, "  Mostrati {} di {}", page.roster.len(), page.total_rows)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::{PageOptions, filters::LevelFilter},
        test_utils::*,
    };

    #[test]
    fn test_students_text_all() {
        let dataset = sample_dataset();
        let ctx = RenderContext::new(&dataset, PageOptions::at(reference_date()));
        let mut out = String::new();
        render(&mut out, &ctx).unwrap();
        assert!(out.contains("Livello: Tutti  (Tutti | Infanzia | Primaria | Secondaria I)"));
        assert!(out.contains("Nuove iscrizioni 2025"));
        assert!(out.contains("Chiara Test"));
        assert!(out.contains("Mostrati 9 di 9"));
    }

    #[test]
    fn test_students_text_filtered_and_truncated() {
        let dataset = sample_dataset();
        let mut options = PageOptions::at(reference_date());
        options.table_row_limit = 2;
        let mut ctx = RenderContext::new(&dataset, options);
        ctx.level = LevelFilter::Level("Primaria".to_string());
        let mut out = String::new();
        render(&mut out, &ctx).unwrap();
        assert!(out.contains("Mostrati 2 di 4"));
        assert!(!out.contains("Chiara Test"));
        assert!(out.contains("[██████████] 100.0%"));
    }
}
