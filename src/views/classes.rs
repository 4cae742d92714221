use super::{
    RenderContext,
    format::{Table, format_percent, format_progress_bar, kpi_line, write_heading},
};
use crate::{
    core::{classes::classes_page, filters::ALL_LABEL},
    errors::Result,
};
use std::fmt::Write;

pub(super) fn render(out: &mut String, ctx: &RenderContext<'_>) -> Result<()> {
    let page = classes_page(ctx.dataset, &ctx.level);
    let stats = &page.stats;

    let mut options = vec![ALL_LABEL];
    options.extend(page.levels.iter().copied());
    writeln!(out, "Livello: {}  ({})", page.filter, options.join(" | "))?;
    writeln!(out)?;

    writeln!(out, "{}", kpi_line("Classi", &stats.classes.to_string()))?;
    writeln!(out, "{}", kpi_line("Posti totali", &stats.capacity.to_string()))?;
    writeln!(out, "{}", kpi_line("Studenti", &stats.students.to_string()))?;
    writeln!(
        out,
        "{}",
        kpi_line("Occupazione media", &format_percent(stats.average_occupancy, 0))
    )?;
    writeln!(out, "{}", kpi_line("Docenti", &stats.teachers.to_string()))?;
    writeln!(
        out,
        "{}",
        kpi_line("Studenti per docente", &format!("{:.1}", stats.students_per_teacher))
    )?;

    write_heading(out, "Classi")?;
    let mut classes = Table::new(&["Classe", "Livello", "Aula", "Studenti", "Occupazione", "Stato"]);
    for entry in &page.classes {
        let class = entry.class;
        classes.push_row(vec![
            class.name.clone(),
            class.level.clone(),
            class.room_id.as_ref().map(ToString::to_string).unwrap_or_default(),
            format!("{}/{}", entry.students, class.capacity),
            format_progress_bar(entry.occupancy, Some(10)),
            entry.band.label().to_string(),
        ]);
    }
    classes.write_to(out)?;

    if !page.per_level.is_empty() {
        write_heading(out, "Occupazione per livello")?;
        let mut levels = Table::new(&["Livello", "Studenti", "Posti", "Occupazione"]);
        for level in &page.per_level {
            levels.push_row(vec![
                level.key.to_string(),
                level.total.students.to_string(),
                level.total.capacity.to_string(),
                format_percent(level.total.occupancy(), 0),
            ]);
        }
        levels.write_to(out)?;
    }

    write_heading(out, "Corpo docente")?;
    let mut teachers = Table::new(&["", "Nome", "Materia", "Livello", "Ore sett."]);
    for teacher in &page.teachers {
        teachers.push_row(vec![
            teacher.initials(),
            teacher.name.clone(),
            teacher.subject.clone(),
            teacher.level.label().to_string(),
            teacher.weekly_hours.to_string(),
        ]);
    }
    teachers.write_to(out)?;

    Ok(())
}
