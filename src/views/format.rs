//! Text formatting helpers shared by the page renderers.

use crate::errors::Result;
use std::fmt::Write;

/// Formats a whole-euro amount with Italian thousands separators, e.g. `€1.234`.
#[must_use]
pub fn format_euro(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("€{grouped}")
}

/// Formats an amount in thousands with one decimal, e.g. `€12.3k`.
/// Amounts below a thousand fall back to [`format_euro`].
#[must_use]
pub fn format_compact(amount: u64) -> String {
    if amount < 1_000 {
        return format_euro(amount);
    }
    #[allow(clippy::cast_precision_loss)] // display only
    let thousands = amount as f64 / 1_000.0;
    format!("€{thousands:.1}k")
}

/// Formats a percentage with `decimals` places, e.g. `57.1%`.
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Formats a signed growth figure, e.g. `+13%` or `-8%`.
#[must_use]
pub fn format_growth(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{value:.decimals$}%")
    } else {
        format!("{value:.decimals$}%")
    }
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based bar like `[████████░░] 80.0%`. The bar is clamped to
/// `[0, 100]`; the printed figure is not.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // clamped_progress is in [0, 100] and length is small, so the product fits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// A single KPI line: title left-aligned, value right-aligned.
#[must_use]
pub fn kpi_line(title: &str, value: &str) -> String {
    format!("  {title:<28} {value:>12}")
}

/// A KPI line followed by a detail note
#[must_use]
pub fn kpi_detail(title: &str, value: &str, detail: &str) -> String {
    format!("{}  {detail}", kpi_line(title, value))
}

/// An alert line
#[must_use]
pub fn alert_line(message: &str) -> String {
    format!("  ⚠ {message}")
}

/// Section heading with an underline
pub fn write_heading(out: &mut String, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count()))?;
    Ok(())
}

/// A fixed-width text table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_line(out: &mut String, cells: &[String], widths: &[usize]) -> Result<()> {
        write!(out, " ")?;
        for (col, width) in widths.iter().enumerate() {
            let cell = cells.get(col).map_or("", String::as_str);
            write!(out, " {cell:<width$} ")?;
            if col + 1 < widths.len() {
                write!(out, "│")?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    /// Writes the table, trimming trailing padding from each line.
    pub fn write_to(&self, out: &mut String) -> Result<()> {
        let widths = self.widths();
        let mut text = String::new();
        Self::write_line(&mut text, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        writeln!(text, " {}", rule.join("┼"))?;
        for row in &self.rows {
            Self::write_line(&mut text, row, &widths)?;
        }
        for line in text.lines() {
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
