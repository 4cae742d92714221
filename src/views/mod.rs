//! Presentation layer - navigation between pages and plain-text rendering.
//!
//! Each page module turns the summary struct computed in [`crate::core`] into
//! text. Renderers only format; every figure comes from the aggregation layer.

pub mod format;

mod classes;
mod installments;
mod overview;
mod reports;
mod services;
mod students;

use crate::{
    core::{
        PageOptions,
        filters::{LevelFilter, PaymentFilter, ServiceKind},
    },
    entities::Dataset,
    errors::{Error, Result},
};
use std::fmt::{self, Write};
use std::str::FromStr;
use tracing::debug;

/// The six dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Global KPIs
    #[default]
    Overview,
    /// Student registry
    Students,
    /// Tuition installments
    Installments,
    /// Ancillary services
    Services,
    /// Classes and teaching staff
    Classes,
    /// Multi-year reports
    Reports,
}

impl Page {
    /// Every page in navigation order
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Students,
        Self::Installments,
        Self::Services,
        Self::Classes,
        Self::Reports,
    ];

    /// Resolves a navigation path to a page.
    ///
    /// Accepts the canonical paths with or without the leading slash, plus
    /// English aliases.
    ///
    /// # Errors
    /// Returns [`Error::UnknownPage`] for any other path.
    pub fn from_path(path: &str) -> Result<Self> {
        let normalized = path.trim().trim_matches('/').to_lowercase();
        match normalized.as_str() {
            "" | "overview" | "panoramica" => Ok(Self::Overview),
            "studenti" | "students" => Ok(Self::Students),
            "rette" | "tuition" | "installments" => Ok(Self::Installments),
            "servizi" | "services" => Ok(Self::Services),
            "classi" | "classes" => Ok(Self::Classes),
            "reportistica" | "reports" => Ok(Self::Reports),
            _ => Err(Error::UnknownPage {
                path: path.to_string(),
            }),
        }
    }

    /// Canonical navigation path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Students => "/studenti",
            Self::Installments => "/rette",
            Self::Services => "/servizi",
            Self::Classes => "/classi",
            Self::Reports => "/reportistica",
        }
    }

    /// Page title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Panoramica",
            Self::Students => "Studenti",
            Self::Installments => "Rette",
            Self::Services => "Servizi",
            Self::Classes => "Classi",
            Self::Reports => "Reportistica",
        }
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Everything a renderer needs: the dataset plus the user's selections
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Dataset snapshot
    pub dataset: &'a Dataset,
    /// Reference date, due window and row limit
    pub options: PageOptions,
    /// Level filter for the students and classes pages
    pub level: LevelFilter,
    /// Status filter for the installments page
    pub payment: PaymentFilter,
    /// Selected tab of the services page
    pub service: ServiceKind,
}

impl<'a> RenderContext<'a> {
    /// Context with every filter at its default
    #[must_use]
    pub fn new(dataset: &'a Dataset, options: PageOptions) -> Self {
        Self {
            dataset,
            options,
            level: LevelFilter::All,
            payment: PaymentFilter::All,
            service: ServiceKind::default(),
        }
    }
}

fn write_header(out: &mut String, page: Page, ctx: &RenderContext<'_>) -> Result<()> {
    let school = &ctx.dataset.school;
    if school.city.is_empty() {
        writeln!(out, "{} · a.s. {}", school.name, school.academic_year)?;
    } else {
        writeln!(
            out,
            "{} ({}) · a.s. {}",
            school.name, school.city, school.academic_year
        )?;
    }
    let nav: Vec<String> = Page::ALL
        .iter()
        .map(|p| {
            if *p == page {
                format!("[{}]", p.title())
            } else {
                p.title().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", nav.join("  "))?;
    writeln!(out)?;
    writeln!(out, "══ {} ══", page.title())?;
    Ok(())
}

/// Renders `page` as text.
///
/// # Errors
/// Only fails if writing to the output buffer fails.
pub fn render(page: Page, ctx: &RenderContext<'_>) -> Result<String> {
    debug!("Rendering page {}", page);
    let mut out = String::new();
    write_header(&mut out, page, ctx)?;
    match page {
        Page::Overview => overview::render(&mut out, ctx)?,
        Page::Students => students::render(&mut out, ctx)?,
        Page::Installments => installments::render(&mut out, ctx)?,
        Page::Services => services::render(&mut out, ctx)?,
        Page::Classes => classes::render(&mut out, ctx)?,
        Page::Reports => reports::render(&mut out, ctx)?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/").unwrap(), Page::Overview);
        assert_eq!(Page::from_path("/studenti").unwrap(), Page::Students);
        assert_eq!(Page::from_path("/rette").unwrap(), Page::Installments);
        assert_eq!(Page::from_path("/servizi").unwrap(), Page::Services);
        assert_eq!(Page::from_path("/classi").unwrap(), Page::Classes);
        assert_eq!(Page::from_path("/reportistica").unwrap(), Page::Reports);
        assert_eq!(Page::from_path("classes/").unwrap(), Page::Classes);
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let err = Page::from_path("/bilancio").unwrap_err();
        assert!(matches!(err, Error::UnknownPage { ref path } if path == "/bilancio"));
    }

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()).unwrap(), page);
        }
    }

    #[test]
    fn test_render_every_page_on_sample() {
        let dataset = sample_dataset();
        let ctx = RenderContext::new(&dataset, PageOptions::at(reference_date()));
        for page in Page::ALL {
            let text = render(page, &ctx).unwrap();
            assert!(text.starts_with("Scuola Test (Milano) · a.s. 2025/2026"));
            assert!(text.contains(&format!("══ {} ══", page.title())));
        }
    }

    #[test]
    fn test_render_every_page_on_empty_dataset() {
        let dataset = empty_dataset();
        let ctx = RenderContext::new(&dataset, PageOptions::at(reference_date()));
        for page in Page::ALL {
            assert!(render(page, &ctx).is_ok());
        }
    }
}
