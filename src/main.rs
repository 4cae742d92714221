use clap::Parser;
use dotenvy::dotenv;
use school_dashboard::{
    config::{self, dataset::load_dataset},
    core::filters::{LevelFilter, PaymentFilter, ServiceKind},
    errors::Result,
    views::{self, Page, RenderContext},
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Text dashboard over a school's administrative records
#[derive(Debug, Parser)]
#[command(name = "school-dashboard", version)]
struct Cli {
    /// Page to render: /, /studenti, /rette, /servizi, /classi, /reportistica
    #[arg(default_value = "/")]
    page: Page,

    /// Level filter for /studenti and /classi
    #[arg(long)]
    level: Option<LevelFilter>,

    /// Payment status filter for /rette: pagata or non_pagata
    #[arg(long)]
    status: Option<PaymentFilter>,

    /// Services tab for /servizi: mensa, trasporto or doposcuola
    #[arg(long)]
    service: Option<ServiceKind>,

    /// Config file (defaults to ./config.toml)
    #[arg(long, env = config::CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Dataset file, overriding config and environment
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Reference date for due-date arithmetic (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<chrono::NaiveDate>,
}

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible), logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, env vars can be set externally too
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Configuration, with command-line flags taking precedence
    let mut app_config = config::load_app_config(cli.config.as_deref())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    if let Some(path) = cli.dataset {
        app_config.dataset_path = path;
    }
    if let Some(date) = cli.reference_date {
        app_config.reference_date = Some(date);
    }

    // 4. Dataset snapshot
    let dataset = load_dataset(&app_config.dataset_path)
        .inspect_err(|e| error!("Failed to load dataset: {}", e))?;

    // 5. Render the requested page
    let today = chrono::Local::now().date_naive();
    let mut ctx = RenderContext::new(&dataset, app_config.page_options(today));
    if let Some(level) = cli.level {
        ctx.level = level;
    }
    if let Some(status) = cli.status {
        ctx.payment = status;
    }
    if let Some(service) = cli.service {
        ctx.service = service;
    }

    info!(
        "Rendering {} at reference date {}",
        cli.page, ctx.options.reference_date
    );
    let text = views::render(cli.page, &ctx)?;
    print!("{text}");

    Ok(())
}
