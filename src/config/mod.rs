//! Application configuration loaded from config.toml
//!
//! Every key is optional. A missing default config file yields the defaults,
//! while an explicitly requested file must exist. Precedence, lowest first:
//! built-in defaults, config file, `DATASET_PATH` environment variable,
//! command-line flags (applied by the binary).

/// Dataset document loading
pub mod dataset;

use crate::core::{DEFAULT_DUE_WINDOW_DAYS, DEFAULT_TABLE_ROW_LIMIT, PageOptions};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

/// Environment variable overriding `dataset_path`
pub const DATASET_PATH_ENV: &str = "DATASET_PATH";

/// Default dataset location
pub const DEFAULT_DATASET_PATH: &str = "data/dataset.json";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path of the JSON dataset
    pub dataset_path: PathBuf,
    /// "Today" for due-date arithmetic; the local date when absent
    pub reference_date: Option<NaiveDate>,
    /// Days ahead counted as "due soon"
    pub due_window_days: u32,
    /// Maximum rows in roster tables
    pub table_row_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            reference_date: None,
            due_window_days: DEFAULT_DUE_WINDOW_DAYS,
            table_row_limit: DEFAULT_TABLE_ROW_LIMIT,
        }
    }
}

impl AppConfig {
    /// Replaces `dataset_path` when an override is present and non-empty
    pub fn override_dataset_path(&mut self, path: Option<String>) {
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            debug!("Dataset path overridden: {}", path);
            self.dataset_path = PathBuf::from(path);
        }
    }

    /// Page options for this configuration, with `today` used when no
    /// reference date is configured
    #[must_use]
    pub fn page_options(&self, today: NaiveDate) -> PageOptions {
        PageOptions {
            reference_date: self.reference_date.unwrap_or(today),
            due_window_days: self.due_window_days,
            table_row_limit: self.table_row_limit,
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A key is unknown or has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads configuration from `path` when given, otherwise from
/// `DASHBOARD_CONFIG` or ./config.toml, then applies `DATASET_PATH`.
///
/// Only the implicit ./config.toml may be missing; it then yields the defaults.
///
/// # Errors
/// Returns an error if an explicitly named file is missing or any file is invalid.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    let explicit = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let mut config = match explicit {
        Some(path) => load_config(&path)?,
        None => load_default_config()?,
    };
    config.override_dataset_path(std::env::var(DATASET_PATH_ENV).ok());
    info!(
        "Configuration ready: dataset={}, due window={} days, row limit={}",
        config.dataset_path.display(),
        config.due_window_days,
        config.table_row_limit
    );
    Ok(config)
}

/// Loads configuration from the default location (./config.toml), falling
/// back to the defaults when the file does not exist
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_config(path)
    } else {
        info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
        Ok(AppConfig::default())
    }
}
