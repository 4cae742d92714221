//! Reads the JSON dataset from disk.

use crate::entities::Dataset;
use crate::errors::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Loads and parses the dataset document at `path`.
///
/// # Errors
/// Returns [`Error::Dataset`] if the file cannot be read or does not match
/// the expected document shape.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path_ref = path.as_ref();
    debug!("Attempting to load dataset from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Dataset {
        message: format!("Failed to read dataset file {}: {e}", path_ref.display()),
    })?;

    let dataset = Dataset::from_json_str(&contents)?;
    info!(
        "Loaded dataset for {}: {} students, {} classes, {} installments, {} teachers",
        dataset.school.name,
        dataset.students.len(),
        dataset.classes.len(),
        dataset.installments.len(),
        dataset.teachers.len()
    );
    Ok(dataset)
}
