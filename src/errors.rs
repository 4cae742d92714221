//! Unified error types for the dashboard.
//!
//! Only loading, parsing and user input can fail. Aggregations never return
//! errors: missing relations and empty denominators degrade silently.

use thiserror::Error;

/// All errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Dataset document could not be read or has the wrong shape
    #[error("Dataset error: {message}")]
    Dataset {
        /// Human-readable description
        message: String,
    },

    /// Path does not name one of the dashboard pages
    #[error("Unknown page: {path}")]
    UnknownPage {
        /// The path that was requested
        path: String,
    },

    /// Filter value not recognized for the given filter kind
    #[error("Invalid {kind} filter: {value}")]
    InvalidFilter {
        /// Which filter was being parsed (level, status, service)
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Writing to a text buffer failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
