//! Error types for the demeter-forecast crate.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Error type for all fallible operations in the demeter-forecast crate.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// Returned when the forecast file cannot be read.
    #[error("failed to read forecast file {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the document is not valid forecast JSON.
    #[error("invalid forecast JSON: {source}")]
    Parse {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Returned when two consecutive days are out of chronological order.
    #[error("forecast days out of order: {next} follows {prev}")]
    OutOfOrder {
        /// Date of the earlier entry.
        prev: NaiveDate,
        /// Date of the entry that breaks the order.
        next: NaiveDate,
    },

    /// Returned when the same calendar day appears twice.
    #[error("duplicate forecast day: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Returned when one or more value checks fail.
    #[error("{count} forecast validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
