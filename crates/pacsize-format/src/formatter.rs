//! Output format abstraction.

use pacsize_estimate::{Estimate, EstimatorState};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Table,
    /// Single JSON document.
    Json,
    /// Newline-delimited JSON: one line per row, then a summary line.
    Ndjson,
    /// Per-row CSV breakdown.
    Csv,
    /// Per-row tab-separated breakdown.
    Tsv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Json, Self::Ndjson, Self::Csv, Self::Tsv]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            _ => write!(f, "{}", self.extension()),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" | "txt" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// The estimate does not belong to the state it is reported with.
    #[error("Estimate covers {estimate} rows but the table has {rows}")]
    RowMismatch {
        /// Rows in the input table.
        rows: usize,
        /// Rows in the estimate.
        estimate: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes the input table and its estimate to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the estimate does not match the
    /// table.
    fn write_report<W: Write + Send>(
        &self,
        state: &EstimatorState,
        estimate: &Estimate,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Fails if `estimate` was not derived from a table of this length.
pub(crate) fn check_rows(state: &EstimatorState, estimate: &Estimate) -> Result<(), FormatError> {
    if state.rows.len() == estimate.per_row_gb.len() {
        Ok(())
    } else {
        Err(FormatError::RowMismatch {
            rows: state.rows.len(),
            estimate: estimate.per_row_gb.len(),
        })
    }
}
