//! Error types for pacsize.

use thiserror::Error;

/// Result type alias for pacsize operations.
pub type Result<T> = std::result::Result<T, PacsizeError>;

/// Errors that can occur while building or loading an estimate.
#[derive(Error, Debug)]
pub enum PacsizeError {
    /// A field edit was rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A window outside the presets was requested.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// A scenario had no rows.
    #[error("Scenario must contain at least one row")]
    EmptyScenario,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rejected row edit. The row keeps its previous value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The value is not a non-negative integer.
    #[error("Invalid number '{value}': expected a non-negative integer")]
    NotANumber {
        /// The rejected input.
        value: String,
    },

    /// The modality is not in the closed set.
    #[error("Unknown modality '{0}'")]
    UnknownModality(String),

    /// The field name is not recognised.
    #[error("Unknown field '{0}', expected one of: modality, devices, studies, size")]
    UnknownField(String),

    /// No row exists at this position.
    #[error("Row {index} does not exist (table has {len} rows)")]
    RowOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of rows in the table.
        len: usize,
    },

    /// A study size that is negative, NaN or infinite.
    #[error("Invalid study size {0}: expected a finite non-negative number")]
    InvalidStudySize(f64),
}

/// Error for day counts outside the window presets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The day count is not one of 1, 31, 180, 365, 1095, 1825.
    #[error("Invalid window: {0} days is not a preset (1, 31, 180, 365, 1095, 1825)")]
    NotAPreset(u32),

    /// The window name could not be parsed.
    #[error("Unrecognized window '{0}'")]
    Unrecognized(String),
}
