//! Input state and scenario files.

use std::path::Path;

use pacsize_types::{Modality, PacsizeError, Result, Row, Window};
use serde::{Deserialize, Serialize};

/// Rows every new session starts with.
pub const SEED_ROWS: [Row; 3] = [
    Row::new(Modality::Cr, 1, 82, 15.0),
    Row::new(Modality::Ct, 1, 52, 600.0),
    Row::new(Modality::Mr, 1, 14, 250.0),
];

/// The complete input of an estimate: the row table and the window.
///
/// Serialized form:
///
/// ```json
/// {"window_days": 365, "rows": [{"modality": "CT", "devices": 1, "studies_per_day": 52, "study_size_mb": 600}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorState {
    /// Projection window.
    #[serde(rename = "window_days", default)]
    pub window: Window,
    /// Rows in display order.
    pub rows: Vec<Row>,
}

impl EstimatorState {
    /// Creates a state from rows and a window.
    #[must_use]
    pub const fn new(rows: Vec<Row>, window: Window) -> Self {
        Self { window, rows }
    }

    /// Returns the seeded example state over one year.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(SEED_ROWS.to_vec(), Window::default())
    }

    /// Parses a scenario from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, the window is not a preset,
    /// or the rows fail [`EstimatorState::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    /// Reads a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid scenario.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the state as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that there is at least one row and every row is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`PacsizeError::EmptyScenario`] or the first row error.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(PacsizeError::EmptyScenario);
        }
        for row in &self.rows {
            row.validate()?;
        }
        Ok(())
    }
}

impl Default for EstimatorState {
    fn default() -> Self {
        Self::seed()
    }
}
