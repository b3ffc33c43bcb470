//! JSON output format.

use pacsize_estimate::{Estimate, EstimatorState};
use std::io::Write;

use crate::formatter::check_rows;
use crate::record::{Report, row_records, summary};
use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON object with `rows` and `summary`.
    #[default]
    Document,
    /// Newline-delimited JSON: one object per row, then the summary.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (document style only).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write + Send>(
        &self,
        state: &EstimatorState,
        estimate: &Estimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        check_rows(state, estimate)?;
        let rows = row_records(state, estimate);
        let summary = summary(state, estimate);

        match self.style {
            JsonStyle::Document => {
                let report = Report { rows, summary };
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &report)?;
                } else {
                    serde_json::to_writer(&mut writer, &report)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for row in &rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
                serde_json::to_writer(&mut writer, &summary)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
