//! CSV output format.

use pacsize_estimate::{Estimate, EstimatorState};
use std::io::Write;

use crate::formatter::check_rows;
use crate::record::row_records;
use crate::{FormatError, Formatter};

/// CSV formatter: one line per input row with its projected size.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write + Send>(
        &self,
        state: &EstimatorState,
        estimate: &Estimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        check_rows(state, estimate)?;
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "modality{d}devices{d}studies_per_day{d}study_size_mb{d}size_gb_{}d",
                estimate.window_days
            )?;
        }

        for record in row_records(state, estimate) {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{:.2}",
                record.modality,
                record.devices,
                record.studies_per_day,
                record.study_size_mb,
                record.size_gb
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacsize_estimate::Session;
    use std::io::Cursor;

    fn render(formatter: &CsvFormatter) -> String {
        let session = Session::seeded();
        let mut output = Cursor::new(Vec::new());
        formatter
            .write_report(session.state(), session.estimate(), &mut output)
            .unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let result = render(&CsvFormatter::new());
        let lines: Vec<_> = result.lines().collect();

        assert_eq!(
            lines[0],
            "modality,devices,studies_per_day,study_size_mb,size_gb_365d"
        );
        assert_eq!(lines[1], "CR,1,82,15,448.95");
        assert_eq!(lines[2], "CT,1,52,600,11388.00");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_no_header() {
        let result = render(&CsvFormatter::new().with_header(false));
        assert!(!result.contains("modality,devices"));
        assert_eq!(result.lines().count(), 3);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let result = render(&formatter);
        assert!(result.contains("modality\tdevices\tstudies_per_day"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
