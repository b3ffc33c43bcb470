//! Plain-text report.

use pacsize_estimate::{COMPRESSION_RATIO, Estimate, EstimatorState, format_gb};
use pacsize_types::{RowField, Window};
use std::io::Write;

use crate::formatter::check_rows;
use crate::{FormatError, Formatter};

/// Footnote shown under multi-day projections.
pub const WORKING_WEEK_CAPTION: &str = "* Está sendo considerado 5 dias por semana";

const COLUMNS: usize = 6;

/// Text formatter producing the input table, totals and recommendation.
#[derive(Debug, Clone)]
pub struct TableFormatter {
    /// Whether to print the report title.
    title: bool,
}

impl TableFormatter {
    /// Creates a new table formatter with the title enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { title: true }
    }

    /// Sets whether to print the report title.
    #[must_use]
    pub const fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Returns the header of the size column for a window.
    #[must_use]
    pub fn size_header(window: Window) -> String {
        if window.assumes_working_week() {
            format!("{} (GB) *", window.label())
        } else {
            format!("{} (GB)", window.label())
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TableFormatter {
    fn write_report<W: Write + Send>(
        &self,
        state: &EstimatorState,
        estimate: &Estimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        check_rows(state, estimate)?;

        if self.title {
            writeln!(writer, "PACS Storage Calculator")?;
            writeln!(writer)?;
        }

        let header: [String; COLUMNS] = [
            "#".to_string(),
            RowField::Modality.label().to_string(),
            RowField::Devices.label().to_string(),
            RowField::StudiesPerDay.label().to_string(),
            RowField::StudySizeMb.label().to_string(),
            Self::size_header(state.window),
        ];
        let body: Vec<[String; COLUMNS]> = state
            .rows
            .iter()
            .zip(&estimate.per_row_gb)
            .enumerate()
            .map(|(i, (row, gb))| {
                [
                    (i + 1).to_string(),
                    row.modality.label().to_string(),
                    row.devices.to_string(),
                    row.studies_per_day.to_string(),
                    row.study_size_mb.to_string(),
                    format!("{gb:.2}"),
                ]
            })
            .collect();

        let mut widths = [0usize; COLUMNS];
        for line in std::iter::once(&header).chain(&body) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let total_width = widths.iter().sum::<usize>() + 2 * (COLUMNS - 1);

        write_line(&mut writer, &header, &widths)?;
        writeln!(writer, "{}", "-".repeat(total_width))?;
        for line in &body {
            write_line(&mut writer, line, &widths)?;
        }
        writeln!(writer)?;

        let compressed_label = format!(
            "Total com compressão {:.0}%:",
            COMPRESSION_RATIO * 100.0
        );
        let totals = [
            ("Total sem compressão:", format_gb(estimate.total_gb)),
            (compressed_label.as_str(), format_gb(estimate.compressed_gb)),
        ];
        let label_width = totals
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &totals {
            writeln!(writer, "{label:<label_width$}  {value}")?;
        }

        if state.window.assumes_working_week() {
            writeln!(writer, "{WORKING_WEEK_CAPTION}")?;
        }
        writeln!(writer)?;

        let info = [
            ("Informação", "Valor".to_string()),
            ("Tipo de unidade recomendada", estimate.tier.label().to_string()),
            (
                "Tamanho de armazenamento em TB para imagens Dicom sem compressão",
                estimate.total_tb_display(),
            ),
            (
                "Mínimo. largura de banda da rede em Mbit/s",
                estimate.bandwidth_display(),
            ),
        ];
        let info_width = info
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &info {
            writeln!(writer, "{label:<info_width$}  {value}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

fn write_line<W: Write>(
    writer: &mut W,
    cells: &[String; COLUMNS],
    widths: &[usize; COLUMNS],
) -> Result<(), FormatError> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())?;
    Ok(())
}
