//! Session construction and report output for the pacsize CLI.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use pacsize_lib::prelude::*;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Output format for reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
    Ndjson,
    Csv,
    Tsv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Csv => Self::Csv,
            Format::Tsv => Self::Tsv,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// Write the session's table and estimate in the given format.
pub(crate) fn write_report<W: Write + Send>(
    session: &Session,
    format: Format,
    pretty: bool,
    writer: W,
) -> Result<()> {
    let state = session.state();
    let estimate = session.estimate();

    match format {
        Format::Table => TableFormatter::new().write_report(state, estimate, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_report(state, estimate, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_report(state, estimate, writer)?,
        Format::Csv => CsvFormatter::new().write_report(state, estimate, writer)?,
        Format::Tsv => CsvFormatter::tsv().write_report(state, estimate, writer)?,
    }

    Ok(())
}

/// Parse a `MODALITY:DEVICES:STUDIES:SIZE_MB` row argument.
///
/// The modality may be left empty (`:1:0:0`).
pub(crate) fn parse_row(spec: &str) -> Result<Row> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [modality, devices, studies, size] = parts.as_slice() else {
        bail!("Invalid row '{spec}'. Expected MODALITY:DEVICES:STUDIES:SIZE_MB, e.g. CT:1:52:600");
    };

    let modality: Modality = modality
        .parse()
        .with_context(|| format!("Invalid row '{spec}'"))?;
    let devices: u32 = devices
        .trim()
        .parse()
        .with_context(|| format!("Invalid device count in row '{spec}'"))?;
    let studies_per_day: u32 = studies
        .trim()
        .parse()
        .with_context(|| format!("Invalid studies per day in row '{spec}'"))?;
    let study_size_mb: f64 = size
        .trim()
        .parse()
        .with_context(|| format!("Invalid study size in row '{spec}'"))?;

    let row = Row::new(modality, devices, studies_per_day, study_size_mb);
    row.validate()
        .with_context(|| format!("Invalid row '{spec}'"))?;
    Ok(row)
}

/// Build a session from an optional scenario file, explicit rows and window.
///
/// Explicit rows replace the scenario's (or the seed's) rows; an explicit
/// window replaces its window.
pub(crate) fn build_session(
    scenario: Option<&Path>,
    rows: &[String],
    window: Option<&str>,
) -> Result<Session> {
    let mut state = match scenario {
        Some(path) => EstimatorState::from_path(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => EstimatorState::seed(),
    };

    if !rows.is_empty() {
        state.rows = rows
            .iter()
            .map(|spec| parse_row(spec))
            .collect::<Result<_>>()?;
    }

    if let Some(window) = window {
        state.window = window.parse::<Window>()?;
    }

    let session = Session::new(state)?;
    info!(
        rows = session.len(),
        window_days = session.window().days(),
        "session ready"
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row("CT:1:52:600").unwrap(),
            Row::new(Modality::Ct, 1, 52, 600.0)
        );
        assert_eq!(parse_row(":1:0:0").unwrap(), Row::blank());
        assert_eq!(
            parse_row("us: 2 : 10 : 12.5").unwrap(),
            Row::new(Modality::Us, 2, 10, 12.5)
        );
    }

    #[test]
    fn test_parse_row_rejects_malformed() {
        assert!(parse_row("CT:1:52").is_err());
        assert!(parse_row("PET:1:52:600").is_err());
        assert!(parse_row("CT:-1:52:600").is_err());
        assert!(parse_row("CT:1:52:-600").is_err());
        assert!(parse_row("CT:1:52:NaN").is_err());
    }

    #[test]
    fn test_build_session_defaults_to_seed() {
        let session = build_session(None, &[], None).unwrap();
        assert_eq!(session.state(), &EstimatorState::seed());
    }

    #[test]
    fn test_build_session_overrides() {
        let rows = vec!["MG:2:40:120".to_string(), "DX:1:60:20".to_string()];
        let session = build_session(None, &rows, Some("6m")).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.window(), Window::Months6);
        assert_eq!(session.rows()[0].modality, Modality::Mg);

        assert!(build_session(None, &[], Some("240")).is_err());
    }

    #[test]
    fn test_build_session_from_scenario() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"window_days": 31, "rows": [{{"modality": "NM", "devices": 1, "studies_per_day": 12, "study_size_mb": 80}}]}}"#
        )
        .unwrap();

        let session = build_session(Some(file.path()), &[], Some("1y")).unwrap();
        assert_eq!(session.window(), Window::Year1);
        assert_eq!(session.rows(), &[Row::new(Modality::Nm, 1, 12, 80.0)]);

        assert!(build_session(Some(Path::new("/nonexistent.json")), &[], None).is_err());
    }

    #[test]
    fn test_write_report_formats() {
        let session = Session::seeded();

        let mut table = Vec::new();
        write_report(&session, Format::Table, false, &mut table).unwrap();
        assert!(String::from_utf8(table).unwrap().contains("13114.45 GB"));

        let mut csv = Vec::new();
        write_report(&session, Format::Csv, false, &mut csv).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 4);

        assert_eq!(Format::Ndjson.to_string(), "ndjson");
        assert_eq!(Format::Table.to_string(), "table");
    }
}
