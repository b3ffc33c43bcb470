//! Estimate command implementation.
//!
//! Builds a session from the seed, a scenario file or explicit rows, and
//! prints the report in the requested format.

use crate::display::{Format, build_session, write_report};
use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Print the estimate for the given input.
pub(crate) fn estimate(
    scenario: Option<&Path>,
    rows: &[String],
    window: Option<&str>,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let session = build_session(scenario, rows, window)?;

    let mut out = BufWriter::new(std::io::stdout());
    write_report(&session, format, pretty, &mut out)
        .with_context(|| format!("Failed to write {format} report"))?;
    out.flush()?;
    Ok(())
}
